// tests/grouping.rs
//
// Attribute index and selection over a small dataset.
//
use animal_page::index::{AttributeIndex, Label, filter_by_value};
use animal_page::record::AnimalRecord;

fn skin(name: &str, skin: &str) -> AnimalRecord {
    AnimalRecord::named(name).with("skin_type", skin)
}

fn names(list: &[&AnimalRecord]) -> Vec<String> {
    list.iter().map(|a| a.name().unwrap().to_string()).collect()
}

#[test]
fn first_seen_casing_and_unknown_bucket() {
    let data = vec![
        skin("Gecko", "Scales"),
        skin("Snake", "scales"),
        skin("Fox", "Fur"),
        AnimalRecord::named("Jelly"),
    ];
    let idx = AttributeIndex::build(&data, "skin_type");
    assert_eq!(idx.labels(), ["Scales", "Fur"]);
    assert_eq!(names(&idx.select(&data, &Label::Unknown)), ["Jelly"]);
}

#[test]
fn values_are_trimmed_and_blank_counts_as_unknown() {
    let data = vec![
        skin("A", "  Fur "),
        skin("B", "FUR"),
        skin("C", "   "),
        AnimalRecord::named("D").with("skin_type", ""),
    ];
    let idx = AttributeIndex::build(&data, "skin_type");
    assert_eq!(idx.labels(), ["Fur"]);
    assert_eq!(names(&idx.select(&data, &Label::Named("fur".into()))), ["A", "B"]);
    assert_eq!(names(&idx.select(&data, &Label::Unknown)), ["C", "D"]);
}

#[test]
fn named_and_unknown_partition_dataset() {
    let data = vec![
        skin("A", "Fur"),
        AnimalRecord::named("B"),
        skin("C", "fur "),
        skin("D", "Scales"),
        AnimalRecord::default(),
        skin("F", "Scales"),
    ];
    let idx = AttributeIndex::build(&data, "skin_type");

    let mut covered = 0;
    for label in idx.choices() {
        covered += idx.select(&data, &label).len();
    }
    assert_eq!(covered, data.len());

    let fur = idx.select(&data, &Label::Named("Fur".into()));
    let unknown = idx.select(&data, &Label::Unknown);
    for a in &fur {
        assert!(!unknown.iter().any(|u| std::ptr::eq(*u, *a)));
    }
}

#[test]
fn grouping_key_is_configurable() {
    let data = vec![
        AnimalRecord::named("Cow").with("diet", "Herbivore"),
        AnimalRecord::named("Lion").with("diet", "Carnivore"),
        AnimalRecord::named("Goat").with("diet", "herbivore"),
    ];
    let idx = AttributeIndex::build(&data, "diet");
    assert_eq!(idx.key(), "diet");
    assert_eq!(idx.labels(), ["Herbivore", "Carnivore"]);
    assert!(!idx.has_unknown());
    assert_eq!(names(&filter_by_value(&data, "diet", "HERBIVORE")), ["Cow", "Goat"]);
}
