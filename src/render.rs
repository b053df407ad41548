// src/render.rs
//! Record → HTML card.
//!
//! Every card has the same shape and the same field order no matter how the
//! source JSON was laid out. Fields without a value produce no line at all.
use crate::core::html::{esc, escape};
use crate::record::AnimalRecord;

const DISTINCTIVE_KEYS: &[&str] = &["distinctive_feature", "most_distinctive_feature"];

const I2: &str = "  ";
const I4: &str = "    ";
const I6: &str = "      ";

/// Render one record as a `<li class='cards__item'>` block.
/// Returns an empty string when the record has no name; such records are
/// left off the page.
pub fn card(animal: &AnimalRecord) -> String {
    let Some(name) = esc(animal.name()) else {
        return s!();
    };

    // Fixed display order.
    let fields = [
        ("Diet", esc(animal.characteristic("diet"))),
        ("Main prey", esc(animal.characteristic("main_prey"))),
        ("Location", animal.first_location().map(escape)),
        ("Habitat", esc(animal.characteristic("habitat"))),
        ("Type", esc(animal.characteristic("type"))),
        ("Distinctive feature", esc(animal.first_characteristic(DISTINCTIVE_KEYS))),
    ];

    let mut parts = vec![
        s!("<li class='cards__item'>"),
        format!("{I2}<div class='card__title'><strong>{name}</strong></div>"),
        format!("{I2}<div class='card__text'>"),
        format!("{I4}<ul class='animal-info'>"),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            parts.push(info_item!(I6, label, value));
        }
    }
    parts.push(format!("{I4}</ul>"));
    parts.push(format!("{I2}</div>"));
    parts.push(s!("</li>"));

    let mut out = parts.join("\n");
    out.push('\n');
    out
}

/// Rendered cards for a selection, nameless records already dropped.
pub struct Cards {
    pub html: String,
    pub count: usize,
}

/// Render and concatenate in input order. `count` is the number of cards that
/// actually made it onto the page.
pub fn cards<'a, I>(animals: I) -> Cards
where
    I: IntoIterator<Item = &'a AnimalRecord>,
{
    let mut html = s!();
    let mut count = 0;
    for animal in animals {
        let fragment = card(animal);
        if fragment.is_empty() { continue; }
        html.push_str(&fragment);
        count += 1;
    }
    Cards { html, count }
}
