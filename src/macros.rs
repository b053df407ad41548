// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! info_item {
    // One bullet of a card's inner list. `$value` must already be escaped.
    ($indent:expr, $label:expr, $value:expr) => {
        format!(
            "{}<li class='animal-info__item'><strong>{}:</strong> {}</li>",
            $indent, $label, $value
        )
    };
}
