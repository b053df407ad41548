// src/page.rs
//! Filling the template and writing the page.
//!
//! The template is plain HTML with two markers: the placeholder token, which
//! receives the cards, and the `<h1>` heading, after which the subheading is
//! inserted. No other templating happens.
use std::path::PathBuf;

use crate::config::consts::{HEADING_ANCHOR, PLACEHOLDER};
use crate::config::options::PageOptions;
use crate::core::html::escape;
use crate::error::Result;
use crate::file::{read_text, write_document};

/// `<h2>` line such as `Skin type: Scales (3 animals)`.
pub fn subheading(caption: &str, label: &str, count: usize) -> String {
    let noun = if count == 1 { "animal" } else { "animals" };
    format!(
        "<h2 class='subheading'>{}: {} ({count} {noun})</h2>",
        escape(caption), escape(label)
    )
}

/// Substitute `body` for the placeholder and, when given, put `heading` on the
/// line after the `<h1>` anchor. Missing markers are left alone.
pub fn assemble(template: &str, body: &str, heading: Option<&str>) -> String {
    let html = template.replace(PLACEHOLDER, body);
    match heading {
        Some(h) => html.replace(HEADING_ANCHOR, &format!("{HEADING_ANCHOR}\n{h}")),
        None => html,
    }
}

/// Render the cards page and write it over the configured output file.
pub fn write_page(opts: &PageOptions, cards: &str, heading: &str) -> Result<PathBuf> {
    let template = read_text(&opts.template_path)?;
    let html = assemble(&template, cards, Some(heading));
    write_document(&opts.out_path, &html)?;
    Ok(opts.out_path.clone())
}

/// Page carrying only an explanation, used when there is nothing to list.
pub fn write_notice(opts: &PageOptions, message: &str) -> Result<PathBuf> {
    let template = read_text(&opts.template_path)?;
    let body = format!("<h2>{}</h2>\n", escape(message));
    let html = assemble(&template, &body, None);
    write_document(&opts.out_path, &html)?;
    Ok(opts.out_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_wording() {
        assert_eq!(
            subheading("Skin type", "Fur", 1),
            "<h2 class='subheading'>Skin type: Fur (1 animal)</h2>"
        );
        assert!(subheading("Skin type", "Fur", 0).ends_with("(0 animals)</h2>"));
        assert!(subheading("Skin type", "Fur", 2).ends_with("(2 animals)</h2>"));
    }

    #[test]
    fn label_is_escaped_in_heading() {
        let h = subheading("Search", "<b>", 3);
        assert!(h.contains("Search: &lt;b&gt; (3 animals)"));
    }

    #[test]
    fn assemble_replaces_markers() {
        let tpl = "<h1>My Animal Repository</h1>\n<ul>__REPLACE_ANIMALS_INFO__</ul>";
        let out = assemble(tpl, "<li>x</li>", Some("<h2>sub</h2>"));
        assert_eq!(out, "<h1>My Animal Repository</h1>\n<h2>sub</h2>\n<ul><li>x</li></ul>");

        let out = assemble(tpl, "", None);
        assert_eq!(out, "<h1>My Animal Repository</h1>\n<ul></ul>");
    }
}
