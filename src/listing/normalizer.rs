//! Normalization of raw model output
//!
//! Vision models answer in loosely formatted prose: markdown emphasis,
//! decorative divider lines, and sometimes explicit "Title:"/"Description:"
//! labels. `normalize` reduces that to a plain record. The transformation is
//! total: any input string, including the empty one, yields a valid result.

use crate::listing::ProductDescription;

/// Normalize a raw completion into a structured listing.
///
/// The first content line becomes the title, every later content line is
/// folded into the description. Blank lines and divider lines are dropped.
/// Label tokens are only recognized at the very start of their field, before
/// any surrounding whitespace is trimmed.
pub fn normalize(raw: &str) -> ProductDescription {
    let lines: Vec<&str> = raw
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !is_separator(trimmed)
        })
        .collect();

    let Some((first, rest)) = lines.split_first() else {
        return ProductDescription::default();
    };

    let title = strip_label(first, "title:")
        .replace(['*', '_'], "")
        .trim()
        .to_string();

    let joined = rest.join(" ");
    let description = strip_label(&joined, "description:").trim().to_string();

    ProductDescription { title, description }
}

/// A line that is purely decorative: nothing but `*`, `-`, `_`, `=`
/// and whitespace. Expects its input pre-trimmed and non-empty.
fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '*' | '-' | '_' | '=') || c.is_whitespace())
}

/// Strip a leading `label` token (ASCII case-insensitive) together with the
/// whitespace that follows it. The label must sit at the very start of the
/// text; an indented label is content, not markup.
fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    match text.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => text[label.len()..].trim_start(),
        _ => text,
    }
}
