//! Item identifier normalization.

/// Case-fold an item and collapse its whitespace.
///
/// Reviews are keyed by the normalized form, so "Foo", " foo" and "FOO"
/// all refer to the same item.
pub fn normalize_item(item: &str) -> String {
    item.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
