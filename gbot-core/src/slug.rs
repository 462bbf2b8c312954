//! Tag slugification: transliterate, lowercase, join on underscores.

use any_ascii::any_ascii;

/// Derives a filename-safe slug from a raw tag: ASCII transliteration
/// (Cyrillic included), lowercased, whitespace runs collapsed to `_`.
pub fn slugify(tag: &str) -> String {
    any_ascii(tag)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
