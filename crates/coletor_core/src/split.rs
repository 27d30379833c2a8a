/// Characters treated as line boundaries, the same set as Unicode-aware `splitlines`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Normalizes a free-text list field into its items.
///
/// `;` and line breaks both separate items; items are trimmed and blanks dropped.
/// Order is preserved and nothing is deduplicated.
pub fn split_field(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.replace(';', "\n")
        .split(LINE_BREAKS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
