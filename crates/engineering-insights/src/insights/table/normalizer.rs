/// Cell spellings read as a missing value, as the usual dataframe CSV
/// readers do by default. Matched case-sensitively after trimming.
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Strips invisible marks and surrounding whitespace from a header name.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().to_string()
}

/// Empty cells and missing-value tokens both read as `None`.
pub(crate) fn present_value(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}
