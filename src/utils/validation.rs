// Normalization helpers for query-string filters

/// Trim a text filter; an all-whitespace filter means no filter at all
pub fn normalize_filter(field: Option<&str>) -> Option<String> {
    field.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
