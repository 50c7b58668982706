//! String utility functions

/// Parse a list-valued setting given as a JSON array or comma-separated values.
///
/// Order is preserved and duplicates are kept; blank entries are dropped.
///
/// - JSON arrays: `["createDB.sql", "populateDB.sql"]`
/// - Comma-separated: `createDB.sql, populateDB.sql`
pub fn parse_string_array(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    trimmed
        .trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(|s| s.trim().trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
