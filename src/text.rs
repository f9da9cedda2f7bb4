//! Room attribute search matching.

/// Matches a search query against an attribute value.
///
/// A query wrapped in quotes must be contained verbatim in the attribute
/// value; an unquoted query matches when any of its words is contained.
/// Both sides compare case-insensitively.
pub fn attribute_matches(query: &str, value: &str) -> bool {
    let query = query.trim().to_lowercase();
    let value = value.to_lowercase();

    let quoted =
        query.len() >= 2 && query.starts_with(['"', '\'']) && query.ends_with(['"', '\'']);
    if quoted {
        value.contains(&query[1..query.len() - 1])
    } else {
        query.split_whitespace().any(|word| value.contains(word))
    }
}
