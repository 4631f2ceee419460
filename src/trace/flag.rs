/// Tokens accepted as "true" in a trace's interpolated column, sorted for binary search.
///
/// Existing trace files were written against exactly this vocabulary.
pub const TRUTHY_TOKENS: [&str; 10] = [
    "certainly",
    "t",
    "tr",
    "tru",
    "true",
    "uh-huh",
    "y",
    "yeah",
    "yes",
    "yup",
];

/// Case-insensitive lookup of `token` (surrounding whitespace ignored) in [`TRUTHY_TOKENS`].
/// Anything not in the table, including the empty string, is `false`.
pub fn parse_flag(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    TRUTHY_TOKENS.binary_search(&token.as_str()).is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/trace/flag.rs"]
mod tests;
