//! Display-name normalization.

/// Capitalize each whitespace-separated token of `input`.
///
/// The first character of every token is uppercased and the remainder
/// lowercased; tokens are rejoined with single spaces. Runs of whitespace
/// collapse, so the output is stable under repeated application.
pub fn capitalize_words(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
