//! Filename sanitizing

/// Reduce a name part to `[a-z0-9_-]`, with no `..` and no edge `_`/`.`
///
/// May return an empty string; callers pick their own fallback.
#[must_use]
pub fn sanitize_component(name: &str) -> String {
    let replaced: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    replaced
        .replace("..", "_")
        .trim_matches(|c| c == '_' || c == '.')
        .to_string()
}
