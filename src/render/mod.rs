//! Human-readable rendering of untyped configuration trees.

mod renderer;
mod tree;

#[cfg(test)]
mod tests;

pub use renderer::{DEFAULT_MAX_DEPTH, RenderDiagnostic, Renderer};
pub use tree::ConfigTree;

/// Formats a tree key for display.
///
/// Underscores become spaces, then the first letter of every
/// whitespace-separated word is uppercased. The rest of each word is kept
/// as is.
///
/// ```
/// use gantry::render::format_key;
///
/// assert_eq!(format_key("primary_region"), "Primary Region");
/// assert_eq!(format_key("internal_port"), "Internal Port");
/// ```
pub fn format_key(key: &str) -> String {
    let mut formatted = String::with_capacity(key.len());
    let mut word_start = true;

    for c in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if word_start && !c.is_whitespace() {
            formatted.extend(c.to_uppercase());
        } else {
            formatted.push(c);
        }
        word_start = c.is_whitespace();
    }

    formatted
}
