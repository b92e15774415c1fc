use std::sync::LazyLock;

use regex::Regex;

// Heading, emphasis, code, block-quote and list markers.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*`>-]").unwrap());

/// Strip structural markup from raw generated text, leaving the content
/// intact. Every other character, including ordinary punctuation, is kept.
/// Applying this twice yields the same result as applying it once.
pub fn clean_summary(draft: &str) -> String {
    let stripped = MARKUP.replace_all(draft, "");

    let mut result = String::with_capacity(stripped.len());
    for (i, line) in stripped.lines().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(line.trim());
    }

    result.trim().to_string()
}
