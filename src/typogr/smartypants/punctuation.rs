//! Escapes, dashes, ellipses and backtick quotes.
//!
//! Each function works on a single run of text and knows nothing about tags;
//! [`smartypants`](super::smartypants) is the tag-aware driver.

use super::replace_all_fancy;
use fancy_regex::Regex;
use once_cell::sync::Lazy;

/// `--` that does not close an HTML comment (`-->`) and is not the tail of a
/// comment opener (`<!--`).
static EN_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^<][^!]|[^!]|^)--(?!>)").expect("valid en dash pattern"));

/// Backslash escapes forcing a "dumb" character, in the order they are applied
const ESCAPES: [(&str, &str); 6] = [
    ("\\\"", "&#34;"),
    ("\\'", "&#39;"),
    ("\\-", "&#45;"),
    ("\\.", "&#46;"),
    ("\\\\", "&#92;"),
    ("\\`", "&#96;"),
];

/// Replace backslash escapes with numeric character references so later rules
/// never see the escaped character.
///
/// `\"` `\'` `\-` `\.` `\\` and `` \` `` become `&#34;` `&#39;` `&#45;`
/// `&#46;` `&#92;` `&#96;`.
pub fn smart_escapes(text: &str) -> String {
    ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// `---` becomes an em dash and the remaining `--` an en dash.
pub fn smart_dashes(text: &str) -> String {
    let text = text.replace("---", "&#8212;");
    replace_all_fancy(&EN_DASH, &text, "${1}&#8211;", "smart_dashes")
}

/// `...` and `. . .` become an ellipsis.
pub fn smart_ellipses(text: &str) -> String {
    text.replace("...", "&#8230;").replace(". . .", "&#8230;")
}

/// ``` ``like this'' ``` style double quotes become curly quotes.
pub fn smart_backticks(text: &str) -> String {
    text.replace("``", "&#8220;").replace("''", "&#8221;")
}
