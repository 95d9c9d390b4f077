//! Widow control
//!
//! The space before the last word of a block becomes a non-breaking space
//! so the word never ends up alone on the last line. Blocks end at a closing
//! `p`, `h1`-`h6`, `li`, `dt` or `dd` tag, or at the end of the text. Blocks
//! of fewer than four words are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

const INLINE_TAGS: &str = "a|em|span|strong|i|b";

static WIDOW: Lazy<Regex> = Lazy::new(|| {
    let word = format!(
        r"(?:<(?:{inline})[^>]*?>)*?[^\s<>]+(?:</(?:{inline})[^>]*?>)*?",
        inline = INLINE_TAGS
    );
    let pattern = format!(
        concat!(
            r"(?i)(\s+{word}\s+{word})",
            r"(?:\s+)",
            r"([^<>\s]+",
            r"(?:\s*</(?:{inline})[^>]*?>\s*\.*)*?",
            r"(?:\s*?</(?:p|h[1-6]|li|dt|dd)>|$))",
        ),
        word = word,
        inline = INLINE_TAGS
    );
    Regex::new(&pattern).expect("valid widow pattern")
});

/// Join the last two words of every block with `&nbsp;`.
pub fn widont(text: &str) -> String {
    WIDOW
        .replace_all(text, r#"${1}<span class="widont">&nbsp;</span>${2}"#)
        .into_owned()
}
