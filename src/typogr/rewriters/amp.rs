//! Ampersand wrapping

use crate::typogr::mapper::{map_source, TokenMapper};
use once_cell::sync::Lazy;
use regex::Regex;

/// A bare or escaped ampersand with whitespace or `&nbsp;` on both sides
static AMPERSAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s|&nbsp;)(&|&amp;|&#38;)(\s|&nbsp;)").expect("valid ampersand pattern")
});

/// Wrap free-standing ampersands in `<span class="amp">`, normalizing them to
/// `&amp;`.
///
/// Ampersands inside attribute values, entities, URLs and skip-listed
/// elements are left alone.
pub fn amp(text: &str) -> String {
    map_source(text, &mut AmpMapper)
}

struct AmpMapper;

impl TokenMapper for AmpMapper {
    fn map_text(&mut self, text: &str) -> String {
        AMPERSAND
            .replace_all(text, r#"${1}<span class="amp">&amp;</span>${3}"#)
            .into_owned()
    }
}
