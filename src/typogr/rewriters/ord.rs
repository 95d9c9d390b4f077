//! Ordinal suffix wrapping

use crate::typogr::mapper::{map_source, TokenMapper};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)(st|nd|rd|th)").expect("valid ordinal pattern"));

/// Wrap ordinal suffixes (`1st`, `22nd`, `103rd`, `4th`) in
/// `<span class="ord">`.
pub fn ord(text: &str) -> String {
    map_source(text, &mut OrdMapper)
}

struct OrdMapper;

impl TokenMapper for OrdMapper {
    fn map_text(&mut self, text: &str) -> String {
        ORDINAL
            .replace_all(text, r#"${1}<span class="ord">${2}</span>"#)
            .into_owned()
    }
}
