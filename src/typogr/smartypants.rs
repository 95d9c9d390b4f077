//! Punctuation educator ("smart quotes")
//!
//!     Translates plain ASCII punctuation into typographic HTML entities:
//!
//!         escapes    \" \' \- \. \\ \`   ->  &#34; &#39; &#45; &#46; &#92; &#96;
//!         dashes     --- / --            ->  &#8212; / &#8211;
//!         ellipses   ... / . . .         ->  &#8230;
//!         backticks  `` / ''             ->  &#8220; / &#8221;
//!         quotes     ' "                 ->  &#8216; &#8217; &#8220; &#8221;
//!
//!     The sub-rules work on plain text. `smartypants` applies them, in that
//!     order, to every text token outside `pre`, `code`, `kbd`, `script` and
//!     `math` (see [`SkipTags::EDUCATOR`]).
//!
//! Quote context
//!
//!     A text token made of a single quote character has no neighbours to
//!     decide its direction from, e.g. the closing `"` in
//!     `"<a href="#">link</a>"`. The last character of the previous text token
//!     decides: anything but whitespace makes it a closing quote. Opaque text
//!     tokens still update the context.

pub mod punctuation;
pub mod quotes;

pub use punctuation::{smart_backticks, smart_dashes, smart_ellipses, smart_escapes};
pub use quotes::smart_quotes;

use crate::typogr::mapper::{map_source, TokenMapper};
use crate::typogr::opaque::SkipTags;
use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::Regex;

static ROCK_N_ROLL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(rock )'n'( roll)").expect("valid rock 'n' roll pattern"));

/// Educate the punctuation of an HTML fragment.
pub fn smartypants(text: &str) -> String {
    map_source(text, &mut Educator::new())
}

/// Token mapper carrying the quote context across text tokens
#[derive(Debug, Default)]
pub struct Educator {
    previous_last_char: Option<char>,
}

impl Educator {
    pub fn new() -> Self {
        Self::default()
    }

    fn follows_non_whitespace(&self) -> bool {
        self.previous_last_char
            .is_some_and(|c| !c.is_whitespace())
    }

    fn educate(&self, text: &str) -> String {
        let text = smart_escapes(text);
        let text = smart_dashes(&text);
        let text = smart_ellipses(&text);
        // backticks first, or `` and '' would read as two single quotes
        let text = smart_backticks(&text);

        match text.as_str() {
            "'" if self.follows_non_whitespace() => "&#8217;".to_string(),
            "'" => "&#8216;".to_string(),
            "\"" if self.follows_non_whitespace() => "&#8221;".to_string(),
            "\"" => "&#8220;".to_string(),
            _ => smart_quotes(&text),
        }
    }
}

impl TokenMapper for Educator {
    fn skip_tags(&self) -> SkipTags {
        SkipTags::EDUCATOR
    }

    fn map_text(&mut self, text: &str) -> String {
        let text = ROCK_N_ROLL.replace_all(text, "${1}&#8217;n&#8217;${2}");
        let last_char = text.chars().last();
        let educated = self.educate(&text);
        self.previous_last_char = last_char;
        educated
    }

    fn visit_opaque(&mut self, text: &str) {
        self.previous_last_char = text.chars().last();
    }
}

/// Run a look-around pattern, leaving `text` unchanged if the backtracking
/// engine gives up.
pub(crate) fn replace_all_fancy(
    pattern: &FancyRegex,
    text: &str,
    replacement: &str,
    rule: &str,
) -> String {
    match pattern.try_replacen(text, 0, replacement) {
        Ok(replaced) => replaced.into_owned(),
        Err(err) => {
            tracing::warn!(rule, error = %err, "pattern aborted, text left unchanged");
            text.to_string()
        }
    }
}
