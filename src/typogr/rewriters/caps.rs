//! Capital letter wrapping
//!
//!     Two shapes of capitals are wrapped in `<span class="caps">`:
//!
//!         runs      two or more capitals, digits allowed between them and
//!                   capitals, digits or dumb apostrophes after them
//!                   (`KU`, `2KU2`, `HE34T`, `JIMMY'S`)
//!         dotted    abbreviations of at least two dotted parts, each
//!                   optionally followed by one space (`D.O.T.`, `U. S.`)
//!
//!     A dotted abbreviation followed by a space keeps that space outside the
//!     span. The pattern also consumes one more whitespace character after a
//!     dotted abbreviation, and that character is dropped: `D.O.T.   x`
//!     comes out with two spaces before `x`.
//!
//!     Word boundaries are ASCII only, so a run right after an accented
//!     letter still counts (`ÉKU` wraps `KU`).
//!
//!     Text already inside a `<span class="caps">`, nested spans included, is
//!     never wrapped again, so running the rule twice gives the same result as
//!     running it once.

use crate::typogr::mapper::{map_source, TokenMapper};
use crate::typogr::token::Token;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CAPITALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(",
        r"((?-u:\b)[A-Z0-9]*[A-Z][0-9]*[A-Z][A-Z0-9']*(?-u:\b))",
        r"|((?-u:\b)[A-Z]+\.\s?(?:[A-Z]+\.\s?)+)(?:\s|(?-u:\b)|$)",
        r")"
    ))
    .expect("valid capitals pattern")
});

static CAPS_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*["']?caps\b"#).expect("valid caps class pattern")
});

/// Wrap runs of capitals and dotted abbreviations in `<span class="caps">`.
pub fn caps(text: &str) -> String {
    map_source(text, &mut CapsMapper::default())
}

/// `span_depth` counts the spans open since the outermost caps span; zero
/// means the text is live.
#[derive(Debug, Default)]
struct CapsMapper {
    span_depth: usize,
}

impl CapsMapper {
    fn in_caps_span(&self) -> bool {
        self.span_depth > 0
    }
}

impl TokenMapper for CapsMapper {
    fn map_text(&mut self, text: &str) -> String {
        if self.in_caps_span() {
            return text.to_string();
        }
        CAPITALS.replace_all(text, wrap_capitals).into_owned()
    }

    fn visit_tag(&mut self, tag: &Token) {
        if tag.tag_name().as_deref() != Some("span") || tag.is_self_closing_tag() {
            return;
        }
        if tag.is_closing_tag() {
            self.span_depth = self.span_depth.saturating_sub(1);
        } else if self.in_caps_span() || CAPS_CLASS.is_match(&tag.text) {
            self.span_depth += 1;
        }
    }
}

fn wrap_capitals(captures: &Captures) -> String {
    if let Some(run) = captures.get(2) {
        return format!(r#"<span class="caps">{}</span>"#, run.as_str());
    }

    let dotted = captures.get(3).map_or("", |m| m.as_str());
    match dotted.strip_suffix(' ') {
        Some(abbreviation) => format!(r#"<span class="caps">{}</span> "#, abbreviation),
        None => format!(r#"<span class="caps">{}</span>"#, dotted),
    }
}
