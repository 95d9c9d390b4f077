//! Standard transform definitions
//!
//! Pre-built transforms for the common paths, as `once_cell::sync::Lazy`
//! statics.

use crate::typogr::token::Token;
use crate::typogr::transforms::stages::{Rule, Tokenization};
use crate::typogr::transforms::{pipe, Transform};
use once_cell::sync::Lazy;

/// Type alias for the HTML-to-HTML transforms
pub type HtmlTransform = Transform<String, String>;

/// Rule order used by `typogrify`
pub const TYPOGRIFY_RULES: [Rule; 6] = [
    Rule::Amp,
    Rule::Widont,
    Rule::Smartypants,
    Rule::Caps,
    Rule::InitQuotes,
    Rule::Ord,
];

/// Every rule, in the order `typogrify` applies them.
///
/// `widont` runs before `smartypants` and `caps`, so the words it counts are
/// still plain text; `init_quotes` runs after `smartypants` and finds the
/// educated `&#8220;`/`&#8216;` entities.
pub static TYPOGRIFY: Lazy<HtmlTransform> = Lazy::new(|| pipe(TYPOGRIFY_RULES));

/// Source text to the flat tag/text token stream
pub static TOKENIZATION: Lazy<Transform<String, Vec<Token>>> =
    Lazy::new(|| Transform::from_fn(|s: String| s).then(Tokenization::new()));
