//! # typogr
//!
//! Typographic refinements for HTML fragments: smart quotes, dashes and
//! ellipses, ampersand and capital wrapping, ordinal suffixes, initial quotes
//! and widow control.
//!
//! The entry point most callers want is [`typogrify`], which runs every rule in
//! its fixed order. Individual rules live under [`typogr::rewriters`] and
//! [`typogr::smartypants`], and can be chained freely through
//! [`typogr::transforms::pipe`].

pub mod typogr;

pub use typogr::lexing::tokenize;
pub use typogr::pipeline::{typogrify, MarkupSource, Source};
pub use typogr::rewriters::{amp, caps, init_quotes, ord, widont};
pub use typogr::smartypants::{
    smart_backticks, smart_dashes, smart_ellipses, smart_escapes, smart_quotes, smartypants,
};
pub use typogr::token::{Token, TokenKind};
pub use typogr::transforms::{pipe, Rule, Transform};
