//! Pipeline orchestration
//!
//! [`typogrify`] is the everyday entry point: it runs the standard rule order
//! over one input. The [`config`] and [`executor`] submodules hold the named
//! pipelines the command line tool chooses from.
//!
//! Inputs are anything convertible to a [`Source`]: string slices, owned
//! strings, an optional slice (`None` gives empty output), or an object that
//! can render itself to HTML through [`MarkupSource`].

pub mod config;
pub mod executor;

pub use config::{ConfigRegistry, PipelineConfig, TargetSpec};
pub use executor::{ExecutionError, ExecutionOutput, PipelineExecutor};

use crate::typogr::transforms::standard::TYPOGRIFY;
use std::borrow::Cow;

/// Something that can produce the HTML to be processed, such as a rendered
/// template or a DOM wrapper.
pub trait MarkupSource {
    fn html(&self) -> String;
}

/// Input accepted by [`typogrify`], resolved once at entry
pub enum Source<'a> {
    Plain(&'a str),
    Markup(&'a dyn MarkupSource),
}

impl<'a> Source<'a> {
    pub fn html(&self) -> Cow<'a, str> {
        match self {
            Source::Plain(text) => Cow::Borrowed(*text),
            Source::Markup(markup) => Cow::Owned(markup.html()),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Plain(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Plain(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Source<'a> {
    fn from(text: Option<&'a str>) -> Self {
        Source::Plain(text.unwrap_or_default())
    }
}

impl<'a> From<&'a dyn MarkupSource> for Source<'a> {
    fn from(markup: &'a dyn MarkupSource) -> Self {
        Source::Markup(markup)
    }
}

impl<'a, T: MarkupSource> From<&'a T> for Source<'a> {
    fn from(markup: &'a T) -> Self {
        Source::Markup(markup)
    }
}

/// Apply every rule in the standard order:
/// `amp`, `widont`, `smartypants`, `caps`, `init_quotes`, `ord`.
pub fn typogrify<'a>(input: impl Into<Source<'a>>) -> String {
    let html = input.into().html();
    if html.is_empty() {
        return String::new();
    }
    TYPOGRIFY.run(html.into_owned())
}
