//! Individual transformation stages
//!
//! Each typographic rule is a [`Rule`] variant implementing `Runnable<String,
//! String>`. [`Tokenization`] is the odd one out: it stops at the token
//! stream instead of producing HTML.

use crate::typogr::lexing::tokenize;
use crate::typogr::rewriters::{amp, caps, init_quotes, ord, widont};
use crate::typogr::smartypants::{
    smart_backticks, smart_dashes, smart_ellipses, smart_escapes, smart_quotes, smartypants,
};
use crate::typogr::token::Token;
use crate::typogr::transforms::Runnable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every rule the engine knows, by its kebab-case name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Amp,
    Widont,
    Smartypants,
    Caps,
    InitQuotes,
    Ord,
    SmartEscapes,
    SmartDashes,
    SmartEllipses,
    SmartBackticks,
    SmartQuotes,
}

/// A rule name that matches no [`Rule`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

impl Rule {
    pub const ALL: [Rule; 11] = [
        Rule::Amp,
        Rule::Widont,
        Rule::Smartypants,
        Rule::Caps,
        Rule::InitQuotes,
        Rule::Ord,
        Rule::SmartEscapes,
        Rule::SmartDashes,
        Rule::SmartEllipses,
        Rule::SmartBackticks,
        Rule::SmartQuotes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Amp => "amp",
            Rule::Widont => "widont",
            Rule::Smartypants => "smartypants",
            Rule::Caps => "caps",
            Rule::InitQuotes => "init-quotes",
            Rule::Ord => "ord",
            Rule::SmartEscapes => "smart-escapes",
            Rule::SmartDashes => "smart-dashes",
            Rule::SmartEllipses => "smart-ellipses",
            Rule::SmartBackticks => "smart-backticks",
            Rule::SmartQuotes => "smart-quotes",
        }
    }

    /// One-line summary, shown by `--list-pipelines`
    pub fn description(&self) -> &'static str {
        match self {
            Rule::Amp => "Wrap free-standing ampersands in <span class=\"amp\">",
            Rule::Widont => "Join the last two words of each block with &nbsp;",
            Rule::Smartypants => "Educate quotes, dashes, ellipses and escapes",
            Rule::Caps => "Wrap runs of capitals in <span class=\"caps\">",
            Rule::InitQuotes => "Wrap the opening quote of a block in <span class=\"dquo|quo\">",
            Rule::Ord => "Wrap ordinal suffixes in <span class=\"ord\">",
            Rule::SmartEscapes => "Turn backslash escapes into character references",
            Rule::SmartDashes => "Turn -- and --- into en and em dashes",
            Rule::SmartEllipses => "Turn ... and . . . into an ellipsis",
            Rule::SmartBackticks => "Turn `` and '' into curly double quotes",
            Rule::SmartQuotes => "Turn straight quotes into curly quotes",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::Amp => amp(text),
            Rule::Widont => widont(text),
            Rule::Smartypants => smartypants(text),
            Rule::Caps => caps(text),
            Rule::InitQuotes => init_quotes(text),
            Rule::Ord => ord(text),
            Rule::SmartEscapes => smart_escapes(text),
            Rule::SmartDashes => smart_dashes(text),
            Rule::SmartEllipses => smart_ellipses(text),
            Rule::SmartBackticks => smart_backticks(text),
            Rule::SmartQuotes => smart_quotes(text),
        }
    }

    /// Parse a comma separated list such as `amp, caps,ord`
    pub fn parse_list(list: &str) -> Result<Vec<Rule>, UnknownRule> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts kebab-case or snake_case names, in any case
impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == normalized)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

impl Runnable<String, String> for Rule {
    fn run(&self, input: String) -> String {
        self.apply(&input)
    }
}

/// Tokenization stage: source text to the flat tag/text token stream
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Token>> for Tokenization {
    fn run(&self, input: String) -> Vec<Token> {
        tokenize(&input)
    }
}
