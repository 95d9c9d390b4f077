//! Token mapper trait and the walk that drives it
//!
//! Token-stream rewriters implement `TokenMapper` and only decide what to do
//! with a run of live text. `walk_tokens` handles everything else: tags are
//! copied through, the opaque tracker is fed, and opaque text is copied
//! through untouched. Mappers can watch tags and opaque text through the
//! `visit_*` hooks when they need cross-token state.
//!
//! # Examples
//!
//! ```ignore
//! struct Shout;
//!
//! impl TokenMapper for Shout {
//!     fn map_text(&mut self, text: &str) -> String {
//!         text.to_uppercase()
//!     }
//! }
//!
//! assert_eq!(map_source("<pre>a</pre>b", &mut Shout), "<pre>a</pre>B");
//! ```

use crate::typogr::lexing::tokenize;
use crate::typogr::opaque::{OpaqueTracker, SkipTags};
use crate::typogr::token::{Token, TokenKind};

/// A rewrite over the text tokens of a stream.
///
/// All hooks but `map_text` default to doing nothing.
pub trait TokenMapper {
    /// Which elements make their text opaque to this mapper
    fn skip_tags(&self) -> SkipTags {
        SkipTags::TYPOGRAPHY
    }

    /// Rewrite a text token that is outside every opaque element
    fn map_text(&mut self, text: &str) -> String;

    /// Called for every tag token, before it is copied to the output
    fn visit_tag(&mut self, _tag: &Token) {}

    /// Called for every opaque text token, before it is copied to the output
    fn visit_opaque(&mut self, _text: &str) {}
}

/// Run `mapper` over `tokens` and concatenate the result.
pub fn walk_tokens<M>(tokens: &[Token], mapper: &mut M) -> String
where
    M: TokenMapper + ?Sized,
{
    let mut tracker = OpaqueTracker::new(mapper.skip_tags());
    let mut output = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());

    for token in tokens {
        match token.kind {
            TokenKind::Tag => {
                tracker.observe(token);
                mapper.visit_tag(token);
                output.push_str(&token.text);
            }
            TokenKind::Text if tracker.is_opaque() => {
                mapper.visit_opaque(&token.text);
                output.push_str(&token.text);
            }
            TokenKind::Text => {
                output.push_str(&mapper.map_text(&token.text));
            }
        }
    }

    output
}

/// Tokenize `source` and walk it with `mapper`
pub fn map_source<M>(source: &str, mapper: &mut M) -> String
where
    M: TokenMapper + ?Sized,
{
    if source.is_empty() {
        return String::new();
    }
    walk_tokens(&tokenize(source), mapper)
}
