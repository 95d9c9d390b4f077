//! Opaque-region tracking
//!
//!     Some elements hold text that must never be rewritten: code samples,
//!     scripts, styles, math. The tracker keeps a stack of the skip-listed
//!     elements currently open while a token stream is scanned left to right.
//!     A text token is opaque iff the stack is non-empty when it is reached.
//!
//!     Stack discipline:
//!         - an opening skip tag pushes its (lowercased) name;
//!         - a closing skip tag pops only if its name is on top of the stack,
//!           otherwise it is ignored;
//!         - self-closing skip tags (`<script src=".." />`) open nothing;
//!         - tags outside the skip set never touch the stack.
//!
//!     The structural rewriters and the punctuation educator use different
//!     skip sets. The educator leaves `style` and `title` out of its set, and
//!     the two sets are kept separate.

use crate::typogr::token::Token;

/// A set of element names whose text content is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipTags(&'static [&'static str]);

impl SkipTags {
    /// Skip set for amp, ord and caps
    pub const TYPOGRAPHY: SkipTags =
        SkipTags(&["style", "pre", "code", "kbd", "script", "math", "title"]);

    /// Skip set for the punctuation educator
    pub const EDUCATOR: SkipTags = SkipTags(&["pre", "code", "kbd", "script", "math"]);

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|tag| tag.eq_ignore_ascii_case(name))
    }
}

/// Stack of open skip-listed elements
#[derive(Debug, Clone)]
pub struct OpaqueTracker {
    skip: SkipTags,
    stack: Vec<String>,
}

impl OpaqueTracker {
    pub fn new(skip: SkipTags) -> Self {
        OpaqueTracker {
            skip,
            stack: Vec::new(),
        }
    }

    /// Feed a tag token to the tracker. Text tokens are ignored.
    pub fn observe(&mut self, token: &Token) {
        let Some(name) = token.tag_name() else {
            return;
        };
        if !self.skip.contains(&name) {
            return;
        }

        if token.is_closing_tag() {
            if self.stack.last() == Some(&name) {
                self.stack.pop();
            }
        } else if !token.is_self_closing_tag() {
            self.stack.push(name);
        }
    }

    /// Whether text reached now falls inside an opaque element
    pub fn is_opaque(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// For each token, whether it is a text token inside an opaque element.
///
/// Tag tokens are always reported as `false`.
pub fn mark_opaque(tokens: &[Token], skip: SkipTags) -> Vec<bool> {
    let mut tracker = OpaqueTracker::new(skip);
    tokens
        .iter()
        .map(|token| {
            if token.is_tag() {
                tracker.observe(token);
                false
            } else {
                tracker.is_opaque()
            }
        })
        .collect()
}
