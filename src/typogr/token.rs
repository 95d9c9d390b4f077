//! Token types shared by the tokenizer and every token-stream rewriter.
//!
//!     A document is a flat, ordered partition into two kinds of tokens:
//!
//!         Tag:  the full `<...>` markup, brackets included.
//!         Text: everything between two tags, entity references and literal
//!               punctuation included.
//!
//!     Concatenating the texts of a token sequence in order reproduces the
//!     source exactly. Spans are byte ranges into that source and are
//!     contiguous from the first token to the last.

use serde::Serialize;
use std::ops::Range;

/// The two kinds of token an HTML fragment is partitioned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Tag,
    Text,
}

/// A tag or a run of text, with its location in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn tag(text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind: TokenKind::Tag,
            text: text.into(),
            span,
        }
    }

    pub fn text(text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind: TokenKind::Text,
            text: text.into(),
            span,
        }
    }

    pub fn is_tag(&self) -> bool {
        self.kind == TokenKind::Tag
    }

    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }

    /// Lowercased element name of a tag token (`<PRE class=x>` -> `pre`).
    ///
    /// Returns `None` for text tokens and for markup that has no name, such as
    /// comments, doctypes or a stray `<<`.
    pub fn tag_name(&self) -> Option<String> {
        if !self.is_tag() {
            return None;
        }
        let inner = self.text.strip_prefix('<')?;
        let inner = inner.strip_prefix('/').unwrap_or(inner);
        let name: String = inner
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ':')
            .collect();
        if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(name.to_ascii_lowercase())
    }

    /// True for `</name ...>` tags
    pub fn is_closing_tag(&self) -> bool {
        self.is_tag() && self.text.starts_with("</")
    }

    /// True for `<name ... />` tags
    pub fn is_self_closing_tag(&self) -> bool {
        self.is_tag() && self.text.ends_with("/>")
    }
}

/// Concatenate token texts back into a document
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
