//! Tokenizer for HTML fragments
//!
//!     This is not an HTML parser. Tags are found with the naive pattern
//!     `<[^>]*>`: the first `>` after a `<` closes the tag, so a `>` inside an
//!     attribute value ends the tag early. A `<` with no `>` after it is text.
//!     Everything that is not a tag is text, so the partition is lossless.
//!
//!     The raw scan is done by a logos lexer. Only its tag matches are used;
//!     text tokens are cut from the gaps between tags, which also absorbs any
//!     stray `<` the lexer could not match.
//!
//! Sentence-final periods
//!
//!     When the document ends in a single `.` (not `..`), that period becomes
//!     a text token of its own. Rules that look at "the previous text token"
//!     (the quote context in smartypants) then see the word before the
//!     period, as in `"<a href="#">link</a>".`

use crate::typogr::token::Token;
use logos::Logos;

/// Raw lexemes produced by logos. Text lexemes are informational only.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"<[^>]*>")]
    Tag,

    #[regex(r"[^<]+")]
    Text,
}

/// Split `source` into an ordered sequence of tag and text tokens.
///
/// Empty text runs are never emitted, so an empty source yields no tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(result) = lexer.next() {
        if let Ok(Lexeme::Tag) = result {
            let span = lexer.span();
            if span.start > cursor {
                tokens.push(Token::text(&source[cursor..span.start], cursor..span.start));
            }
            tokens.push(Token::tag(lexer.slice(), span.clone()));
            cursor = span.end;
        }
    }

    push_trailing_text(source, cursor, &mut tokens);

    tracing::trace!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    tokens
}

fn push_trailing_text(source: &str, start: usize, tokens: &mut Vec<Token>) {
    let end = source.len();
    if start >= end {
        return;
    }

    if source.ends_with('.') && !source.ends_with("..") {
        let period = end - 1;
        if period > start {
            tokens.push(Token::text(&source[start..period], start..period));
        }
        tokens.push(Token::text(".", period..end));
    } else {
        tokens.push(Token::text(&source[start..end], start..end));
    }
}
