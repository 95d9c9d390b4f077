//! Main module for typogr library functionality
//!
//! Layout, leaf first:
//!
//!     token        - the Tag/Text token value
//!     lexing       - splits HTML into tokens
//!     opaque       - tracks skip-listed elements whose text must not change
//!     mapper       - walks a token stream through a rewriter
//!     smartypants  - punctuation educator (quotes, dashes, ellipses)
//!     rewriters    - amp, ord, caps, init_quotes, widont
//!     transforms   - composable stages and the rule catalogue
//!     pipeline     - typogrify, named configurations and their executor
//!     settings     - layered TOML settings for the command line tool

pub mod lexing;
pub mod mapper;
pub mod opaque;
pub mod pipeline;
pub mod rewriters;
pub mod settings;
pub mod smartypants;
pub mod token;
pub mod transforms;
