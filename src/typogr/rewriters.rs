//! Structural rewriters
//!
//!     Rules that wrap or join parts of the text with markup so they can be
//!     styled with CSS:
//!
//!         amp          ` & `             -> ` <span class="amp">&amp;</span> `
//!         ord          `2nd`             -> `2<span class="ord">nd</span>`
//!         caps         `KU`              -> `<span class="caps">KU</span>`
//!         init_quotes  `<p>"Hi`          -> `<p><span class="dquo">"</span>Hi`
//!         widont       `a b c d</p>`     -> `a b c<span class="widont">&nbsp;</span>d</p>`
//!
//!     `amp`, `ord` and `caps` are token mappers and never touch tags or the
//!     text of the skip-listed elements. `init_quotes` and `widont` match
//!     across tags and work on the raw string.

pub mod amp;
pub mod caps;
pub mod init_quotes;
pub mod ord;
pub mod widont;

pub use amp::amp;
pub use caps::caps;
pub use init_quotes::init_quotes;
pub use ord::ord;
pub use widont::widont;
