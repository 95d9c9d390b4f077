//! Context-sensitive curly quote resolution
//!
//!     A SmartyPants-style cascade. Every stage rewrites the quotes it is sure
//!     about into entities, so later, looser stages only ever see the quotes
//!     still left dumb. The order is significant:
//!
//!         1. a quote opening the text and followed by punctuation at a
//!            non-word-break is closed by force
//!         2. nested `"'` / `'"` pairs before a word are opened together
//!         3. decade abbreviations (`'80s`) get an apostrophe
//!         4. opening single quotes
//!         5. closing single quotes, strict then permissive variant
//!         6. any single quote still left is an apostrophe
//!         7. opening double quotes
//!         8. closing double quotes, before whitespace then after a character
//!         9. any double quote still left opens
//!
//!     The two closing-single-quote patterns overlap and are kept as two
//!     passes. Their look-aheads contain literal spaces.

use super::replace_all_fancy;
use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::Regex;

const OPEN_SINGLE: &str = "&#8216;";
const CLOSE_SINGLE: &str = "&#8217;";
const OPEN_DOUBLE: &str = "&#8220;";
const CLOSE_DOUBLE: &str = "&#8221;";

/// Left context that makes a following quote an opening one
const OPENING_CONTEXT: &str = r"(\s|&nbsp;|--|&[mn]dash;|&#8211;|&#8212;|&#x201[34];)";

/// Characters that cannot precede a closing quote
const CLOSE_CLASS: &str = r"[^ \t\r\n\[{(\-]";

fn fancy(pattern: &str) -> FancyRegex {
    FancyRegex::new(pattern).expect("valid quote pattern")
}

static FORCE_CLOSE_SINGLE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(r##"^'(?=[!"#$%'()*+,\-./:;<=>?@\[\\\]^_`{|}~]\B)"##));

static FORCE_CLOSE_DOUBLE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(r##"^"(?=[!"#$%'()*+,\-./:;<=>?@\[\\\]^_`{|}~]\B)"##));

static DOUBLE_THEN_SINGLE: Lazy<FancyRegex> = Lazy::new(|| fancy(r#""'(?=\w)"#));

static SINGLE_THEN_DOUBLE: Lazy<FancyRegex> = Lazy::new(|| fancy(r#"'"(?=\w)"#));

static DECADE: Lazy<FancyRegex> = Lazy::new(|| fancy(r"'(?=[0-9]{2}s)"));

static OPENING_SINGLE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(&format!(r"{}'(?=\w)", OPENING_CONTEXT)));

static CLOSING_SINGLE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(&format!(r"({})'(?!\s | s\b | \d)", CLOSE_CLASS)));

static CLOSING_SINGLE_PERMISSIVE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(&format!(r"({})'(?!\s | s\b)", CLOSE_CLASS)));

static OPENING_DOUBLE: Lazy<FancyRegex> =
    Lazy::new(|| fancy(&format!(r#"{}"(?=\w)"#, OPENING_CONTEXT)));

static CLOSING_DOUBLE_BEFORE_SPACE: Lazy<FancyRegex> = Lazy::new(|| fancy(r#""(?=\s)"#));

static CLOSING_DOUBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#"({})""#, CLOSE_CLASS)).expect("valid closing double quote pattern")
});

/// Replace straight quotes with curly quote entities.
pub fn smart_quotes(text: &str) -> String {
    if !text.contains(['\'', '"']) {
        return text.to_string();
    }

    let single_open = format!("${{1}}{}", OPEN_SINGLE);
    let single_close = format!("${{1}}{}", CLOSE_SINGLE);
    let double_open = format!("${{1}}{}", OPEN_DOUBLE);
    let double_close = format!("${{1}}{}", CLOSE_DOUBLE);

    let single_stages: [(&FancyRegex, &str, &str); 8] = [
        (&*FORCE_CLOSE_SINGLE, CLOSE_SINGLE, "force_close_single"),
        (&*FORCE_CLOSE_DOUBLE, CLOSE_DOUBLE, "force_close_double"),
        (&*DOUBLE_THEN_SINGLE, "&#8220;&#8216;", "double_then_single"),
        (&*SINGLE_THEN_DOUBLE, "&#8216;&#8220;", "single_then_double"),
        (&*DECADE, CLOSE_SINGLE, "decade"),
        (&*OPENING_SINGLE, &single_open, "opening_single"),
        (&*CLOSING_SINGLE, &single_close, "closing_single"),
        (&*CLOSING_SINGLE_PERMISSIVE, &single_close, "closing_single_permissive"),
    ];
    let double_stages: [(&FancyRegex, &str, &str); 2] = [
        (&*OPENING_DOUBLE, &double_open, "opening_double"),
        (&*CLOSING_DOUBLE_BEFORE_SPACE, CLOSE_DOUBLE, "closing_double_before_space"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement, stage) in single_stages {
        result = replace_all_fancy(pattern, &result, replacement, stage);
    }
    result = result.replace('\'', CLOSE_SINGLE);

    for (pattern, replacement, stage) in double_stages {
        result = replace_all_fancy(pattern, &result, replacement, stage);
    }
    result = CLOSING_DOUBLE
        .replace_all(&result, double_close.as_str())
        .into_owned();
    result.replace('"', OPEN_DOUBLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_sentence_with_apostrophe() {
        assert_eq!(
            smart_quotes("\"Isn't this fun?\""),
            "&#8220;Isn&#8217;t this fun?&#8221;"
        );
    }

    #[test]
    fn test_decade_abbreviation_is_closing() {
        assert_eq!(smart_quotes("the '80s"), "the &#8217;80s");
        assert_eq!(smart_quotes("'90s music"), "&#8217;90s music");
    }

    #[test]
    fn test_opening_single_after_space() {
        assert_eq!(
            smart_quotes("he said 'hello' twice"),
            "he said &#8216;hello&#8217; twice"
        );
    }

    #[test]
    fn test_nested_quotes() {
        assert_eq!(
            smart_quotes("He said, \"'Quoted' words\""),
            "He said, &#8220;&#8216;Quoted&#8217; words&#8221;"
        );
    }

    #[test]
    fn test_opening_after_dash_entity() {
        assert_eq!(smart_quotes("&#8212;\"yes\""), "&#8212;&#8220;yes&#8221;");
        assert_eq!(smart_quotes("&mdash;'no'"), "&mdash;&#8216;no&#8217;");
    }

    #[test]
    fn test_opening_after_nbsp() {
        assert_eq!(smart_quotes("a&nbsp;\"b\""), "a&nbsp;&#8220;b&#8221;");
    }

    #[test]
    fn test_leading_quote_before_punctuation_is_closed() {
        assert_eq!(smart_quotes("\"... said"), "&#8221;... said");
        assert_eq!(smart_quotes("', he"), "&#8217;, he");
    }

    #[test]
    fn test_lone_apostrophe_defaults_to_closing() {
        assert_eq!(smart_quotes("'s popularity"), "&#8217;s popularity");
    }

    #[test]
    fn test_possessive_plural() {
        assert_eq!(smart_quotes("the dogs' bones"), "the dogs&#8217; bones");
    }

    #[test]
    fn test_closing_double_before_space() {
        assert_eq!(smart_quotes("\"Green\" man"), "&#8220;Green&#8221; man");
    }

    #[test]
    fn test_quote_before_space_and_digit_closes_in_second_pass() {
        assert_eq!(
            smart_quotes("The number 5' 10\" is tall"),
            "The number 5&#8217; 10&#8221; is tall"
        );
    }

    #[test]
    fn test_single_then_double_pair() {
        assert_eq!(
            smart_quotes("'\"Hi\" x"),
            "&#8216;&#8220;Hi&#8221; x"
        );
    }

    #[test]
    fn test_opening_after_hex_dash_entity() {
        assert_eq!(smart_quotes("&#x2014;'no'"), "&#x2014;&#8216;no&#8217;");
        assert_eq!(smart_quotes("&#x2013;\"yes\""), "&#x2013;&#8220;yes&#8221;");
    }

    #[test]
    fn test_text_without_quotes_is_unchanged() {
        assert_eq!(smart_quotes("nothing to see"), "nothing to see");
        assert_eq!(smart_quotes(""), "");
    }
}
