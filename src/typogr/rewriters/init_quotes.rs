//! Initial quote wrapping

use once_cell::sync::Lazy;
use regex::Regex;

/// A quote opening the text or a block element, optionally behind whitespace
/// and a chain of opening inline elements.
///
/// Group 1 is a double quote, group 2 a single quote. Either way the quote is
/// the last thing matched.
static INITIAL_QUOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(?:(?:<(?:p|h[1-6]|li|dt|dd)[^>]*>|^)",
        r"\s*",
        r"(?:<(?:a|em|span|strong|i|b)[^>]*>\s*)*)",
        r#"(?:("|&ldquo;|&#8220;)|('|&lsquo;|&#8216;))"#,
    ))
    .expect("valid initial quote pattern")
});

/// Wrap the first initial quote in `<span class="dquo">` for double quotes or
/// `<span class="quo">` for single quotes.
///
/// Only the first match in the text is wrapped.
pub fn init_quotes(text: &str) -> String {
    let Some(captures) = INITIAL_QUOTE.captures(text) else {
        return text.to_string();
    };
    let (quote, class) = match (captures.get(1), captures.get(2)) {
        (Some(quote), _) => (quote, "dquo"),
        (None, Some(quote)) => (quote, "quo"),
        (None, None) => return text.to_string(),
    };

    format!(
        r#"{}<span class="{}">{}</span>{}"#,
        &text[..quote.start()],
        class,
        quote.as_str(),
        &text[quote.end()..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_prime() {
        assert_eq!(
            init_quotes("\"With primes\""),
            "<span class=\"dquo\">\"</span>With primes\""
        );
    }

    #[test]
    fn test_single_prime() {
        assert_eq!(
            init_quotes("'With single primes'"),
            "<span class=\"quo\">'</span>With single primes'"
        );
    }

    #[test]
    fn test_inside_link() {
        assert_eq!(
            init_quotes("<a href=\"#\">\"With primes and a link\"</a>"),
            "<a href=\"#\"><span class=\"dquo\">\"</span>With primes and a link\"</a>"
        );
    }

    #[test]
    fn test_entity_quotes() {
        assert_eq!(
            init_quotes("&#8220;With smartypanted quotes&#8221;"),
            "<span class=\"dquo\">&#8220;</span>With smartypanted quotes&#8221;"
        );
        assert_eq!(
            init_quotes("<h1> <strong>&lsquo;With</strong> single primes ...</h1>"),
            "<h1> <strong><span class=\"quo\">&lsquo;</span>With</strong> single primes ...</h1>"
        );
    }

    #[test]
    fn test_heading_with_leading_space() {
        assert_eq!(
            init_quotes("<h2> &#8220;Jayhawks&#8221; & KU fans ... </h2>"),
            "<h2> <span class=\"dquo\">&#8220;</span>Jayhawks&#8221; & KU fans ... </h2>"
        );
    }

    #[test]
    fn test_only_first_match_is_wrapped() {
        assert_eq!(
            init_quotes("<p>\"a\"</p><p>\"b\"</p>"),
            "<p><span class=\"dquo\">\"</span>a\"</p><p>\"b\"</p>"
        );
    }

    #[test]
    fn test_quote_mid_sentence_is_unchanged() {
        assert_eq!(init_quotes("<p>say \"hi\"</p>"), "<p>say \"hi\"</p>");
    }

    #[test]
    fn test_upper_case_block_tag() {
        assert_eq!(
            init_quotes("<LI>'x"),
            "<LI><span class=\"quo\">'</span>x"
        );
    }
}
