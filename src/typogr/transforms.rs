//! Transform pipeline infrastructure
//!
//! Every typographic rule is a pure `String -> String` function. This module
//! makes them composable: a [`Runnable`] is anything that can turn an `I` into
//! an `O`, and a [`Transform`] wraps a chain of runnables behind one boxed
//! closure that can be extended with [`Transform::then`].
//!
//! ```rust,ignore
//! let educate = Transform::from_fn(|s: String| s)
//!     .then(Rule::SmartDashes)
//!     .then(Rule::SmartQuotes);
//!
//! assert_eq!(educate.run("a -- \"b\"".into()), "a &#8211; &#8220;b&#8221;");
//! ```
//!
//! # Module Organization
//!
//! - [`stages`]: the [`Rule`] catalogue, one stage per typographic rule
//! - [`standard`]: pre-built transforms such as [`standard::TYPOGRIFY`]

pub mod stages;
pub mod standard;

pub use stages::{Rule, UnknownRule};
pub use standard::TYPOGRIFY;

/// Anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> O;
}

/// A composable transformation from `I` to `O`.
///
/// The compiler checks that each stage added with [`then`](Transform::then)
/// takes the output type of the chain so far.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Identity transform, converting the input with `From` when `I != O`
    pub fn identity() -> Self
    where
        I: 'static,
        O: From<I> + 'static,
    {
        Transform {
            run_fn: Box::new(O::from),
        }
    }

    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage, returning a transform with the stage's output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| stage.run(prev_run(input))),
        }
    }

    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}

/// Compose `rules` into one transform that applies them in order.
///
/// An empty list gives the identity transform.
pub fn pipe<R>(rules: R) -> Transform<String, String>
where
    R: IntoIterator<Item = Rule>,
{
    rules
        .into_iter()
        .fold(Transform::identity(), |transform, rule| transform.then(rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> i32 {
            input * 2
        }
    }

    struct AddTen;
    impl Runnable<i32, i32> for AddTen {
        fn run(&self, input: i32) -> i32 {
            input + 10
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn run(&self, input: i32) -> String {
            input.to_string()
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|x: i32| x * 2);
        assert_eq!(transform.run(5), 10);
    }

    #[test]
    fn test_stages_run_in_order() {
        let transform = Transform::from_fn(|x: i32| x)
            .then(DoubleNumber)
            .then(AddTen)
            .then(DoubleNumber);

        assert_eq!(transform.run(5), 40);
    }

    #[test]
    fn test_type_changing_stage() {
        let transform = Transform::from_fn(|x: i32| x)
            .then(DoubleNumber)
            .then(IntToString);

        assert_eq!(transform.run(5), "10");
    }

    #[test]
    fn test_pipe_applies_rules_in_order() {
        let transform = pipe([Rule::SmartDashes, Rule::SmartQuotes]);
        assert_eq!(
            transform.run("a -- \"b\"".to_string()),
            "a &#8211; &#8220;b&#8221;"
        );
    }

    #[test]
    fn test_pipe_order_matters() {
        let backticks_first =
            pipe([Rule::SmartBackticks, Rule::SmartQuotes]).run("``a''".to_string());
        assert_eq!(backticks_first, "&#8220;a&#8221;");

        let quotes_first =
            pipe([Rule::SmartQuotes, Rule::SmartBackticks]).run("``a''".to_string());
        assert_eq!(quotes_first, "&#8220;a&#8217;&#8217;");
    }

    #[test]
    fn test_empty_pipe_is_identity() {
        let transform = pipe(Vec::new());
        assert_eq!(transform.run("<p>x</p>".to_string()), "<p>x</p>");
    }

}
