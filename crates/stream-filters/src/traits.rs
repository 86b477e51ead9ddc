//! Core traits for the predicate engine.
//!
//! This module defines the Predicate trait that every filter condition
//! implements, plus the two generic adapters the library is built from:
//! [`Not`] for negated forms and [`FnPredicate`] for caller-supplied closures.

use std::fmt;
use tweet_model::Tweet;

/// A single pass/reject condition over a stream record.
///
/// ## Design Note
/// - `Send + Sync` lets one sealed registry be evaluated from many threads
/// - `Debug` keeps the captured arguments of every registered predicate inspectable
/// - `test` must be pure and total: absent fields resolve to a fixed answer
pub trait Predicate: fmt::Debug + Send + Sync {
    /// Returns `true` if the record passes this condition.
    fn test(&self, tweet: &Tweet) -> bool;
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn test(&self, tweet: &Tweet) -> bool {
        (**self).test(tweet)
    }
}

/// Logical negation of another predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    fn test(&self, tweet: &Tweet) -> bool {
        !self.0.test(tweet)
    }
}

/// A predicate backed by a plain closure.
///
/// Built with [`from_fn`]; useful for one-off conditions the library does not cover.
pub struct FnPredicate<F> {
    f: F,
}

/// Wrap a closure as a [`Predicate`].
///
/// ```ignore
/// registry.add("longText", from_fn(|t| t.text.as_deref().is_some_and(|s| s.len() > 100)))?;
/// ```
pub fn from_fn<F>(f: F) -> FnPredicate<F>
where
    F: Fn(&Tweet) -> bool + Send + Sync,
{
    FnPredicate { f }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&Tweet) -> bool + Send + Sync,
{
    fn test(&self, tweet: &Tweet) -> bool {
        (self.f)(tweet)
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPredicate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_inverts() {
        let has_text = from_fn(|t: &Tweet| t.text.is_some());
        let no_text = Not(from_fn(|t: &Tweet| t.text.is_some()));

        let tweet = Tweet {
            text: Some("hello".to_string()),
            ..Tweet::default()
        };

        assert!(has_text.test(&tweet));
        assert!(!no_text.test(&tweet));
        assert!(no_text.test(&Tweet::default()));
    }

    #[test]
    fn test_boxed_predicate_delegates() {
        let boxed: Box<dyn Predicate> = Box::new(from_fn(|t: &Tweet| t.id == Some(3)));
        let tweet = Tweet {
            id: Some(3),
            ..Tweet::default()
        };
        assert!(boxed.test(&tweet));
        assert_eq!(format!("{:?}", boxed), "FnPredicate");
    }
}
