//! The PredicateRegistry holds the declared conditions and evaluates records.
//!
//! A registry has two phases. While it is open, predicates are appended in
//! declaration order. Once sealed it only evaluates; further additions fail
//! with [`FilterError::RegistrySealed`]. A sealed registry is read-only and
//! `Sync`, so one instance can be shared behind an `Arc` by any number of
//! consumer threads without locking.

use crate::error::{FilterError, Result};
use crate::traits::Predicate;
use rayon::prelude::*;
use std::fmt;
use tweet_model::Tweet;

/// One registered condition: a diagnostic name plus the predicate itself.
pub struct PredicateDescriptor {
    name: String,
    predicate: Box<dyn Predicate>,
}

impl PredicateDescriptor {
    pub fn new(name: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The declaration this predicate came from, e.g. `withoutRTs`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, tweet: &Tweet) -> bool {
        self.predicate.test(tweet)
    }
}

impl fmt::Debug for PredicateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateDescriptor")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .finish()
    }
}

/// Ordered, append-only collection of predicates combined with logical AND.
///
/// ## Usage
/// ```ignore
/// let mut registry = PredicateRegistry::new();
/// filters(&mut registry, |f| {
///     f.without_rts().without_replies().with_language("en");
/// })?;
///
/// let keep = registry.evaluate(&tweet);
/// ```
#[derive(Debug, Default)]
pub struct PredicateRegistry {
    predicates: Vec<PredicateDescriptor>,
    sealed: bool,
}

impl PredicateRegistry {
    /// Create a new, empty and open registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    ///
    /// Names need not be unique; registering the same condition twice just
    /// ANDs it twice.
    ///
    /// # Returns
    /// * `Err(FilterError::RegistrySealed)` - if the registry is already sealed
    pub fn add(&mut self, name: impl Into<String>, predicate: impl Predicate + 'static) -> Result<()> {
        let name = name.into();
        if self.sealed {
            tracing::warn!(predicate = %name, "Rejected registration on sealed registry");
            return Err(FilterError::RegistrySealed { name });
        }
        self.push(PredicateDescriptor::new(name, predicate));
        Ok(())
    }

    /// Append without the seal check; callers guarantee the registry is open.
    pub(crate) fn push(&mut self, descriptor: PredicateDescriptor) {
        debug_assert!(!self.sealed, "push on a sealed registry");
        tracing::debug!(
            "Registered predicate: {} (position: {})",
            descriptor.name(),
            self.predicates.len()
        );
        self.predicates.push(descriptor);
    }

    /// Drop everything registered after the first `len` predicates.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(!self.sealed, "truncate on a sealed registry");
        if len < self.predicates.len() {
            tracing::debug!(
                "Discarding {} predicates from a failed session",
                self.predicates.len() - len
            );
            self.predicates.truncate(len);
        }
    }

    /// End the configuration phase. Idempotent.
    pub fn seal(&mut self) {
        if !self.sealed {
            tracing::debug!("Sealing predicate registry ({} predicates)", self.predicates.len());
            self.sealed = true;
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Predicate names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.iter().map(PredicateDescriptor::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredicateDescriptor> {
        self.predicates.iter()
    }

    /// Does `tweet` pass every registered predicate?
    ///
    /// Predicates run in registration order and evaluation stops at the
    /// first failure. An empty registry passes everything.
    pub fn evaluate(&self, tweet: &Tweet) -> bool {
        self.rejected_by(tweet).is_none()
    }

    /// Name of the first predicate `tweet` fails, if any.
    pub fn rejected_by(&self, tweet: &Tweet) -> Option<&str> {
        let rejecting = self
            .predicates
            .iter()
            .find(|descriptor| !descriptor.test(tweet))
            .map(PredicateDescriptor::name);
        if let Some(name) = rejecting {
            tracing::trace!(tweet_id = ?tweet.id, predicate = name, "Record rejected");
        }
        rejecting
    }

    /// Evaluate many records in parallel, one verdict per record, in order.
    pub fn evaluate_batch(&self, tweets: &[Tweet]) -> Vec<bool> {
        tweets.par_iter().map(|tweet| self.evaluate(tweet)).collect()
    }

    /// Keep only the records that pass.
    ///
    /// # Arguments
    /// * `tweets` - The records to filter (takes ownership)
    pub fn retain(&self, tweets: Vec<Tweet>) -> Vec<Tweet> {
        let input = tweets.len();
        let kept: Vec<Tweet> = tweets
            .into_iter()
            .filter(|tweet| self.evaluate(tweet))
            .collect();
        tracing::debug!(
            "Registry applied (input count: {}, output count: {})",
            input,
            kept.len()
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{WithoutReplies, WithoutRetweets};
    use crate::traits::from_fn;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn retweet() -> Tweet {
        Tweet {
            retweeted_status: Some(Some(Box::new(Tweet::default()))),
            ..Tweet::default()
        }
    }

    #[test]
    fn test_empty_registry_passes_everything() {
        let registry = PredicateRegistry::new();
        assert!(registry.evaluate(&Tweet::default()));
        assert!(registry.evaluate(&retweet()));
    }

    #[test]
    fn test_single_predicate() {
        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();

        assert!(registry.evaluate(&Tweet::default()));
        assert!(!registry.evaluate(&retweet()));
        assert_eq!(registry.rejected_by(&retweet()), Some("withoutRTs"));
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();
        registry
            .add(
                "counting",
                from_fn(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                }),
            )
            .unwrap();

        assert!(!registry.evaluate(&retweet()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(registry.evaluate(&Tweet::default()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicates_allowed_and_order_kept() {
        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();
        registry.add("withoutReplies", WithoutReplies).unwrap();
        registry.add("withoutRTs", WithoutRetweets).unwrap();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["withoutRTs", "withoutReplies", "withoutRTs"]
        );
        assert!(registry.evaluate(&Tweet::default()));
    }

    #[test]
    fn test_add_after_seal_fails_and_keeps_results() {
        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();
        registry.seal();

        let before = registry.evaluate(&Tweet::default());
        let err = registry
            .add("rejectAll", from_fn(|_| false))
            .unwrap_err();

        assert!(matches!(err, FilterError::RegistrySealed { ref name } if name == "rejectAll"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.evaluate(&Tweet::default()), before);
    }

    #[test]
    fn test_batch_and_retain() {
        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();
        registry.seal();

        let tweets = vec![Tweet::default(), retweet(), Tweet::default()];
        assert_eq!(registry.evaluate_batch(&tweets), vec![true, false, true]);
        assert_eq!(registry.retain(tweets).len(), 2);
    }

    #[test]
    fn test_sealed_registry_shared_across_threads() {
        let mut registry = PredicateRegistry::new();
        registry.add("withoutRTs", WithoutRetweets).unwrap();
        registry.seal();
        let registry = Arc::new(registry);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    assert!(registry.evaluate(&Tweet::default()));
                    assert!(!registry.evaluate(&retweet()));
                });
            }
        });
    }
}
