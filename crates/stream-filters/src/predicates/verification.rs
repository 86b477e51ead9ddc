//! Author verification checks.

use crate::traits::Predicate;
use tweet_model::{Tweet, User};

fn is_verified(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.verified)
}

/// Passes records posted by a verified account.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyVerified;

impl Predicate for OnlyVerified {
    fn test(&self, tweet: &Tweet) -> bool {
        is_verified(tweet.user())
    }
}

/// Passes retweets whose original author is verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyRetweetsFromVerified;

impl Predicate for OnlyRetweetsFromVerified {
    fn test(&self, tweet: &Tweet) -> bool {
        tweet
            .retweeted()
            .is_some_and(|original| is_verified(original.user()))
    }
}
