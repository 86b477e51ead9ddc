//! Hashtag counting over `entities.hashtags`.

use crate::presence::{has, FieldPath};
use crate::traits::Predicate;
use serde_json::Value;
use tweet_model::Tweet;

/// Passes records that carry hashtags.
///
/// With `exactly: Some(n)` the record must carry exactly `n` hashtags;
/// with `None` at least one is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WithHashtags {
    exactly: Option<u64>,
}

impl WithHashtags {
    /// A count of zero means "no count constraint".
    pub fn new(exactly: impl Into<Option<u64>>) -> Self {
        Self {
            exactly: exactly.into().filter(|n| *n > 0),
        }
    }

    pub fn exactly(&self) -> Option<u64> {
        self.exactly
    }

    /// Build from a declaration argument.
    ///
    /// Numbers and numeric strings (leading digits, like an integer cast)
    /// give a count; anything that does not yield a positive integer
    /// means "at least one". Never fails.
    pub fn from_value(value: &Value) -> Self {
        let count = match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
            Value::String(s) => leading_integer(s),
            Value::Bool(true) => Some(1),
            _ => None,
        };
        Self::new(count)
    }
}

fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // saturate like an integer cast
    Some(s[..end].parse().unwrap_or(u64::MAX))
}

impl Predicate for WithHashtags {
    fn test(&self, tweet: &Tweet) -> bool {
        if !has(FieldPath::Entities, tweet) {
            return false;
        }
        let Some(hashtags) = tweet.hashtags() else {
            return false;
        };
        match self.exactly {
            Some(n) => hashtags.len() as u64 == n,
            None => !hashtags.is_empty(),
        }
    }
}

/// Passes records with no hashtags, including records lacking the fields entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WithoutHashtags;

impl Predicate for WithoutHashtags {
    fn test(&self, tweet: &Tweet) -> bool {
        tweet.hashtags().is_none_or(|hashtags| hashtags.is_empty())
    }
}
