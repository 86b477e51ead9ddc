//! Structural predicates: conditions decided by which fields a record carries.
//!
//! None of these take arguments. They classify retweets, replies, stream
//! control messages, media and geolocation purely from field presence.

use crate::presence::{has, FieldPath};
use crate::traits::Predicate;
use tweet_model::Tweet;

/// Passes records that are not retweets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutRetweets;

impl Predicate for WithoutRetweets {
    fn test(&self, tweet: &Tweet) -> bool {
        !has(FieldPath::RetweetedStatus, tweet)
    }
}

/// Passes records that are not replies.
///
/// A reply id key holding `null` is the normal shape of a non-reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutReplies;

impl Predicate for WithoutReplies {
    fn test(&self, tweet: &Tweet) -> bool {
        !matches!(tweet.in_reply_to_status_id, Some(Some(_)))
    }
}

/// Drops rate-limit control messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutLimitNotices;

impl Predicate for WithoutLimitNotices {
    fn test(&self, tweet: &Tweet) -> bool {
        !has(FieldPath::LimitNotice, tweet)
    }
}

/// Drops status deletion control messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutDeleteNotices;

impl Predicate for WithoutDeleteNotices {
    fn test(&self, tweet: &Tweet) -> bool {
        !has(FieldPath::DeleteNotice, tweet)
    }
}

/// Passes records with no `entities.media` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutMedia;

impl Predicate for WithoutMedia {
    fn test(&self, tweet: &Tweet) -> bool {
        !has(FieldPath::EntitiesMedia, tweet)
    }
}

/// Passes records whose `geo` key holds a location.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithGeo;

impl Predicate for WithGeo {
    fn test(&self, tweet: &Tweet) -> bool {
        matches!(tweet.geo, Some(Some(_)))
    }
}

/// Passes records whose `geo` key is present but `null`.
///
/// Not the negation of [`WithGeo`]: a record without the key fails both.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutGeo;

impl Predicate for WithoutGeo {
    fn test(&self, tweet: &Tweet) -> bool {
        matches!(tweet.geo, Some(None))
    }
}
