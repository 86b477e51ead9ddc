//! Core record types for stream messages.
//!
//! A streaming endpoint delivers a mix of tweets and control messages
//! (limit notices, deletion notices) over the same connection. All of
//! them decode into [`Tweet`]: every field is optional, and which fields
//! are present decides what kind of message it is.
//!
//! Some keys carry meaning even when their value is `null`. For those the
//! field type is `Option<Option<T>>` (or `Option<Value>`): the outer
//! `Option` records whether the key was present at all, the inner one
//! whether it held a value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// Type Aliases
// =============================================================================

/// Numeric identifier of a tweet
pub type TweetId = u64;

/// Numeric identifier of a user account
pub type UserId = u64;

// =============================================================================
// Tweet
// =============================================================================

/// One decoded stream message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TweetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Free-text client identifier, usually an HTML anchor such as
    /// `<a href="...">Twitter for iPhone</a>`
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub source: Option<Option<String>>,

    /// Detected language code, `"und"` when undetermined
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lang: Option<Option<String>>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub user: Option<Option<User>>,

    /// The original tweet when this message is a retweet
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub retweeted_status: Option<Option<Box<Tweet>>>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub in_reply_to_status_id: Option<Option<TweetId>>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub geo: Option<Option<Geo>>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub entities: Option<Option<Entities>>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub extended_entities: Option<Option<ExtendedEntities>>,

    /// Limit notice payload; present on rate-limit control messages
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,

    /// Deletion notice payload; present on status deletion control messages
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub delete: Option<Value>,
}

impl Tweet {
    pub fn source(&self) -> Option<&str> {
        value(&self.source).map(String::as_str)
    }

    pub fn lang(&self) -> Option<&str> {
        value(&self.lang).map(String::as_str)
    }

    pub fn user(&self) -> Option<&User> {
        value(&self.user)
    }

    /// The original tweet, when `retweeted_status` holds one
    pub fn retweeted(&self) -> Option<&Tweet> {
        value(&self.retweeted_status).map(|original| &**original)
    }

    pub fn entities(&self) -> Option<&Entities> {
        value(&self.entities)
    }

    pub fn extended_entities(&self) -> Option<&ExtendedEntities> {
        value(&self.extended_entities)
    }

    /// Media entries from `extended_entities.media`, if that path holds a list
    pub fn extended_media(&self) -> Option<&[Media]> {
        self.extended_entities().and_then(ExtendedEntities::media)
    }

    /// Hashtags from `entities.hashtags`, if that path holds a list
    pub fn hashtags(&self) -> Option<&[Hashtag]> {
        self.entities().and_then(Entities::hashtags)
    }
}

// =============================================================================
// Nested types
// =============================================================================

/// The author of a tweet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    /// `null` on the wire reads as `false`
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
}

/// Basic entities extracted from the tweet text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Option<Vec<Hashtag>>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub media: Option<Option<Vec<Media>>>,
}

impl Entities {
    pub fn hashtags(&self) -> Option<&[Hashtag]> {
        value(&self.hashtags).map(Vec::as_slice)
    }

    pub fn media(&self) -> Option<&[Media]> {
        value(&self.media).map(Vec::as_slice)
    }
}

/// Extended entities; the only place where every attached media item is listed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedEntities {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub media: Option<Option<Vec<Media>>>,
}

impl ExtendedEntities {
    pub fn media(&self) -> Option<&[Media]> {
        value(&self.media).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hashtag {
    pub text: String,
    pub indices: Vec<u32>,
}

/// One attached media item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Wire `type`: `"photo"`, `"animated_gif"`, `"video"`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url_https: Option<String>,
}

impl Media {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }
}

/// Point geolocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

/// Deserializes a field that was present in the input, keeping `null` as
/// `Some(<null value>)` instead of collapsing it into "missing".
///
/// Combined with `#[serde(default)]` a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The value behind a present-or-null key
fn value<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}
