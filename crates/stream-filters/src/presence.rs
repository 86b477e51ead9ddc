//! Field presence checks on stream records.
//!
//! Every predicate starts by asking whether some optional path exists on
//! the record. [`has`] answers that for the paths the library cares about,
//! independent of the value stored there: a key that is present with a
//! `null` value still counts as present. Predicates that care about the
//! difference (geo, reply id) inspect the value themselves.

use crate::error::{FilterError, Result};
use std::fmt;
use std::str::FromStr;
use tweet_model::Tweet;

/// An optional path on a [`Tweet`], spelled the way it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    RetweetedStatus,
    RetweetedStatusUser,
    InReplyToStatusId,
    LimitNotice,
    DeleteNotice,
    Entities,
    EntitiesHashtags,
    EntitiesMedia,
    ExtendedEntities,
    ExtendedEntitiesMedia,
    Source,
    Lang,
    Geo,
    User,
}

impl FieldPath {
    pub const ALL: [FieldPath; 14] = [
        FieldPath::RetweetedStatus,
        FieldPath::RetweetedStatusUser,
        FieldPath::InReplyToStatusId,
        FieldPath::LimitNotice,
        FieldPath::DeleteNotice,
        FieldPath::Entities,
        FieldPath::EntitiesHashtags,
        FieldPath::EntitiesMedia,
        FieldPath::ExtendedEntities,
        FieldPath::ExtendedEntitiesMedia,
        FieldPath::Source,
        FieldPath::Lang,
        FieldPath::Geo,
        FieldPath::User,
    ];

    /// Dotted wire path, e.g. `extended_entities.media`
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::RetweetedStatus => "retweeted_status",
            FieldPath::RetweetedStatusUser => "retweeted_status.user",
            FieldPath::InReplyToStatusId => "in_reply_to_status_id",
            FieldPath::LimitNotice => "limit",
            FieldPath::DeleteNotice => "delete",
            FieldPath::Entities => "entities",
            FieldPath::EntitiesHashtags => "entities.hashtags",
            FieldPath::EntitiesMedia => "entities.media",
            FieldPath::ExtendedEntities => "extended_entities",
            FieldPath::ExtendedEntitiesMedia => "extended_entities.media",
            FieldPath::Source => "source",
            FieldPath::Lang => "lang",
            FieldPath::Geo => "geo",
            FieldPath::User => "user",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        FieldPath::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| FilterError::InvalidArgument {
                declaration: "field path".to_string(),
                reason: format!("unknown field path '{}'", s),
            })
    }
}

/// Does `path` exist on `tweet`?
///
/// A key holding `null` exists. Nested paths need every parent to hold
/// an object.
pub fn has(path: FieldPath, tweet: &Tweet) -> bool {
    match path {
        FieldPath::RetweetedStatus => tweet.retweeted_status.is_some(),
        FieldPath::RetweetedStatusUser => tweet.retweeted().is_some_and(|rt| rt.user.is_some()),
        FieldPath::InReplyToStatusId => tweet.in_reply_to_status_id.is_some(),
        FieldPath::LimitNotice => tweet.limit.is_some(),
        FieldPath::DeleteNotice => tweet.delete.is_some(),
        FieldPath::Entities => tweet.entities.is_some(),
        FieldPath::EntitiesHashtags => tweet.entities().is_some_and(|e| e.hashtags.is_some()),
        FieldPath::EntitiesMedia => tweet.entities().is_some_and(|e| e.media.is_some()),
        FieldPath::ExtendedEntities => tweet.extended_entities.is_some(),
        FieldPath::ExtendedEntitiesMedia => tweet
            .extended_entities()
            .is_some_and(|e| e.media.is_some()),
        FieldPath::Source => tweet.source.is_some(),
        FieldPath::Lang => tweet.lang.is_some(),
        FieldPath::Geo => tweet.geo.is_some(),
        FieldPath::User => tweet.user.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tweet(value: serde_json::Value) -> Tweet {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_record_has_nothing() {
        let empty = Tweet::default();
        for path in FieldPath::ALL {
            assert!(!has(path, &empty), "{} should be absent", path);
        }
    }

    #[test]
    fn test_null_values_count_as_present() {
        let t = tweet(json!({ "geo": null, "in_reply_to_status_id": null, "delete": null }));
        assert!(has(FieldPath::Geo, &t));
        assert!(has(FieldPath::InReplyToStatusId, &t));
        assert!(has(FieldPath::DeleteNotice, &t));
        assert!(!has(FieldPath::LimitNotice, &t));
    }

    #[test]
    fn test_every_null_valued_path_is_present() {
        let t = tweet(json!({
            "retweeted_status": null,
            "in_reply_to_status_id": null,
            "limit": null,
            "delete": null,
            "entities": null,
            "extended_entities": null,
            "source": null,
            "lang": null,
            "geo": null,
            "user": null
        }));
        for path in FieldPath::ALL {
            let nested = path.as_str().contains('.');
            assert_eq!(has(path, &t), !nested, "{}", path);
        }

        let nested = tweet(json!({
            "retweeted_status": { "user": null },
            "entities": { "hashtags": null, "media": null },
            "extended_entities": { "media": null }
        }));
        assert!(has(FieldPath::RetweetedStatusUser, &nested));
        assert!(has(FieldPath::EntitiesHashtags, &nested));
        assert!(has(FieldPath::EntitiesMedia, &nested));
        assert!(has(FieldPath::ExtendedEntitiesMedia, &nested));
    }

    #[test]
    fn test_nested_paths_need_parents() {
        let t = tweet(json!({ "entities": { "hashtags": [] } }));
        assert!(has(FieldPath::Entities, &t));
        assert!(has(FieldPath::EntitiesHashtags, &t));
        assert!(!has(FieldPath::EntitiesMedia, &t));
        assert!(!has(FieldPath::ExtendedEntitiesMedia, &t));
    }

    #[test]
    fn test_parse_round_trips_wire_names() {
        for path in FieldPath::ALL {
            assert_eq!(path.as_str().parse::<FieldPath>().unwrap(), path);
        }
        assert!("entities.urls".parse::<FieldPath>().is_err());
    }
}
