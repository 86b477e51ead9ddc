//! The built-in predicate library.
//!
//! Each module groups conditions over one part of the record. Negated
//! forms (`withoutMediaPhotos`, `excludeIphone`, ...) are not separate
//! types; the session wraps these in [`Not`](crate::traits::Not).

pub mod hashtags;
pub mod language;
pub mod media;
pub mod source;
pub mod structural;
pub mod verification;

// Re-export for convenience
pub use hashtags::{WithHashtags, WithoutHashtags};
pub use language::{LanguageMatch, UNDEFINED_LANGUAGE};
pub use media::{HasMediaType, MediaKind};
pub use source::{Device, SourceMatch};
pub use structural::{
    WithGeo, WithoutDeleteNotices, WithoutGeo, WithoutLimitNotices, WithoutMedia, WithoutReplies,
    WithoutRetweets,
};
pub use verification::{OnlyRetweetsFromVerified, OnlyVerified};
