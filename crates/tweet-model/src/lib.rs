//! # Tweet Model Crate
//!
//! Record types for messages delivered by a tweet streaming endpoint, and
//! the decoder that turns newline-delimited stream JSON into them.
//!
//! ## Main Components
//!
//! - **types**: `Tweet` and its nested entities, users and media
//! - **parser**: decode single messages or whole NDJSON streams
//! - **error**: error types for decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use tweet_model::decode_lines;
//! use std::io::stdin;
//!
//! for line in decode_lines(stdin().lock()) {
//!     let line = line?;
//!     println!("{}: {:?}", line.line_no, line.tweet.lang());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DecodeError, Result};
pub use parser::{decode_lines, decode_record, DecodedLine};
pub use types::{
    // Type aliases
    TweetId,
    UserId,
    // Core types
    Tweet,
    User,
    Entities,
    ExtendedEntities,
    Hashtag,
    Media,
    Geo,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tweet_is_empty() {
        let tweet = Tweet::default();
        assert!(tweet.retweeted_status.is_none());
        assert!(tweet.extended_media().is_none());
        assert!(tweet.hashtags().is_none());
    }

    #[test]
    fn test_control_messages_decode_as_tweets() {
        let limit = decode_record(r#"{"limit":{"track":1234}}"#).unwrap();
        assert!(limit.limit.is_some());
        assert!(limit.delete.is_none());

        let delete =
            decode_record(r#"{"delete":{"status":{"id":1,"user_id":2}}}"#).unwrap();
        assert!(delete.delete.is_some());
    }
}
