//! Declarative predicate engine for tweet streams.
//!
//! This crate provides:
//! - Predicate trait and a library of built-in tweet conditions
//! - PredicateRegistry, an append-only AND of predicates with a seal step
//! - FilterSession, the fluent declaration API, and the `filters` entry point
//! - FilterConfig, the same declarations expressed as JSON data
//!
//! ## Architecture
//! Records flow through three stages:
//! 1. A configuration block (or a config file) declares conditions on a session
//! 2. The session appends one predicate per declaration to a registry, then seals it
//! 3. The consumer loop calls `registry.evaluate(&tweet)` for each record
//!
//! ## Example Usage
//! ```ignore
//! use stream_filters::{filters, PredicateRegistry};
//!
//! let mut registry = PredicateRegistry::new();
//! filters(&mut registry, |f| {
//!     f.without_rts()
//!         .without_replies()
//!         .with_language(["en", "es"])
//!         .with_hashtags(None);
//! })?;
//!
//! for tweet in stream {
//!     if registry.evaluate(&tweet) {
//!         forward(tweet);
//!     }
//! }
//! ```

pub mod error;
pub mod traits;
pub mod keywords;
pub mod presence;
pub mod predicates;
pub mod registry;
pub mod session;
pub mod config;

// Re-export main types
pub use error::{FilterError, Result};
pub use traits::{from_fn, FnPredicate, Not, Predicate};
pub use keywords::Keywords;
pub use presence::{has, FieldPath};
pub use registry::{PredicateDescriptor, PredicateRegistry};
pub use session::{filters, try_filters, FilterSession};
pub use config::{Declaration, FilterConfig};

/// Every declaration name understood by [`FilterSession::declare`], canonical
/// spellings first, aliases last.
pub const DECLARATIONS: &[&str] = &[
    "withoutRTs",
    "withoutReplies",
    "withoutLimitNotices",
    "withoutDeleteNotices",
    "withoutMedia",
    "withoutMediaPhotos",
    "withMediaPhotos",
    "withoutMediaVideos",
    "withMediaVideos",
    "onlyFromIphone",
    "excludeIphone",
    "onlyFromAndroid",
    "excludeAndroid",
    "onlyFromWindowsPhone",
    "excludeWindowsPhone",
    "onlyFromBlackBerry",
    "excludeBlackBerry",
    "onlyFromSource",
    "excludeFromSource",
    "withGeo",
    "withoutGeo",
    "withLanguage",
    "withoutLanguage",
    "withHashtags",
    "withoutHashtags",
    "onlyVerified",
    "onlyRTsFromVerified",
    "withoutPhotos",
    "withPhotos",
    "withoutVideos",
    "withVideos",
    "onlyIphone",
    "onlyAndroid",
    "onlyWindowsPhone",
    "onlyBlackBerry",
];
