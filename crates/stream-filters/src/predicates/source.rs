//! Device and client matching on the `source` field.
//!
//! `source` is free text (usually an HTML anchor naming the client), so
//! matching is a case-insensitive substring search. A list of keywords
//! matches if any of them occurs.

use crate::keywords::Keywords;
use crate::traits::Predicate;
use tweet_model::Tweet;

/// Well-known posting devices with a fixed source keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Iphone,
    Android,
    WindowsPhone,
    BlackBerry,
}

impl Device {
    pub fn keyword(&self) -> &'static str {
        match self {
            Device::Iphone => "iphone",
            Device::Android => "android",
            Device::WindowsPhone => "windows",
            Device::BlackBerry => "blackberry",
        }
    }
}

/// Passes records whose `source` contains any of the keywords.
///
/// ## Algorithm
/// 1. Missing or empty `source` fails
/// 2. Lower-case the source
/// 3. Pass on the first keyword found as a substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatch {
    keywords: Keywords,
}

impl SourceMatch {
    pub fn new(keywords: impl Into<Keywords>) -> Self {
        Self {
            keywords: keywords.into(),
        }
    }

    pub fn device(device: Device) -> Self {
        Self::new(device.keyword())
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }
}

impl Predicate for SourceMatch {
    fn test(&self, tweet: &Tweet) -> bool {
        match tweet.source() {
            Some(source) if !source.is_empty() => self.keywords.any_contained_in(source),
            _ => false,
        }
    }
}
