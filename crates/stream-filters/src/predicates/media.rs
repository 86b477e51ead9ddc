//! Media-type predicates over `extended_entities.media`.

use crate::traits::Predicate;
use tweet_model::Tweet;

/// The media categories the library can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photos,
    Videos,
}

impl MediaKind {
    /// The wire `type` that signals this category.
    ///
    /// Videos are detected through `animated_gif` only; entries typed
    /// `"video"` are not matched.
    pub fn wire_type(&self) -> &'static str {
        match self {
            MediaKind::Photos => "photo",
            MediaKind::Videos => "animated_gif",
        }
    }
}

/// Passes records with at least one extended media entry of the given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasMediaType {
    pub kind: MediaKind,
}

impl HasMediaType {
    pub fn new(kind: MediaKind) -> Self {
        Self { kind }
    }
}

impl Predicate for HasMediaType {
    fn test(&self, tweet: &Tweet) -> bool {
        let wanted = self.kind.wire_type();
        tweet
            .extended_media()
            .is_some_and(|media| media.iter().any(|m| m.kind == wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweet_model::{ExtendedEntities, Media};

    fn with_media(kinds: &[&str]) -> Tweet {
        Tweet {
            extended_entities: Some(Some(ExtendedEntities {
                media: Some(Some(kinds.iter().map(|k| Media::new(*k)).collect())),
            })),
            ..Tweet::default()
        }
    }

    #[test]
    fn test_photos() {
        let photos = HasMediaType::new(MediaKind::Photos);
        assert!(photos.test(&with_media(&["animated_gif", "photo"])));
        assert!(!photos.test(&with_media(&["animated_gif"])));
        assert!(!photos.test(&with_media(&[])));
        assert!(!photos.test(&Tweet::default()));
    }

    #[test]
    fn test_videos_match_animated_gif_only() {
        let videos = HasMediaType::new(MediaKind::Videos);
        assert!(videos.test(&with_media(&["photo", "animated_gif"])));
        assert!(!videos.test(&with_media(&["video"])));
    }

    #[test]
    fn test_extended_entities_without_media() {
        let tweet = Tweet {
            extended_entities: Some(Some(ExtendedEntities::default())),
            ..Tweet::default()
        };
        assert!(!HasMediaType::new(MediaKind::Photos).test(&tweet));
    }
}
