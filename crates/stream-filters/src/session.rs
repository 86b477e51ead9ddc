//! FilterSession: the fluent declaration API.
//!
//! Each declaration method builds the matching predicate from the library
//! and appends it to the registry the session was opened on, then returns
//! the session for chaining. Sessions are only handed out by [`filters`],
//! which guarantees the registry is open while the block runs and seals it
//! afterwards.

use crate::config::Declaration;
use crate::error::{FilterError, Result};
use crate::keywords::Keywords;
use crate::predicates::*;
use crate::registry::{PredicateDescriptor, PredicateRegistry};
use crate::traits::{Not, Predicate};

/// Run a configuration block against `registry`, then seal it.
///
/// ```ignore
/// let mut registry = PredicateRegistry::new();
/// filters(&mut registry, |f| {
///     f.without_rts()
///         .without_replies()
///         .with_language(["en", "es"])
///         .only_from_iphone();
/// })?;
/// assert!(registry.is_sealed());
/// ```
///
/// # Returns
/// * `Err(FilterError::RegistrySealed)` - if `registry` was already sealed;
///   the block is not run
pub fn filters<F>(registry: &mut PredicateRegistry, configure: F) -> Result<()>
where
    F: FnOnce(&mut FilterSession<'_>),
{
    try_filters(registry, |session| {
        configure(session);
        Ok(())
    })
}

/// Like [`filters`], for blocks that can fail (e.g. applying declarations).
///
/// On error every predicate the block registered is removed again and the
/// registry is left open, exactly as it was before the call.
pub fn try_filters<F>(registry: &mut PredicateRegistry, configure: F) -> Result<()>
where
    F: FnOnce(&mut FilterSession<'_>) -> Result<()>,
{
    if registry.is_sealed() {
        tracing::warn!("Filter session opened on a sealed registry");
        return Err(FilterError::RegistrySealed {
            name: "filters".to_string(),
        });
    }

    let checkpoint = registry.len();
    let mut session = FilterSession { registry };
    if let Err(e) = configure(&mut session) {
        session.registry.truncate(checkpoint);
        return Err(e);
    }

    session.registry.seal();
    Ok(())
}

/// Builder handed to a configuration block.
pub struct FilterSession<'r> {
    registry: &'r mut PredicateRegistry,
}

impl<'r> FilterSession<'r> {
    fn register(&mut self, name: &str, predicate: impl Predicate + 'static) -> &mut Self {
        self.registry.push(PredicateDescriptor::new(name, predicate));
        self
    }

    /// Register a caller-supplied predicate.
    pub fn with_predicate(
        &mut self,
        name: impl Into<String>,
        predicate: impl Predicate + 'static,
    ) -> &mut Self {
        self.registry.push(PredicateDescriptor::new(name, predicate));
        self
    }

    /// Number of predicates registered so far
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // -------------------------------------------------------------------------
    // Structural
    // -------------------------------------------------------------------------

    pub fn without_rts(&mut self) -> &mut Self {
        self.register("withoutRTs", WithoutRetweets)
    }

    pub fn without_replies(&mut self) -> &mut Self {
        self.register("withoutReplies", WithoutReplies)
    }

    pub fn without_limit_notices(&mut self) -> &mut Self {
        self.register("withoutLimitNotices", WithoutLimitNotices)
    }

    pub fn without_delete_notices(&mut self) -> &mut Self {
        self.register("withoutDeleteNotices", WithoutDeleteNotices)
    }

    /// Drop records carrying basic media (photos or videos).
    pub fn without_media(&mut self) -> &mut Self {
        self.register("withoutMedia", WithoutMedia)
    }

    pub fn with_geo(&mut self) -> &mut Self {
        self.register("withGeo", WithGeo)
    }

    /// Keep records whose `geo` is explicitly null.
    pub fn without_geo(&mut self) -> &mut Self {
        self.register("withoutGeo", WithoutGeo)
    }

    // -------------------------------------------------------------------------
    // Media
    // -------------------------------------------------------------------------

    pub fn with_media_photos(&mut self) -> &mut Self {
        self.register("withMediaPhotos", HasMediaType::new(MediaKind::Photos))
    }

    pub fn with_photos(&mut self) -> &mut Self {
        self.with_media_photos()
    }

    pub fn without_media_photos(&mut self) -> &mut Self {
        self.register("withoutMediaPhotos", Not(HasMediaType::new(MediaKind::Photos)))
    }

    pub fn without_photos(&mut self) -> &mut Self {
        self.without_media_photos()
    }

    /// Keep records with an `animated_gif` media entry.
    pub fn with_media_videos(&mut self) -> &mut Self {
        self.register("withMediaVideos", HasMediaType::new(MediaKind::Videos))
    }

    pub fn with_videos(&mut self) -> &mut Self {
        self.with_media_videos()
    }

    pub fn without_media_videos(&mut self) -> &mut Self {
        self.register("withoutMediaVideos", Not(HasMediaType::new(MediaKind::Videos)))
    }

    pub fn without_videos(&mut self) -> &mut Self {
        self.without_media_videos()
    }

    // -------------------------------------------------------------------------
    // Source / device
    // -------------------------------------------------------------------------

    fn only_device(&mut self, name: &str, device: Device) -> &mut Self {
        self.register(name, SourceMatch::device(device))
    }

    fn exclude_device(&mut self, name: &str, device: Device) -> &mut Self {
        self.register(name, Not(SourceMatch::device(device)))
    }

    pub fn only_from_iphone(&mut self) -> &mut Self {
        self.only_device("onlyFromIphone", Device::Iphone)
    }

    pub fn only_iphone(&mut self) -> &mut Self {
        self.only_from_iphone()
    }

    pub fn exclude_iphone(&mut self) -> &mut Self {
        self.exclude_device("excludeIphone", Device::Iphone)
    }

    pub fn only_from_android(&mut self) -> &mut Self {
        self.only_device("onlyFromAndroid", Device::Android)
    }

    pub fn only_android(&mut self) -> &mut Self {
        self.only_from_android()
    }

    pub fn exclude_android(&mut self) -> &mut Self {
        self.exclude_device("excludeAndroid", Device::Android)
    }

    pub fn only_from_windows_phone(&mut self) -> &mut Self {
        self.only_device("onlyFromWindowsPhone", Device::WindowsPhone)
    }

    pub fn only_windows_phone(&mut self) -> &mut Self {
        self.only_from_windows_phone()
    }

    pub fn exclude_windows_phone(&mut self) -> &mut Self {
        self.exclude_device("excludeWindowsPhone", Device::WindowsPhone)
    }

    pub fn only_from_blackberry(&mut self) -> &mut Self {
        self.only_device("onlyFromBlackBerry", Device::BlackBerry)
    }

    pub fn only_blackberry(&mut self) -> &mut Self {
        self.only_from_blackberry()
    }

    pub fn exclude_blackberry(&mut self) -> &mut Self {
        self.exclude_device("excludeBlackBerry", Device::BlackBerry)
    }

    /// Keep records whose source contains any of `keywords`.
    pub fn only_from_source(&mut self, keywords: impl Into<Keywords>) -> &mut Self {
        self.register("onlyFromSource", SourceMatch::new(keywords))
    }

    /// Drop records whose source contains any of `keywords`.
    pub fn exclude_from_source(&mut self, keywords: impl Into<Keywords>) -> &mut Self {
        self.register("excludeFromSource", Not(SourceMatch::new(keywords)))
    }

    // -------------------------------------------------------------------------
    // Language
    // -------------------------------------------------------------------------

    /// Keep records in any of `languages`; an empty set keeps any defined language.
    pub fn with_language(&mut self, languages: impl Into<Keywords>) -> &mut Self {
        self.register("withLanguage", LanguageMatch::new(languages))
    }

    pub fn with_any_language(&mut self) -> &mut Self {
        self.with_language(Keywords::any())
    }

    pub fn without_language(&mut self, languages: impl Into<Keywords>) -> &mut Self {
        self.register("withoutLanguage", Not(LanguageMatch::new(languages)))
    }

    /// Keep only records with no detected language.
    pub fn without_any_language(&mut self) -> &mut Self {
        self.without_language(Keywords::any())
    }

    // -------------------------------------------------------------------------
    // Hashtags
    // -------------------------------------------------------------------------

    /// `with_hashtags(2)` wants exactly two, `with_hashtags(None)` at least one.
    pub fn with_hashtags(&mut self, exactly: impl Into<Option<u64>>) -> &mut Self {
        self.register("withHashtags", WithHashtags::new(exactly))
    }

    pub fn without_hashtags(&mut self) -> &mut Self {
        self.register("withoutHashtags", WithoutHashtags)
    }

    // -------------------------------------------------------------------------
    // Verification
    // -------------------------------------------------------------------------

    pub fn only_verified(&mut self) -> &mut Self {
        self.register("onlyVerified", OnlyVerified)
    }

    pub fn only_rts_from_verified(&mut self) -> &mut Self {
        self.register("onlyRTsFromVerified", OnlyRetweetsFromVerified)
    }

    // -------------------------------------------------------------------------
    // Declarative form
    // -------------------------------------------------------------------------

    /// Apply one `{name, args}` declaration.
    ///
    /// Names are matched in their camelCase form (`withoutRTs`) or
    /// snake_case (`without_rts`).
    pub fn declare(&mut self, declaration: &Declaration) -> Result<&mut Self> {
        let name = declaration.canonical_name();
        let args = &declaration.args;
        let keywords = |name: &str| Keywords::from_value(name, args);

        let session = match name.as_str() {
            "withoutrts" => self.without_rts(),
            "withoutreplies" => self.without_replies(),
            "withoutlimitnotices" => self.without_limit_notices(),
            "withoutdeletenotices" => self.without_delete_notices(),
            "withoutmedia" => self.without_media(),
            "withoutmediaphotos" | "withoutphotos" => self.without_media_photos(),
            "withmediaphotos" | "withphotos" => self.with_media_photos(),
            "withoutmediavideos" | "withoutvideos" => self.without_media_videos(),
            "withmediavideos" | "withvideos" => self.with_media_videos(),
            "onlyfromiphone" | "onlyiphone" => self.only_from_iphone(),
            "excludeiphone" => self.exclude_iphone(),
            "onlyfromandroid" | "onlyandroid" => self.only_from_android(),
            "excludeandroid" => self.exclude_android(),
            "onlyfromwindowsphone" | "onlywindowsphone" => self.only_from_windows_phone(),
            "excludewindowsphone" => self.exclude_windows_phone(),
            "onlyfromblackberry" | "onlyblackberry" => self.only_from_blackberry(),
            "excludeblackberry" => self.exclude_blackberry(),
            "onlyfromsource" => self.only_from_source(keywords("onlyFromSource")?),
            "excludefromsource" => self.exclude_from_source(keywords("excludeFromSource")?),
            "withgeo" => self.with_geo(),
            "withoutgeo" => self.without_geo(),
            "withlanguage" => self.with_language(keywords("withLanguage")?),
            "withoutlanguage" => self.without_language(keywords("withoutLanguage")?),
            "withhashtags" => self.register("withHashtags", WithHashtags::from_value(args)),
            "withouthashtags" => self.without_hashtags(),
            "onlyverified" => self.only_verified(),
            "onlyrtsfromverified" => self.only_rts_from_verified(),
            _ => {
                return Err(FilterError::UnknownDeclaration {
                    name: declaration.name.clone(),
                });
            }
        };
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tweet_model::Tweet;

    fn tweet(value: serde_json::Value) -> Tweet {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_filters_seals_registry() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.without_rts().without_replies();
        })
        .unwrap();

        assert!(registry.is_sealed());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["withoutRTs", "withoutReplies"]);
    }

    #[test]
    fn test_second_session_on_sealed_registry_fails() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.without_rts();
        })
        .unwrap();

        let mut ran = false;
        let err = filters(&mut registry, |f| {
            ran = true;
            f.only_verified();
        })
        .unwrap_err();

        assert!(matches!(err, FilterError::RegistrySealed { .. }));
        assert!(!ran);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_aliases_register_canonical_names() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.with_photos()
                .without_videos()
                .only_iphone()
                .only_blackberry();
        })
        .unwrap();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["withMediaPhotos", "withoutMediaVideos", "onlyFromIphone", "onlyFromBlackBerry"]
        );
    }

    #[test]
    fn test_negated_forms() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.exclude_android().without_media_photos();
        })
        .unwrap();

        assert!(registry.evaluate(&tweet(json!({ "source": "Twitter for iPhone" }))));
        assert!(!registry.evaluate(&tweet(json!({ "source": "Twitter for Android" }))));
        assert!(!registry.evaluate(&tweet(json!({
            "extended_entities": { "media": [ { "type": "photo" } ] }
        }))));
    }

    #[test]
    fn test_without_language_forms() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.without_language("en");
        })
        .unwrap();

        assert!(!registry.evaluate(&tweet(json!({ "lang": "EN" }))));
        assert!(registry.evaluate(&tweet(json!({ "lang": "fr" }))));
        assert!(registry.evaluate(&tweet(json!({ "lang": "und" }))));

        let mut undetected = PredicateRegistry::new();
        filters(&mut undetected, |f| {
            f.without_any_language();
        })
        .unwrap();
        assert!(undetected.evaluate(&tweet(json!({ "lang": "und" }))));
        assert!(!undetected.evaluate(&tweet(json!({ "lang": "de" }))));
    }

    #[test]
    fn test_custom_predicate() {
        let mut registry = PredicateRegistry::new();
        filters(&mut registry, |f| {
            f.with_predicate("hasText", crate::traits::from_fn(|t| t.text.is_some()));
        })
        .unwrap();

        assert!(!registry.evaluate(&Tweet::default()));
        assert!(registry.evaluate(&tweet(json!({ "text": "hi" }))));
    }

    #[test]
    fn test_declare_unknown_name() {
        let mut registry = PredicateRegistry::new();
        let err = try_filters(&mut registry, |f| {
            f.declare(&Declaration::new("withCats"))?;
            Ok(())
        })
        .unwrap_err();

        assert!(matches!(err, FilterError::UnknownDeclaration { ref name } if name == "withCats"));
        assert!(!registry.is_sealed());
    }

    #[test]
    fn test_failed_session_rolls_back() {
        let mut registry = PredicateRegistry::new();
        let err = try_filters(&mut registry, |f| {
            f.without_rts().only_verified();
            f.declare(&Declaration::new("withCats"))?;
            Ok(())
        })
        .unwrap_err();

        assert!(matches!(err, FilterError::UnknownDeclaration { .. }));
        assert!(registry.is_empty());
        assert!(!registry.is_sealed());
        assert!(registry.evaluate(&tweet(json!({ "retweeted_status": {} }))));
    }

    #[test]
    fn test_declare_accepts_both_spellings() {
        let mut registry = PredicateRegistry::new();
        try_filters(&mut registry, |f| {
            f.declare(&Declaration::new("withoutRTs"))?
                .declare(&Declaration::new("without_replies"))?
                .declare(&Declaration::with_args("withLanguage", json!(["en", "es"])))?
                .declare(&Declaration::with_args("withHashtags", json!("2")))?;
            Ok(())
        })
        .unwrap();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["withoutRTs", "withoutReplies", "withLanguage", "withHashtags"]
        );
        assert!(registry.is_sealed());
    }
}
