//! Language matching on the `lang` field.

use crate::keywords::Keywords;
use crate::traits::Predicate;
use tweet_model::Tweet;

/// Language code used when no language could be detected
pub const UNDEFINED_LANGUAGE: &str = "und";

/// Passes records in one of the given languages.
///
/// ## Algorithm
/// 1. `lang` must be present, non-empty and not [`UNDEFINED_LANGUAGE`]
/// 2. With no languages requested, any defined language passes
/// 3. Otherwise compare case-insensitively against each requested code
///
/// Asking for `"und"` explicitly still never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMatch {
    languages: Keywords,
}

impl LanguageMatch {
    pub fn new(languages: impl Into<Keywords>) -> Self {
        Self {
            languages: languages.into(),
        }
    }

    /// Any defined language
    pub fn any() -> Self {
        Self::new(Keywords::any())
    }

    pub fn languages(&self) -> &Keywords {
        &self.languages
    }
}

impl Predicate for LanguageMatch {
    fn test(&self, tweet: &Tweet) -> bool {
        let lang = match tweet.lang() {
            Some(lang) if !lang.is_empty() && lang != UNDEFINED_LANGUAGE => lang,
            _ => return false,
        };
        self.languages.is_empty() || self.languages.any_equal_to(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_lang(lang: &str) -> Tweet {
        Tweet {
            lang: Some(Some(lang.to_string())),
            ..Tweet::default()
        }
    }

    #[test]
    fn test_any_defined_language() {
        let any = LanguageMatch::any();
        assert!(any.test(&in_lang("en")));
        assert!(!any.test(&in_lang("und")));
        assert!(!any.test(&in_lang("")));
        assert!(!any.test(&Tweet::default()));
    }

    #[test]
    fn test_language_list_ignores_case() {
        let langs = LanguageMatch::new(["en", "es"]);
        assert!(langs.test(&in_lang("ES")));
        assert!(!langs.test(&in_lang("fr")));
    }

    #[test]
    fn test_undefined_never_matches_even_when_requested() {
        let und = LanguageMatch::new("und");
        assert!(!und.test(&in_lang("und")));
    }
}
