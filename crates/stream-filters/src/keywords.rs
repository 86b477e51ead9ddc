//! Keyword arguments for source and language matching.
//!
//! Declarations like `onlyFromSource` and `withLanguage` take either one
//! keyword or a list of them. [`Keywords`] folds both shapes into one
//! lower-cased list so the predicates only deal with a single case.

use crate::error::{FilterError, Result};
use serde_json::Value;

/// A normalized, lower-cased set of keywords.
///
/// Blank entries are dropped. An empty set means "no constraint" to the
/// language predicate and "nothing can match" to the source predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// The empty keyword set
    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True if any keyword occurs in `haystack`, ignoring case
    pub fn any_contained_in(&self, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        self.iter().any(|keyword| haystack.contains(keyword))
    }

    /// True if any keyword equals `value`, ignoring case
    pub fn any_equal_to(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.iter().any(|keyword| keyword == value)
    }

    /// Build from a declaration argument: a string, an array of strings, or null.
    pub fn from_value(declaration: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::any()),
            Value::String(s) => Ok(Self::from(s.as_str())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.as_str()),
                    other => Err(FilterError::InvalidArgument {
                        declaration: declaration.to_string(),
                        reason: format!("expected a string keyword, found {}", other),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(|keywords| keywords.into_iter().collect()),
            other => Err(FilterError::InvalidArgument {
                declaration: declaration.to_string(),
                reason: format!("expected a keyword or a list of keywords, found {}", other),
            }),
        }
    }

    fn push(&mut self, keyword: &str) {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() {
            self.0.push(keyword);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keywords = Self::default();
        for keyword in iter {
            keywords.push(keyword.as_ref());
        }
        keywords
    }
}

impl From<&str> for Keywords {
    fn from(keyword: &str) -> Self {
        std::iter::once(keyword).collect()
    }
}

impl From<String> for Keywords {
    fn from(keyword: String) -> Self {
        Self::from(keyword.as_str())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Keywords {
    fn from(keywords: Vec<S>) -> Self {
        keywords.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for Keywords {
    fn from(keywords: &[S]) -> Self {
        keywords.iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Keywords {
    fn from(keywords: [S; N]) -> Self {
        keywords.into_iter().collect()
    }
}

impl<T: Into<Keywords>> From<Option<T>> for Keywords {
    fn from(keywords: Option<T>) -> Self {
        keywords.map(Into::into).unwrap_or_default()
    }
}
