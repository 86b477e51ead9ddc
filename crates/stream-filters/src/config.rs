//! Declarative filter configuration.
//!
//! A filter set can be written as data instead of a method chain:
//!
//! ```json
//! { "filters": [
//!     { "name": "withoutRTs" },
//!     { "name": "withLanguage", "args": ["en", "es"] },
//!     { "name": "withHashtags", "args": 2 }
//! ] }
//! ```
//!
//! A bare array of declarations is accepted as well. Compiling a config
//! goes through the same [`FilterSession`](crate::FilterSession) methods as
//! the fluent API, so both forms produce identical registries.

use crate::error::{FilterError, Result};
use crate::registry::PredicateRegistry;
use crate::session::try_filters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One `{name, args}` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub args: Value,
}

impl Declaration {
    /// A declaration without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Value::Null,
        }
    }

    pub fn with_args(name: impl Into<String>, args: Value) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse the command-line shorthand `name[=arg1,arg2,...]`.
    ///
    /// One argument becomes a string (a number when it is all digits),
    /// several become a list of strings.
    pub fn parse_inline(s: &str) -> Result<Self> {
        let (name, args) = match s.split_once('=') {
            Some((name, args)) => (name.trim(), Some(args)),
            None => (s.trim(), None),
        };
        if name.is_empty() {
            return Err(FilterError::InvalidArgument {
                declaration: s.to_string(),
                reason: "missing declaration name".to_string(),
            });
        }

        let args = match args {
            None => Value::Null,
            Some(args) => {
                let mut parts: Vec<&str> = args
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .collect();
                match parts.len() {
                    0 => Value::Null,
                    1 => {
                        let part = parts.remove(0);
                        part.parse::<u64>()
                            .map(Value::from)
                            .unwrap_or_else(|_| Value::from(part))
                    }
                    _ => Value::from(parts),
                }
            }
        };
        Ok(Self::with_args(name, args))
    }

    /// Name folded for matching: lower-case, without `_` or `-` separators
    pub(crate) fn canonical_name(&self) -> String {
        self.name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// An ordered list of declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub filters: Vec<Declaration>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigShape {
    Wrapped(FilterConfig),
    Bare(Vec<Declaration>),
}

impl FilterConfig {
    pub fn new(filters: Vec<Declaration>) -> Self {
        Self { filters }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let shape: ConfigShape = serde_json::from_str(json)?;
        Ok(match shape {
            ConfigShape::Wrapped(config) => config,
            ConfigShape::Bare(filters) => Self { filters },
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading filter config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.filters.push(declaration);
    }

    /// Append every declaration to `registry` and seal it.
    ///
    /// If any declaration fails, none of them are kept.
    pub fn apply(&self, registry: &mut PredicateRegistry) -> Result<()> {
        try_filters(registry, |session| {
            for declaration in &self.filters {
                session.declare(declaration)?;
            }
            Ok(())
        })
    }

    /// Build a new sealed registry from this config.
    pub fn compile(&self) -> Result<PredicateRegistry> {
        let mut registry = PredicateRegistry::new();
        self.apply(&mut registry)?;
        tracing::debug!("Compiled filter config ({} predicates)", registry.len());
        Ok(registry)
    }
}
