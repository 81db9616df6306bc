//! Placeholder tokens found in template text.
//!
//! A placeholder is kept verbatim, braces included: `{{ name }}` and `{{name}}`
//! are different placeholders and are mapped separately.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Reserved token replaced with the generation date.
pub const DATE_TOKEN: &str = "{{date}}";

/// Reserved token replaced with the generation date.
pub const TODAY_TOKEN: &str = "{{today}}";

/// Tokens resolved automatically, outside any field mapping.
pub const RESERVED_TOKENS: [&str; 2] = [DATE_TOKEN, TODAY_TOKEN];

/// A `{{identifier}}` token, stored exactly as it appears in the template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placeholder(String);

impl Placeholder {
    /// Wrap a full token such as `{{name}}`.
    ///
    /// The inner part must be non-empty and must not contain `}`.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let inner = token
            .strip_prefix("{{")
            .and_then(|rest| rest.strip_suffix("}}"));
        match inner {
            Some(inner) if !inner.is_empty() && !inner.contains('}') => Ok(Self(token)),
            _ => Err(ModelError::InvalidPlaceholder(token)),
        }
    }

    /// Build the token for a bare name: `name` becomes `{{name}}`.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(format!("{{{{{name}}}}}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token with every brace removed, used for name-based matching.
    pub fn bare_name(&self) -> String {
        self.0.chars().filter(|ch| *ch != '{' && *ch != '}').collect()
    }

    /// Visible marker written when no value is available: `[{{name}}]`.
    pub fn fallback(&self) -> String {
        format!("[{}]", self.0)
    }

    /// True for `{{date}}` and `{{today}}`.
    pub fn is_reserved(&self) -> bool {
        RESERVED_TOKENS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Placeholder {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Placeholder {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Placeholder> for String {
    fn from(value: Placeholder) -> Self {
        value.0
    }
}

impl AsRef<str> for Placeholder {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
