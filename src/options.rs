//! Bundle configuration values
//!
//! Content types and missing-translation policies are closed sets, so they
//! are plain enums. Both parse from their lowercase names and round-trip
//! through serde, which lets a host keep bundle settings in a JSON file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{BundleError, BundleResult};

/// The kind of text a bundle holds. Governs which structural tokens are
/// protected during pseudo-localization and whether results are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain text. Only `{placeholder}` spans are protected.
    #[default]
    Raw,
    /// HTML: tags and entities are protected, results are escaped.
    Html,
    /// XML: handled like HTML.
    Xml,
    /// Platform format strings: backslash escapes and printf-style
    /// specifiers such as `%2$s` are protected.
    #[serde(alias = "platform")]
    Java,
}

impl ContentType {
    /// True for the markup types (HTML and XML).
    pub fn is_markup(self) -> bool {
        matches!(self, ContentType::Html | ContentType::Xml)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Raw => "raw",
            ContentType::Html => "html",
            ContentType::Xml => "xml",
            ContentType::Java => "java",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = BundleError;

    fn from_str(s: &str) -> BundleResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(ContentType::Raw),
            "html" => Ok(ContentType::Html),
            "xml" => Ok(ContentType::Xml),
            "java" | "platform" => Ok(ContentType::Java),
            _ => Err(BundleError::InvalidContentType(s.to_string())),
        }
    }
}

/// What a lookup returns when the provider has no translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// The source string itself
    #[default]
    Source,
    /// A pseudo-localized version of the source string
    Pseudo,
    /// The empty string
    Empty,
    /// The fixed marker [`crate::MISSING_PLACEHOLDER`]
    Placeholder,
}

impl MissingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingPolicy::Source => "source",
            MissingPolicy::Pseudo => "pseudo",
            MissingPolicy::Empty => "empty",
            MissingPolicy::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MissingPolicy {
    type Err = BundleError;

    fn from_str(s: &str) -> BundleResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "source" => Ok(MissingPolicy::Source),
            "pseudo" => Ok(MissingPolicy::Pseudo),
            "empty" => Ok(MissingPolicy::Empty),
            "placeholder" => Ok(MissingPolicy::Placeholder),
            _ => Err(BundleError::InvalidMissingPolicy(s.to_string())),
        }
    }
}

/// Serializable bundle settings.
///
/// Every field has a default, so `{}` is a valid configuration:
///
/// ```json
/// {
///     "locale": "uk-UA",
///     "type": "html",
///     "missing": "pseudo",
///     "lengthen": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleOptions {
    /// BCP 47 tag of the target locale
    pub locale: String,
    #[serde(rename = "type", alias = "content_type")]
    pub content_type: ContentType,
    pub missing: MissingPolicy,
    /// Append digit padding to pseudo-localized strings
    pub lengthen: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        BundleOptions {
            locale: crate::DEFAULT_LOCALE.to_string(),
            content_type: ContentType::default(),
            missing: MissingPolicy::default(),
            lengthen: true,
        }
    }
}

impl BundleOptions {
    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> BundleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BundleError::Load(format!("Failed to parse bundle options: {}", e)))
    }
}
