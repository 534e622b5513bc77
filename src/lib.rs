//! Resource bundle lookup with script-aware pseudo-localization.
//!
//! A [`ResBundle`] wraps a [`StringProvider`] bound to one target locale.
//! Strings are looked up by their source text (the key is derived from it,
//! see [`key::derive_key`]) or by an explicit key. When the provider has no
//! translation, the bundle's [`MissingPolicy`] decides what comes back, and
//! pseudo-localized fallbacks use the substitution table for the script of
//! the target locale.
//!
//! ```
//! use resbundle::{MessageMap, MissingPolicy, ResBundle};
//!
//! let mut messages = MessageMap::new();
//! messages.with_message("r481239240", "Aceptar");
//!
//! let mut bundle = ResBundle::for_locale(messages, "es-ES").unwrap();
//! assert_eq!(bundle.get_string("  Done  "), "  Aceptar  ");
//!
//! bundle.with_missing(MissingPolicy::Pseudo);
//! assert_eq!(bundle.get_string("Email Sent"), "Ëmàíľ Šëñţ43210");
//! ```

use icu_locale::Locale;
use tracing::{debug, trace, warn};

pub mod error;
pub mod key;
pub mod loader;
pub mod markup;
pub mod options;
pub mod provider;
pub mod pseudo;
pub mod scanner;
pub mod script;
pub mod span;

#[cfg(test)]
mod integration_tests;

pub use error::{BundleError, BundleResult};
pub use options::{BundleOptions, ContentType, MissingPolicy};
pub use provider::{IndexedStrings, MessageMap, StringProvider};
pub use script::{CharMap, IcuScriptLookup, ScriptLookup, ScriptTable};
pub use span::{Span, SpanKind, SpanList};

/// Locale used when a configuration does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Returned for missing translations under [`MissingPolicy::Placeholder`].
pub const MISSING_PLACEHOLDER: &str = "????";

/// Language subtag of the "no linguistic content" locale. Bundles for this
/// language pseudo-localize everything and never return translations.
pub const PSEUDO_LANGUAGE: &str = "zxx";

/// Parse a BCP 47 tag. Underscore separators (`en_US`) are accepted.
pub fn parse_locale(tag: &str) -> BundleResult<Locale> {
    tag.replace('_', "-")
        .parse::<Locale>()
        .map_err(|_| BundleError::InvalidLocale(tag.to_string()))
}

/// Leading whitespace, core text and trailing whitespace of `source`.
///
/// Whitespace here is ASCII space, tab, line feed, vertical tab, form feed
/// and carriage return. An all-whitespace string is returned entirely as the
/// leading part.
fn split_padding(source: &str) -> (&str, &str, &str) {
    let is_padding = |c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r');
    let rest = source.trim_start_matches(is_padding);
    let leading = &source[..source.len() - rest.len()];
    let core = rest.trim_end_matches(is_padding);
    let trailing = &rest[core.len()..];
    (leading, core, trailing)
}

/// Translations for one target locale.
///
/// Settings are plain fields changed through `&mut self`, so a bundle shared
/// between threads has to be configured before it is shared.
#[derive(Debug, Clone)]
pub struct ResBundle<P> {
    provider: P,
    locale: Locale,
    content_type: ContentType,
    missing: MissingPolicy,
    lengthen: bool,
    table: &'static CharMap,
}

impl<P: StringProvider> ResBundle<P> {
    /// Create a bundle, choosing the substitution table from ICU
    /// likely-subtags data for `locale`.
    pub fn new(provider: P, locale: Locale) -> Self {
        Self::with_script_lookup(provider, locale, &IcuScriptLookup::new())
    }

    /// Create a bundle, asking `lookup` for the script of `locale`.
    pub fn with_script_lookup(provider: P, locale: Locale, lookup: &dyn ScriptLookup) -> Self {
        let script = lookup.script_for(&locale);
        debug!("Bundle for {} uses the {:?} table", locale, script);
        ResBundle {
            provider,
            locale,
            content_type: ContentType::default(),
            missing: MissingPolicy::default(),
            lengthen: true,
            table: script.char_map(),
        }
    }

    /// Create a bundle for a locale given as a tag such as `"uk-UA"`.
    pub fn for_locale(provider: P, tag: &str) -> BundleResult<Self> {
        Ok(Self::new(provider, parse_locale(tag)?))
    }

    /// Create a bundle with every setting taken from `options`.
    pub fn from_options(provider: P, options: &BundleOptions) -> BundleResult<Self> {
        let mut bundle = Self::for_locale(provider, &options.locale)?;
        bundle
            .with_content_type(options.content_type)
            .with_missing(options.missing)
            .with_lengthen(options.lengthen);
        Ok(bundle)
    }

    pub fn with_content_type(&mut self, content_type: ContentType) -> &mut Self {
        self.content_type = content_type;
        self
    }

    pub fn with_missing(&mut self, missing: MissingPolicy) -> &mut Self {
        self.missing = missing;
        self
    }

    pub fn with_lengthen(&mut self, lengthen: bool) -> &mut Self {
        self.lengthen = lengthen;
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    pub fn missing(&self) -> MissingPolicy {
        self.missing
    }

    pub fn set_missing(&mut self, missing: MissingPolicy) {
        self.missing = missing;
    }

    /// Whether pseudo-localized strings get digit padding.
    pub fn lengthen(&self) -> bool {
        self.lengthen
    }

    pub fn set_lengthen(&mut self, lengthen: bool) {
        self.lengthen = lengthen;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The substitution table chosen for the target locale.
    pub fn script(&self) -> ScriptTable {
        self.table.script()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// True when the target language is [`PSEUDO_LANGUAGE`].
    pub fn is_pseudo_locale(&self) -> bool {
        self.locale.id.language.as_str() == PSEUDO_LANGUAGE
    }

    /// The key a source string is stored under. See [`key::derive_key`].
    pub fn derive_key(&self, source: &str) -> String {
        key::derive_key(source)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.provider.contains_key(key)
    }

    /// Whether the provider knows the key derived from `source`.
    pub fn contains_source(&self, source: &str) -> bool {
        self.provider.contains_key(&key::derive_key(source))
    }

    /// Every key the provider knows, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.provider.keys()
    }

    /// Look up a string by source text, key, or both.
    ///
    /// A non-empty `key` is used as given. Otherwise `source` is used as the
    /// key if the provider knows it, and its derived key if not. Leading and
    /// trailing whitespace of `source` is put back around whatever the
    /// lookup produces, including a source string returned for a miss, which
    /// then carries its whitespace twice.
    ///
    /// Returns `None` when both arguments are `None`, and when a lookup by
    /// key alone misses under a policy that needs the source.
    pub fn resolve(&self, source: Option<&str>, key: Option<&str>) -> Option<String> {
        if source.is_none() && key.is_none() {
            debug!("Nothing to resolve: no source and no key");
            return None;
        }

        if self.is_pseudo_locale() {
            let text = match source {
                Some(source) => source.to_string(),
                None => self.provider.get_string(key?)?,
            };
            return Some(self.pseudo_localize(&text));
        }

        let (leading, core, trailing) = split_padding(source.unwrap_or(""));
        let translation = self.translation(core, source, key)?;
        Some(format!("{}{}{}", leading, translation, trailing))
    }

    /// Look up `source_or_key`, treating it as source text.
    pub fn get_string(&self, source_or_key: &str) -> String {
        self.resolve(Some(source_or_key), None).unwrap_or_default()
    }

    /// Pseudo-localize `source` for this bundle's script, content type and
    /// lengthen setting, without consulting the provider.
    pub fn pseudo_localize(&self, source: &str) -> String {
        pseudo::pseudo_localize(source, self.content_type, self.table, self.lengthen)
    }

    /// Translation for `source`/`key` with the missing policy applied and
    /// markup escaped. `core` is `source` without its surrounding whitespace.
    fn translation(
        &self,
        core: &str,
        source: Option<&str>,
        key: Option<&str>,
    ) -> Option<String> {
        let lookup_key = match (key, source) {
            (Some(key), _) if !key.is_empty() => key.to_string(),
            (_, Some(source)) if self.provider.contains_key(source) => source.to_string(),
            (_, Some(source)) => key::derive_key(source),
            (_, None) => {
                warn!("Incorrect translation parameters: key is empty and source is missing");
                return Some(String::new());
            }
        };

        let value = match self.provider.get_string(&lookup_key) {
            Some(translation) => Some(translation),
            None => {
                trace!(
                    "No translation for {} in {}, using {} policy",
                    lookup_key, self.locale, self.missing
                );
                match self.missing {
                    MissingPolicy::Source => source.map(str::to_string),
                    MissingPolicy::Pseudo => source.map(|_| self.pseudo_localize(core)),
                    MissingPolicy::Empty => Some(String::new()),
                    MissingPolicy::Placeholder => Some(MISSING_PLACEHOLDER.to_string()),
                }
            }
        };

        if self.content_type.is_markup() {
            value.map(|value| markup::escape(&value))
        } else {
            value
        }
    }
}
