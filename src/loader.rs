use crate::error::{BundleError, BundleResult};
use crate::provider::MessageMap;
use icu_locale::Locale;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a flat JSON resource document into a [`MessageMap`]
///
/// The document should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "r372802078": "Einstellungen in Ihrem Profil",
///     "Done": "Fertig"
/// }
/// ```
///
/// Keys starting with `@` are skipped, as are non-string values.
pub fn parse_messages(json: &str, origin: &str) -> BundleResult<MessageMap> {
    let json: Value = serde_json::from_str(json).map_err(|e| {
        BundleError::Load(format!("Failed to parse JSON from '{}': {}", origin, e))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        BundleError::Load(format!(
            "Invalid JSON in '{}': root must be an object",
            origin
        ))
    })?;

    let mut messages = MessageMap::new();
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        if let Some(message) = value.as_str() {
            messages.with_message(key, message);
        } else {
            warn!("Message '{}' in '{}' is not a string, skipping", key, origin);
        }
    }

    Ok(messages)
}

/// Load messages from a single JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or a root that is not an object
pub fn load_messages_from_file(path: &Path) -> BundleResult<MessageMap> {
    let content = fs::read_to_string(path).map_err(|e| {
        BundleError::Load(format!("Failed to read file '{}': {}", path.display(), e))
    })?;
    parse_messages(&content, &path.display().to_string())
}

/// File stems to try, most specific first, when looking for the resources of
/// `locale` in a directory: `zh-Hant-HK`, `zh_Hant_HK`, `zh-HK`, `zh_HK`, `zh`.
fn file_stems(locale: &Locale) -> Vec<String> {
    let id = &locale.id;
    let language = id.language.as_str();
    let mut tags = vec![id.to_string()];
    if let Some(region) = id.region {
        tags.push(format!("{}-{}", language, region.as_str()));
    }
    tags.push(language.to_string());

    let mut stems: Vec<String> = Vec::new();
    for tag in tags {
        for stem in [tag.clone(), tag.replace('-', "_")] {
            if !stems.contains(&stem) {
                stems.push(stem);
            }
        }
    }
    stems
}

/// Load the messages for `locale` from `path`.
///
/// A file is loaded as it is. A directory is searched for `<tag>.json`,
/// falling back from the full tag to language and region, then to the bare
/// language (`es-MX.json`, `es_MX.json`, `es.json`). When none exists the
/// result is an empty map, so every lookup goes through the missing policy.
pub fn load_messages_for_locale(path: &Path, locale: &Locale) -> BundleResult<MessageMap> {
    if !path.is_dir() {
        return load_messages_from_file(path);
    }

    match file_stems(locale)
        .into_iter()
        .map(|stem| path.join(format!("{}.json", stem)))
        .find(|candidate| candidate.is_file())
    {
        Some(file) => {
            debug!("Resources for {} come from {}", locale, file.display());
            load_messages_from_file(&file)
        }
        None => {
            warn!("No resource file for {} in {}", locale, path.display());
            Ok(MessageMap::new())
        }
    }
}
