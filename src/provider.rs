//! Resource providers
//!
//! A provider is the store a bundle reads translations from. It is bound to
//! one target locale when it is built; the bundle only ever asks it for the
//! string stored under a key. Two in-memory implementations are included:
//!
//! - [`MessageMap`]: key to translation, the shape of most JSON or
//!   properties resource files
//! - [`IndexedStrings`]: key to integer handle to translation, the shape of
//!   compiled platform resource tables

use std::collections::HashMap;
use std::sync::Arc;

/// Read-only access to the translations for one locale.
pub trait StringProvider {
    /// The translation stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Whether `key` is a known resource id.
    ///
    /// A key can be known even when this locale has no translation for it.
    fn contains_key(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// All resource ids this provider knows about, in no particular order.
    fn keys(&self) -> Vec<String>;
}

impl<T: StringProvider + ?Sized> StringProvider for &T {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

impl<T: StringProvider + ?Sized> StringProvider for Box<T> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

impl<T: StringProvider + ?Sized> StringProvider for Arc<T> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

/// Translations keyed directly by resource key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMap(pub HashMap<String, String>);

impl MessageMap {
    pub fn new() -> Self {
        MessageMap(HashMap::new())
    }

    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }

    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    pub fn get_messages(&self) -> &HashMap<String, String> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for MessageMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        MessageMap(iter.into_iter().collect())
    }
}

impl StringProvider for MessageMap {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }
}

/// Two-level resource table: symbolic names map to integer handles, and
/// handles map to the strings of one locale.
///
/// The name table is shared by every locale of an application, so a name is
/// a known key even in locales that lack a string for its handle.
#[derive(Debug, Clone, Default)]
pub struct IndexedStrings {
    ids: HashMap<String, u32>,
    strings: HashMap<u32, String>,
}

impl IndexedStrings {
    pub fn new() -> Self {
        IndexedStrings::default()
    }

    /// Register the handle for a symbolic name.
    pub fn with_id(&mut self, name: &str, id: u32) -> &mut Self {
        self.ids.insert(name.to_owned(), id);
        self
    }

    /// Store the string for a handle.
    pub fn with_string(&mut self, id: u32, text: &str) -> &mut Self {
        self.strings.insert(id, text.to_owned());
        self
    }

    pub fn id_for(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    pub fn string_for(&self, id: u32) -> Option<&str> {
        self.strings.get(&id).map(String::as_str)
    }
}

impl StringProvider for IndexedStrings {
    fn get_string(&self, key: &str) -> Option<String> {
        let id = self.id_for(key)?;
        self.string_for(id).map(str::to_owned)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.ids.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_map() {
        let mut messages = MessageMap::new();
        messages
            .with_message("greeting", "Bonjour")
            .with_message("farewell", "Au revoir");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages.get_string("greeting"), Some("Bonjour".to_string()));
        assert_eq!(messages.get_string("missing"), None);
        assert!(messages.contains_key("farewell"));
        assert!(!messages.contains_key("Farewell"));

        let mut keys = messages.keys();
        keys.sort();
        assert_eq!(keys, vec!["farewell", "greeting"]);
    }

    #[test]
    fn test_message_map_from_iter() {
        let messages: MessageMap = vec![("a".to_string(), "1".to_string())]
            .into_iter()
            .collect();
        assert_eq!(messages.get_message("a"), Some(&"1".to_string()));
    }

    #[test]
    fn test_indexed_strings() {
        let mut strings = IndexedStrings::new();
        strings
            .with_id("r1", 1)
            .with_id("r2", 2)
            .with_string(1, "Listo");

        assert_eq!(strings.get_string("r1"), Some("Listo".to_string()));
        assert_eq!(strings.get_string("r2"), None);
        assert_eq!(strings.get_string("r3"), None);
        assert!(strings.contains_key("r2"));
        assert!(!strings.contains_key("r3"));
        assert_eq!(strings.id_for("r2"), Some(2));
        assert_eq!(strings.string_for(1), Some("Listo"));
    }

    #[test]
    fn test_smart_pointer_providers() {
        let mut messages = MessageMap::new();
        messages.with_message("k", "v");

        let shared: Arc<dyn StringProvider> = Arc::new(messages.clone());
        assert_eq!(shared.get_string("k"), Some("v".to_string()));

        let boxed: Box<dyn StringProvider> = Box::new(messages.clone());
        assert!(boxed.contains_key("k"));

        let borrowed = &messages;
        assert_eq!(borrowed.keys(), vec!["k"]);
    }
}
