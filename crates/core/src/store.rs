//! Live key→value mapping of a user's in-progress edits for one template
//! instance.
//!
//! The store is owned by a single form/preview session and rebuilt from
//! scratch when the template slug changes. Keys that were never set are
//! "unset", which is distinct from present-but-empty: unset fields fall
//! through to schema defaults at display time, empty fields do not disappear.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current text-field values for one template instance.
///
/// Serializes as a flat string→string JSON object, which is exactly the
/// `text_fields` payload carried by an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFieldStore {
    values: BTreeMap<String, String>,
}

impl TextFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from a defaults map (see
    /// [`TemplateSchema::default_text_fields`](crate::schema::TemplateSchema::default_text_fields)).
    pub fn from_defaults(defaults: BTreeMap<String, String>) -> Self {
        Self { values: defaults }
    }

    /// Apply defaults for keys that are not yet present. Existing entries are
    /// never overwritten; defaults apply only at initial seed.
    pub fn seed_defaults(&mut self, defaults: &BTreeMap<String, String>) {
        for (key, value) in defaults {
            self.values
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Set a single key, leaving every other entry untouched.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the key has ever been set (even to an empty string).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl From<BTreeMap<String, String>> for TextFieldStore {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("mainMessage".to_string(), "varsayılan mesaj".to_string()),
            ("footerMessage".to_string(), "alt mesaj".to_string()),
        ])
    }

    #[test]
    fn set_is_idempotent() {
        let mut store = TextFieldStore::from_defaults(defaults());
        store.set("mainMessage", "yeni mesaj");
        let snapshot = store.clone();
        store.set("mainMessage", "yeni mesaj");
        assert_eq!(store, snapshot);
    }

    #[test]
    fn set_does_not_disturb_other_keys() {
        let mut store = TextFieldStore::from_defaults(defaults());
        store.set("a", "x");
        store.set("b", "y");
        assert_eq!(store.get("a"), Some("x"));
        assert_eq!(store.get("b"), Some("y"));
        assert_eq!(store.get("mainMessage"), Some("varsayılan mesaj"));
        assert_eq!(store.get("footerMessage"), Some("alt mesaj"));
    }

    #[test]
    fn seed_defaults_never_overwrites() {
        let mut store = TextFieldStore::new();
        store.set("mainMessage", "kullanıcı mesajı");
        store.seed_defaults(&defaults());
        assert_eq!(store.get("mainMessage"), Some("kullanıcı mesajı"));
        assert_eq!(store.get("footerMessage"), Some("alt mesaj"));
    }

    #[test]
    fn empty_string_is_set_not_unset() {
        let mut store = TextFieldStore::new();
        assert!(!store.contains("subtitle"));
        store.set("subtitle", "");
        assert!(store.contains("subtitle"));
        assert_eq!(store.get("subtitle"), Some(""));
    }

    #[test]
    fn serializes_as_flat_object() {
        let store = TextFieldStore::from_defaults(defaults());
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["mainMessage"], "varsayılan mesaj");
        assert_eq!(json["footerMessage"], "alt mesaj");
    }
}
