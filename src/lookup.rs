//! # Collaborator Traits
//!
//! Translation lookup and settings access are injected read-only
//! collaborators, never ambient globals. The assemblers take them by
//! reference, which keeps every document deterministic under test stubs.

use std::collections::HashMap;

/// Translation-string lookup.
///
/// Implementations must tolerate missing keys by returning the literal
/// fallback.
pub trait TextLookup {
    fn lookup(&self, key: &str, namespace: &str, fallback: &str) -> String;
}

/// Key/value settings access. Absent keys yield an empty string, not an
/// error.
pub trait SettingsStore {
    fn get(&self, key: &str) -> String;
}

/// A lookup with no translations: every call returns the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl TextLookup for NoTranslations {
    fn lookup(&self, _key: &str, _namespace: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Map-backed lookup keyed by `"namespace.key"`.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    entries: HashMap<String, String>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, namespace: &str, key: &str, text: &str) -> Self {
        self.entries
            .insert(format!("{namespace}.{key}"), text.to_string());
        self
    }
}

impl TextLookup for StaticLookup {
    fn lookup(&self, key: &str, namespace: &str, fallback: &str) -> String {
        self.entries
            .get(&format!("{namespace}.{key}"))
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// A settings store with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySettings;

impl SettingsStore for EmptySettings {
    fn get(&self, _key: &str) -> String {
        String::new()
    }
}

/// Map-backed settings store.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    entries: HashMap<String, String>,
}

impl StaticSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for StaticSettings {
    fn get(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for StaticSettings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
