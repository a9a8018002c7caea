//! Request parameter map.
//!
//! Query API actions take flat string parameters. Lists and filters are
//! flattened into numbered keys on the wire (`InstanceId.1`,
//! `Filter.1.Name`, `Filter.1.Value.2`, ...); the helpers here produce
//! those spellings so callers never hand-build numbered keys.
//!
//! Values that are empty or absent are dropped at insertion time: they
//! must never reach the canonical string or the wire request.

use std::collections::BTreeMap;

/// An ordered mapping of request parameter names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter. Empty values are dropped.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !value.is_empty() {
            self.entries.insert(key.into(), value);
        }
        self
    }

    /// Set a parameter from an optional value. `None` and empty strings
    /// are dropped.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a numbered list of parameters: `key.1`, `key.2`, ...
    ///
    /// Empty elements are skipped without consuming an index, matching the
    /// wire convention that indices are contiguous from 1.
    pub fn set_list(&mut self, key: &str, values: &[impl AsRef<str>]) -> &mut Self {
        let mut index = 1;
        for value in values {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            self.set(format!("{key}.{index}"), value);
            index += 1;
        }
        self
    }

    /// Set a filter list: `Filter.N.Name` plus `Filter.N.Value.M` for each
    /// filter's values.
    pub fn set_filters(&mut self, filters: &[(&str, &[&str])]) -> &mut Self {
        for (index, (name, values)) in filters.iter().enumerate() {
            let n = index + 1;
            self.set(format!("Filter.{n}.Name"), *name);
            let mut m = 1;
            for value in *values {
                if value.is_empty() {
                    continue;
                }
                self.set(format!("Filter.{n}.Value.{m}"), *value);
                m += 1;
            }
        }
        self
    }

    /// Look up a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a parameter is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the map, yielding the underlying sorted entries.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
