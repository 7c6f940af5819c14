//! Named operation options

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::OptionError;
use crate::model::{LosslessValue, OptionValue};

/// Operation-specific named parameters (e.g. `h`, `n_windows`, `step_size`)
///
/// Backends forward options to the collaborator exactly as given. Only the
/// collaborator interprets them, usually through [`Options::get`] or
/// [`Options::require`]. Values that JSON cannot hold, such as NaN, are
/// rejected when set, and a decoded object may not repeat a key.
///
/// # Example
///
/// ```rust
/// use backend_spi::Options;
///
/// let options = Options::new()
///     .with("h", 7)
///     .with("level", vec![80, 95])
///     .try_with("alpha", 0.3)
///     .unwrap();
/// assert_eq!(options.require::<usize>("h").unwrap(), 7);
/// assert_eq!(options.get::<Vec<u8>>("level").unwrap(), Some(vec![80, 95]));
/// assert!(Options::new().try_with("alpha", f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Options::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl LosslessValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an option, returning the previous value if there was one
    pub fn insert(&mut self, name: impl Into<String>, value: impl LosslessValue) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder form of [`Options::try_insert`]
    pub fn try_with(
        mut self,
        name: impl Into<String>,
        value: impl OptionValue,
    ) -> Result<Self, OptionError> {
        self.try_insert(name, value)?;
        Ok(self)
    }

    /// Set an option that may not have a JSON form, such as a float
    ///
    /// Fails with [`OptionError::InvalidValue`] and leaves the options
    /// unchanged when the value is or contains a non-finite float.
    pub fn try_insert(
        &mut self,
        name: impl Into<String>,
        value: impl OptionValue,
    ) -> Result<Option<Value>, OptionError> {
        let name = name.into();
        match value.into_option_value() {
            Ok(value) => Ok(self.0.insert(name, value)),
            Err(reason) => Err(OptionError::InvalidValue { name, reason }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn get_raw(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Read an option as `T`, or `None` when it was not supplied
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, OptionError> {
        self.0
            .get(name)
            .map(|value| {
                T::deserialize(value).map_err(|e| OptionError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Read an option as `T`, failing when it was not supplied
    pub fn require<T: DeserializeOwned>(&self, name: &str) -> Result<T, OptionError> {
        self.get(name)?.ok_or_else(|| OptionError::Missing {
            name: name.to_string(),
        })
    }

    pub fn get_or<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T, OptionError> {
        Ok(self.get(name)?.unwrap_or(default))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: LosslessValue> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionsVisitor)
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = Options;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of option names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Options, A::Error> {
        let mut options = BTreeMap::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            if options.contains_key(&name) {
                return Err(de::Error::custom(format!("duplicate option '{}'", name)));
            }
            options.insert(name, value);
        }
        Ok(Options(options))
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
