//! Insertion-ordered HTML attribute map.

use super::escape::encode;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Write};

/// HTML attributes for a single element, keyed by attribute name.
///
/// Serializes as a plain mapping, so configuration files can write
/// `brand_attributes: { id: logo, class: big }`. Numbers are stringified;
/// `true` renders the attribute as `name="name"`; `false` and null drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Option<Scalar>>::deserialize(deserializer)?;
        let mut attrs = IndexMap::with_capacity(raw.len());
        for (name, value) in raw {
            let value = match value {
                Some(Scalar::Bool(true)) => name.clone(),
                Some(Scalar::Bool(false)) | None => continue,
                Some(Scalar::Int(n)) => n.to_string(),
                Some(Scalar::Float(n)) => n.to_string(),
                Some(Scalar::Text(s)) => s,
            };
            attrs.insert(name, value);
        }
        Ok(Self(attrs))
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove an attribute, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Append to the `class` attribute, separated by a space, or create it.
    pub fn append_class(&mut self, classes: &str) {
        match self.0.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(classes);
            }
            None => {
                self.0.insert("class".to_string(), classes.to_string());
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write ` name="value"` pairs, encoding each value.
    pub fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        for (name, value) in &self.0 {
            write!(out, " {}=\"{}\"", name, encode(value))?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
