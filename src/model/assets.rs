use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Asset key → percentage, kept in insertion order. Serialized as a JSON
/// object whose key order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: Vec<(String, u32)>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&u32> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the value in place for an existing key, otherwise appends.
    pub fn insert(&mut self, key: impl Into<String>, value: u32) -> Option<u32> {
        let key = key.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &u32> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn sum(&self) -> u32 {
        self.entries.iter().map(|(_, v)| *v).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut map = AssetMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for AssetMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct AssetMapVisitor;

impl<'de> Visitor<'de> for AssetMapVisitor {
    type Value = AssetMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of asset keys to percentages")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AssetMap, A::Error> {
        let mut map = AssetMap::new();
        while let Some((key, value)) = access.next_entry::<String, u32>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate asset key: {key}")));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for AssetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AssetMapVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/assets.rs"]
mod tests;
