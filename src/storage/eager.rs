use std::collections::{hash_map, HashMap};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    key::Key,
};

use super::{serialize_pairs, KeyStorage, NormalizingMap};

/// Converts every key to its string form on insertion, so the store only
/// ever holds `Key::Str` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EagerMap<V> {
    data: KeyStorage<V>,
}

impl<V> EagerMap<V> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    /// Builds the map from a fallible pair source, stopping at the first error.
    pub fn try_from_pairs<K, I, E>(pairs: I) -> std::result::Result<Self, E>
    where
        K: Into<Key>,
        I: IntoIterator<Item = std::result::Result<(K, V), E>>,
    {
        let mut map = Self::new();
        for pair in pairs {
            let (key, value) = pair?;
            map.set_item(key.into(), value);
        }
        Ok(map)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Key, V> {
        self.data.iter()
    }

    pub fn values(&self) -> hash_map::Values<'_, Key, V> {
        self.data.values()
    }
}

impl<V> NormalizingMap<V> for EagerMap<V> {
    fn get_item(&self, key: &Key) -> Result<&V> {
        self.data
            .get(&*key.normalized())
            .ok_or_else(|| Error::KeyNotFound(key.clone()))
    }

    fn set_item(&mut self, key: Key, value: V) -> Option<V> {
        if !key.is_str() {
            debug!("normalizing key {:?} on insert", key);
        }
        self.data.insert(key.into_normalized(), value)
    }

    fn contains(&self, key: &Key) -> bool {
        self.data.contains_key(&*key.normalized())
    }

    fn remove(&mut self, key: &Key) -> Option<V> {
        self.data.remove(key)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn keys(&self) -> Vec<&Key> {
        self.data.keys().collect()
    }
}

impl<V> Default for EagerMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for EagerMap<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set_item(key.into(), value);
        }
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for EagerMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<V> From<HashMap<Key, V>> for EagerMap<V> {
    fn from(map: HashMap<Key, V>) -> Self {
        Self::from_pairs(map)
    }
}

impl<V> IntoIterator for EagerMap<V> {
    type Item = (Key, V);
    type IntoIter = hash_map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a EagerMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = hash_map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<V: Serialize> Serialize for EagerMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_pairs(&self.data, serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for EagerMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pairs = Vec::<(Key, V)>::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
    }
}
