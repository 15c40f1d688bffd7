use std::collections::{hash_map, HashMap};

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    key::Key,
};

use super::{serialize_pairs, KeyStorage, NormalizingMap};

/// Stores keys exactly as given and only falls back to the string form of a
/// key when a lookup misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyMap<V> {
    data: KeyStorage<V>,
}

impl<V> LazyMap<V> {
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

impl<V> NormalizingMap<V> for LazyMap<V> {
    fn get_item(&self, key: &Key) -> Result<&V> {
        if let Some(value) = self.data.get(key) {
            return Ok(value);
        }
        // a string key is already in normal form, retrying would look up the same key
        if key.is_str() {
            return Err(Error::KeyNotFound(key.clone()));
        }

        let normalized = key.normalized();
        trace!("lookup of {:?} missed, retrying as {:?}", key, normalized);
        match self.data.get(&*normalized) {
            Some(value) => Ok(value),
            None => {
                trace!("fallback lookup of {:?} missed", normalized);
                Err(Error::KeyNotFound(key.clone()))
            }
        }
    }

    fn set_item(&mut self, key: Key, value: V) -> Option<V> {
        self.data.insert(key, value)
    }

    fn contains(&self, key: &Key) -> bool {
        self.data.contains_key(key) || self.data.contains_key(&*key.normalized())
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

impl<V> Default for LazyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for LazyMap<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set_item(key.into(), value);
        }
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for LazyMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<V> From<HashMap<Key, V>> for LazyMap<V> {
    fn from(data: HashMap<Key, V>) -> Self {
        Self { data }
    }
}

impl<V> IntoIterator for LazyMap<V> {
    type Item = (Key, V);
    type IntoIter = hash_map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a LazyMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = hash_map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<V: Serialize> Serialize for LazyMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_pairs(&self.data, serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for LazyMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pairs = Vec::<(Key, V)>::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
    }
}
