use std::collections::HashMap;

use serde::{ser::SerializeSeq, Serializer};

use crate::{error::Result, key::Key};

type KeyStorage<V> = HashMap<Key, V>;

pub mod eager;
pub mod lazy;

/// The operations a string-normalizing mapping exposes. Implementors differ
/// only in when the string conversion of a key happens.
pub trait NormalizingMap<V> {
    fn get_item(&self, key: &Key) -> Result<&V>;
    fn set_item(&mut self, key: Key, value: V) -> Option<V>;
    fn contains(&self, key: &Key) -> bool;

    /// Removes the entry stored under exactly `key`. No normalization.
    fn remove(&mut self, key: &Key) -> Option<V>;
    fn len(&self) -> usize;
    fn keys(&self) -> Vec<&Key>;

    fn lookup(&self, key: &Key) -> Option<&V> {
        self.get_item(key).ok()
    }

    fn get<'a>(&'a self, key: &Key, default: &'a V) -> &'a V {
        self.lookup(key).unwrap_or(default)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn serialize_pairs<S, V>(data: &KeyStorage<V>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    V: serde::Serialize,
{
    let mut seq = serializer.serialize_seq(Some(data.len()))?;
    for pair in data.iter() {
        seq.serialize_element(&pair)?;
    }
    seq.end()
}
