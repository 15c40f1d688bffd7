use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Serialize};

/// A mapping key. `Str` is the canonical form every other variant
/// normalizes into.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Key {
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// The string form of the key. Borrows when the key already is one.
    pub fn normalized(&self) -> Cow<'_, Key> {
        match self {
            Key::Str(_) => Cow::Borrowed(self),
            other => Cow::Owned(Key::Str(other.to_string())),
        }
    }

    pub fn into_normalized(self) -> Key {
        match self {
            Key::Str(_) => self,
            other => Key::Str(other.to_string()),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{}", i),
            Key::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i.into())
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Int(i.into())
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}
