use thiserror::Error;

use crate::key::Key;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Carries the key as the caller asked for it, never its normalized form.
    #[error("key not found: {0:?}")]
    KeyNotFound(Key),
}

pub type Result<T> = std::result::Result<T, Error>;
