pub mod error;
pub mod key;
pub mod storage;

pub mod cli;

pub use error::{Error, Result};
pub use key::Key;
pub use storage::{eager::EagerMap, lazy::LazyMap, NormalizingMap};
