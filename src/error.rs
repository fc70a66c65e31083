//! Error type of the driver model.
//!
//! The host protocol only distinguishes success from failure, so every
//! variant folds to `0` at the C boundary.

use crate::selector::Selector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("selector {0} is not in the catalogue")]
    UnsupportedSelector(i64),

    #[error("selector {0:?} cannot be read")]
    UnsupportedGet(Selector),

    #[error("selector {0:?} cannot be written")]
    UnsupportedSet(Selector),

    #[error("command {0} is not supported")]
    UnsupportedCommand(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
