use std::io;

use thiserror::Error;

use crate::storage::StorageError;

/// Failures while building a response. The connection answers all of them with
/// `500 Internal Server Error`.
#[derive(Error, Debug)]
pub enum HandleError {
    #[error("can't compress response body: {source}")]
    Compress { source: io::Error },

    #[error("storage error: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

impl HandleError {
    pub fn compress<E: Into<io::Error>>(e: E) -> Self {
        Self::Compress { source: e.into() }
    }
}
