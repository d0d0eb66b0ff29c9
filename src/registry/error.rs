use crate::trie::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("path tree is sealed; cannot add pattern '{path}'")]
    Sealed { path: String },
    #[error("bulk registration failed at entry {index}: {source}")]
    Bulk {
        index: usize,
        #[source]
        source: TreeError,
    },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
