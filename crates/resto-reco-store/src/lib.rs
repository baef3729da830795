//! Flat-file persistence and the in-memory catalog of restos and gustos.

use std::path::PathBuf;

use resto_reco_core::CoreError;
use thiserror::Error;

pub mod catalog;
pub mod codec;
pub mod files;

pub use catalog::Catalog;
pub use codec::RecordError;
pub use files::DataFiles;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },
    #[error(transparent)]
    Record(#[from] CoreError),
    #[error("resto '{0}' already exists")]
    DuplicateResto(String),
    #[error("gusto '{0}' already exists")]
    DuplicateGusto(String),
    #[error("resto '{0}' not found")]
    RestoNotFound(String),
    #[error("gusto '{0}' not found")]
    GustoNotFound(String),
    #[error("only labelled gustos can be stored")]
    UnlabeledGusto,
}
