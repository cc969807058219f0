//! Typed errors for the orchestration boundary.
//!
//! The lowering and merge transformations are total and never construct
//! one of these; failures only arise reading inputs, serializing, or
//! writing the output document.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed definition document")]
    Document(#[source] serde_json::Error),
    #[error("empty data model: no entities after lowering")]
    EmptyModel,
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
