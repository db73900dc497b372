// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, Result, TermscanError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FileName, FilePath, MatchCount};
