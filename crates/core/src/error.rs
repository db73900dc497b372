//! Re-export error types from the shared kernel crate.

pub use termscan_shared_kernel::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, Result, TermscanError,
};
