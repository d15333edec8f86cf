//! Shared types for the quickbind generator.
//!
//! This crate defines the class-description data model consumed by the
//! code generator, plus the diagnostic types carried on generation
//! results. Documents arrive already parsed (JSON); nothing here reads
//! C++ headers.

mod diag;
pub mod metadata;

pub use diag::{Diagnostic, Severity};
pub use metadata::{
    ClassMetadata, EnumMetadata, FunctionMetadata, MemberMetadata, ParameterMetadata, Visibility,
};
