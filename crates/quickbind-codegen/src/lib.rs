//! Quickbind code generator: class metadata to C++ binding glue.
//!
//! # Architecture
//!
//! The generator takes a parsed [`quickbind_types::ClassMetadata`] tree and
//! produces one self-contained C++ source unit that exposes the class to
//! the embedded script runtime:
//!
//! ```text
//! ClassMetadata ──► enum pre-pass ──► member walk ──► section buffers ──► unit text
//! ```
//!
//! ## Sections (fixed order)
//! - include directives
//! - binding-constructor boilerplate (ClassInfo + publish calls)
//! - one wrapper function per public method, in namespace `{Class}NS`
//! - enum name→value table (sentinel-terminated, never absent)
//! - static-property placeholder
//! - constructor dispatch function + descriptor record
//! - method dispatch table (sentinel-terminated)
//!
//! ## Marshalling
//!
//! Every parameter/return type maps to exactly one of five strategies —
//! boolean, numeric, enum (integer cast), transparent value (generic typed
//! extraction), object reference (fallback) — see [`classify`]. Constructor
//! overloads sharing an arity are disambiguated at runtime by an ordered
//! chain of type guards, first match wins.

pub mod assembler;
pub mod classify;
pub mod ctor;
pub mod error;
pub mod extract;
pub mod method;
pub mod tables;

pub use assembler::{generate, GenContext, GeneratedUnit};
pub use classify::{classify, EnumRegistry, TypeClassification};
pub use error::{GenError, GenResult};
