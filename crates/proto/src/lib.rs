//! # FHIR Proto
//!
//! Protobuf wire messages for the FHIR R4 data model.
//!
//! Contains:
//! - Primitive messages (`value`, `id`, `extension`), including temporal messages that carry
//!   epoch microseconds, a timezone identifier and a per-type precision enum
//! - Code-system messages whose `Value` enum uses UPPER_SNAKE identifiers with
//!   `INVALID_UNINITIALIZED = 0`
//! - Complex datatypes, with choice elements as `…X` wrappers around a `oneof choice`
//! - Resources and `ContainedResource`
//!
//! Messages are plain prost structs: `encode_to_vec` / `decode` give the binary form.

#[macro_use]
mod code_system;

pub mod codes;
pub mod datatypes;
pub mod primitives;
pub mod resources;

pub use code_system::{ProtoCode, INVALID_UNINITIALIZED, UNRECOGNIZED};
pub use codes::*;
pub use datatypes::*;
pub use primitives::*;
pub use resources::*;
