//! FHIR R4 business-object model.
//!
//! This crate provides the mutable, record-style representation of FHIR data that the
//! converters translate to and from protobuf wire messages:
//! - primitive element wrappers carrying `id`, `extension` and an optional value
//! - temporal wrappers carrying an explicit precision and timezone identifier
//! - code enums with hyphen-free constant names and a `NULL` sentinel
//! - an open [`DataType`] sum type used for every choice (`[x]`) element
//! - complex datatypes and resources
//!
//! Values are plain data: fields are public, optional elements are `Option`, repeated
//! elements are `Vec` in document order. Nothing here performs validation beyond what is
//! needed to parse FHIR lexical forms.

#[macro_use]
mod enumeration;

pub mod codes;
pub mod datatype;
pub mod datatypes;
pub mod primitive;
pub mod resources;
pub mod temporal;
pub mod yaml;

pub use codes::*;
pub use datatype::DataType;
pub use datatypes::*;
pub use enumeration::{CodeEnum, Enumeration, NULL_NAME};
pub use primitive::*;
pub use resources::*;
pub use temporal::{
    DateTimeType, DateType, InstantType, TemporalPrecision, TimeType, TimeZoneId,
};

/// Errors returned by the `fhir-hapi` model crate.
#[derive(Debug, thiserror::Error)]
pub enum HapiError {
    #[error("invalid {datatype} value '{value}': {reason}")]
    InvalidValue {
        datatype: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`HapiError`].
pub type HapiResult<T> = Result<T, HapiError>;
