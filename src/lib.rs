//! # FHIR HAPI ⇄ Proto
//!
//! Facade over the workspace crates:
//! - [`hapi`]: the FHIR R4 business-object model, with YAML loading
//! - [`proto`]: the prost wire messages
//! - [`converter`]: `ToProto` / `ToHapi` for every supported type
//!
//! The helpers below take a resource all the way between YAML text and binary protobuf,
//! going through a [`Converter`] so the caller's choice policy applies.

pub use fhir_hapi as hapi;
pub use fhir_proto as proto;
pub use hapi_proto_converter as converter;

pub use hapi_proto_converter::{
    ChoicePolicy, ConvertError, ConvertResult, Converter, ConverterConfig, ToHapi, ToProto,
    choice_policy_from_value, to_hapi, to_proto,
};

use prost::Message;

/// Environment variable read by the CLI for the default choice policy.
pub const CHOICE_POLICY_ENV: &str = "FHIR_CHOICE_POLICY";

/// Errors from the YAML/protobuf helpers.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("failed to decode ContainedResource: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error(transparent)]
    Hapi(#[from] fhir_hapi::HapiError),
}

/// Type alias for Results that can fail with a [`CodecError`].
pub type CodecResult<T> = Result<T, CodecError>;

/// Parse a resource (tagged by `resourceType`) from YAML.
///
/// # Errors
///
/// Returns [`CodecError::Hapi`] if the text is not YAML, `resourceType` is missing, not the
/// first key or unknown, or a field does not match the model.
pub fn resource_from_yaml(text: &str) -> CodecResult<hapi::Resource> {
    Ok(fhir_hapi::yaml::parse(text)?)
}

/// Render a resource as YAML.
///
/// # Errors
///
/// Returns [`CodecError::Hapi`] if serialisation fails.
pub fn resource_to_yaml(resource: &hapi::Resource) -> CodecResult<String> {
    Ok(fhir_hapi::yaml::render(resource)?)
}

/// Convert a resource and encode it as a binary `ContainedResource`.
///
/// # Errors
///
/// Returns [`CodecError::Convert`] if any field cannot be converted.
pub fn encode_resource(converter: &Converter, resource: &hapi::Resource) -> CodecResult<Vec<u8>> {
    let message = converter.to_proto(resource)?;
    Ok(message.encode_to_vec())
}

/// Decode a binary `ContainedResource` and convert it back to a resource.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes and [`CodecError::Convert`] if the
/// message holds no resource or a field cannot be converted.
pub fn decode_resource(converter: &Converter, bytes: &[u8]) -> CodecResult<hapi::Resource> {
    let message = proto::ContainedResource::decode(bytes)?;
    Ok(converter.to_hapi(&message)?)
}
