//! # HAPI ⇄ Proto converter
//!
//! Field-by-field converters between the FHIR R4 business-object model (`fhir-hapi`) and the
//! protobuf wire messages (`fhir-proto`).
//!
//! Contains:
//! - [`ToProto`] / [`ToHapi`], implemented for every supported primitive, datatype, code and
//!   resource, plus blanket impls for `Option<T>` and `Vec<T>`
//! - Code normalisation between FHIR codes and protobuf enum identifiers ([`codes`])
//! - Choice (`[x]`) dispatch with a configurable policy for undeclared variants
//! - [`Converter`], a small facade holding a [`ConverterConfig`]
//!
//! Every conversion reads its input by reference and builds a fresh output. There is no
//! shared state, so converters can be used from any thread.

#[macro_use]
mod choice;

pub mod codes;
pub mod config;
#[macro_use]
mod datatypes;
mod primitives;
mod resources;
mod temporal;

pub use codes::{hapi_code_to_proto_identifier, proto_identifier_to_hapi_name};
pub use config::{choice_policy_from_value, ChoicePolicy, ChoicePolicyError, ConverterConfig};

/// Errors returned by the converters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A choice element held no variant, or a variant its field does not declare.
    #[error("invalid choice type for {field}: {}", .found.unwrap_or("no variant set"))]
    InvalidChoiceType {
        field: &'static str,
        found: Option<&'static str>,
    },

    #[error("unknown {enum_name} constant '{identifier}'")]
    UnknownEnumConstant {
        enum_name: &'static str,
        identifier: String,
    },

    #[error("invalid {datatype} value: {reason}")]
    InvalidValue {
        datatype: &'static str,
        reason: String,
    },
}

/// Type alias for Results that can fail with a [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Conversion from the business-object model to the wire model.
pub trait ToProto {
    type Output;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output>;
}

/// Conversion from the wire model to the business-object model.
pub trait ToHapi {
    type Output;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output>;
}

impl<T: ToProto> ToProto for Option<T> {
    type Output = Option<T::Output>;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        self.as_ref().map(|value| value.to_proto(config)).transpose()
    }
}

impl<T: ToProto> ToProto for Vec<T> {
    type Output = Vec<T::Output>;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        self.iter().map(|value| value.to_proto(config)).collect()
    }
}

impl<T: ToHapi> ToHapi for Option<T> {
    type Output = Option<T::Output>;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        self.as_ref().map(|value| value.to_hapi(config)).transpose()
    }
}

impl<T: ToHapi> ToHapi for Vec<T> {
    type Output = Vec<T::Output>;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        self.iter().map(|value| value.to_hapi(config)).collect()
    }
}

/// Converter facade holding the configuration used for every call.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a business object into its wire message.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConvertError`] raised by any nested field.
    pub fn to_proto<T: ToProto>(&self, value: &T) -> ConvertResult<T::Output> {
        tracing::debug!(
            source = std::any::type_name::<T>(),
            policy = %self.config.choice_policy(),
            "converting to proto"
        );
        value.to_proto(&self.config)
    }

    /// Convert a wire message into its business object.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConvertError`] raised by any nested field.
    pub fn to_hapi<T: ToHapi>(&self, value: &T) -> ConvertResult<T::Output> {
        tracing::debug!(
            source = std::any::type_name::<T>(),
            policy = %self.config.choice_policy(),
            "converting to hapi"
        );
        value.to_hapi(&self.config)
    }
}

/// Convert with the default configuration.
///
/// # Errors
///
/// See [`Converter::to_proto`].
pub fn to_proto<T: ToProto>(value: &T) -> ConvertResult<T::Output> {
    Converter::default().to_proto(value)
}

/// Convert with the default configuration.
///
/// # Errors
///
/// See [`Converter::to_hapi`].
pub fn to_hapi<T: ToHapi>(value: &T) -> ConvertResult<T::Output> {
    Converter::default().to_hapi(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhir_hapi::{BooleanType, DataType, Patient, Reference, StringType};
    use pretty_assertions::assert_eq;

    #[test]
    fn boolean_true_survives_both_directions() {
        let proto = to_proto(&BooleanType::new(true)).expect("to proto");
        assert!(proto.value);

        let back = to_hapi(&proto).expect("to hapi");
        assert_eq!(back.value, Some(true));
    }

    #[test]
    fn repeated_fields_keep_order_and_length() {
        let names = vec![
            StringType::new("Sarah"),
            StringType::default(),
            StringType::new("Jane"),
        ];
        let proto = to_proto(&names).expect("to proto");
        assert_eq!(proto.len(), 3);

        let back = to_hapi(&proto).expect("to hapi");
        assert_eq!(back, names);
        assert!(to_proto(&Vec::<StringType>::new())
            .expect("empty")
            .is_empty());
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let value: Option<StringType> = None;
        assert_eq!(to_proto(&value), Ok(None));
    }

    #[test]
    fn facade_applies_its_policy() {
        let patient = Patient {
            deceased: Some(DataType::Reference(Reference::new("Patient/1"))),
            ..Patient::default()
        };

        let strict = Converter::default();
        assert!(matches!(
            strict.to_proto(&patient),
            Err(ConvertError::InvalidChoiceType {
                field: "Patient.deceased[x]",
                found: Some("Reference"),
            })
        ));

        let lenient = Converter::new(ConverterConfig::new(ChoicePolicy::EmptyMessage));
        let proto = lenient.to_proto(&patient).expect("lenient conversion");
        assert_eq!(proto.deceased.map(|d| d.choice), Some(None));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConvertError::InvalidChoiceType {
            field: "Observation.value[x]",
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid choice type for Observation.value[x]: no variant set"
        );
    }
}
