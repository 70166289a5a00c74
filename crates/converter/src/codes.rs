//! Code normalisation between FHIR codes and protobuf enum identifiers.
//!
//! FHIR codes are hyphenated (`entered-in-error`), protobuf identifiers are UPPER_SNAKE
//! (`ENTERED_IN_ERROR`) and business-object constant names have the separators removed
//! (`ENTEREDINERROR`). The two functions below are the only place the sentinels are mapped:
//! `NULL` on the business-object side, `INVALID_UNINITIALIZED` / `UNRECOGNIZED` on the wire.
//!
//! Codes that are not identifier-safe (`<=`, `MORN.early`) are resolved through the original
//! code annotation carried by the code-system message before any normalisation.

use crate::primitives::{element_id_to_hapi, element_id_to_proto};
use crate::{ConvertError, ConvertResult, ConverterConfig, ToHapi, ToProto};
use fhir_hapi::{CodeEnum, Enumeration, NULL_NAME};
use fhir_proto::{ProtoCode, INVALID_UNINITIALIZED, UNRECOGNIZED};

/// Map a FHIR code (or `NULL`) to a protobuf enum identifier.
///
/// `NULL` in any case becomes `INVALID_UNINITIALIZED`; otherwise hyphens become underscores
/// and the result is upper-cased.
pub fn hapi_code_to_proto_identifier(code: &str) -> String {
    if code.eq_ignore_ascii_case(NULL_NAME) {
        return INVALID_UNINITIALIZED.to_string();
    }
    code.replace('-', "_").to_uppercase()
}

/// Map a protobuf enum identifier to a business-object constant name.
///
/// `INVALID_UNINITIALIZED` and `UNRECOGNIZED` in any case become `NULL`; otherwise
/// underscores are removed.
pub fn proto_identifier_to_hapi_name(identifier: &str) -> String {
    if identifier.eq_ignore_ascii_case(INVALID_UNINITIALIZED)
        || identifier.eq_ignore_ascii_case(UNRECOGNIZED)
    {
        return NULL_NAME.to_string();
    }
    identifier.replace('_', "")
}

/// Resolve the code-system value for a business-object constant.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownEnumConstant`] if neither an original-code annotation nor
/// an identifier of `P` matches the code.
pub fn code_to_proto<E: CodeEnum, P: ProtoCode>(value: E) -> ConvertResult<P> {
    let code = value.to_code().unwrap_or(NULL_NAME);
    if let Some(proto) = P::from_original_code(code) {
        return Ok(proto);
    }

    let identifier = hapi_code_to_proto_identifier(code);
    P::from_identifier(&identifier).ok_or_else(|| {
        tracing::debug!(system = P::SYSTEM, %identifier, "no matching code-system value");
        ConvertError::UnknownEnumConstant {
            enum_name: P::SYSTEM,
            identifier,
        }
    })
}

/// Resolve the business-object constant for a code-system value.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownEnumConstant`] if `E` has no constant for the value,
/// including `UNRECOGNIZED` integers.
pub fn code_to_hapi<E: CodeEnum, P: ProtoCode>(proto: &P) -> ConvertResult<E> {
    if let Some(value) = proto.original_code().and_then(E::from_code) {
        return Ok(value);
    }

    let name = proto_identifier_to_hapi_name(proto.identifier());
    E::value_of(&name).ok_or_else(|| {
        tracing::debug!(enum_name = E::NAME, %name, "no matching enum constant");
        ConvertError::UnknownEnumConstant {
            enum_name: E::NAME,
            identifier: name,
        }
    })
}

/// Pair each business-object code enum with its code-system message.
macro_rules! bind_code {
    ($($hapi:ident => $proto:ident,)+) => {
        $(
            impl ToProto for Enumeration<fhir_hapi::$hapi> {
                type Output = fhir_proto::$proto;

                fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    let code: fhir_proto::$proto = code_to_proto(self.value)?;
                    Ok(code.with_element(
                        element_id_to_proto(&self.id),
                        self.extension.to_proto(config)?,
                    ))
                }
            }

            impl ToHapi for fhir_proto::$proto {
                type Output = Enumeration<fhir_hapi::$hapi>;

                fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    Ok(Enumeration {
                        id: element_id_to_hapi(self.element_id()),
                        extension: self.extension.to_hapi(config)?,
                        value: code_to_hapi(self)?,
                    })
                }
            }
        )+
    };
}

bind_code! {
    AdministrativeGender => AdministrativeGenderCode,
    NameUse => NameUseCode,
    AddressUse => AddressUseCode,
    AddressType => AddressTypeCode,
    ContactPointSystem => ContactPointSystemCode,
    ContactPointUse => ContactPointUseCode,
    IdentifierUse => IdentifierUseCode,
    QuantityComparator => QuantityComparatorCode,
    NarrativeStatus => NarrativeStatusCode,
    LinkType => LinkTypeCode,
    ObservationStatus => ObservationStatusCode,
    EventStatus => EventStatusCode,
    MedicationStatus => MedicationStatusCode,
    SubscriptionStatus => SubscriptionStatusCode,
    SubscriptionChannelType => SubscriptionChannelTypeCode,
    UnitsOfTime => UnitsOfTimeCode,
    DaysOfWeek => DaysOfWeekCode,
    EventTiming => EventTimingCode,
    OperationParameterUse => OperationParameterUseCode,
}
