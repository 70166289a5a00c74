//! Primitive element converters.
//!
//! An absent business-object value becomes the proto default (`""`, `0`, `false`, empty
//! bytes). On the way back an empty string or empty byte string becomes an absent value,
//! while booleans and integers always produce a value. Element `id` and extensions are carried
//! in both directions.

use crate::{ConvertError, ConvertResult, ConverterConfig, ToHapi, ToProto};
use fhir_hapi as hapi;
use fhir_proto as proto;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) fn element_id_to_proto(id: &Option<String>) -> Option<proto::FhirString> {
    id.as_ref().map(proto::FhirString::of)
}

pub(crate) fn element_id_to_hapi(id: Option<&proto::FhirString>) -> Option<String> {
    id.and_then(|id| non_empty(&id.value))
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl ToProto for hapi::StringType {
    type Output = proto::FhirString;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::FhirString {
            value: self.value.clone().unwrap_or_default(),
            id: element_id_to_proto(&self.id).map(Box::new),
            extension: self.extension.to_proto(config)?,
        })
    }
}

impl ToHapi for proto::FhirString {
    type Output = hapi::StringType;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(hapi::StringType {
            id: element_id_to_hapi(self.id.as_deref()),
            extension: self.extension.to_hapi(config)?,
            value: non_empty(&self.value),
        })
    }
}

/// String-valued primitives other than `string` itself.
macro_rules! string_primitive {
    ($($hapi:ident => $proto:ident,)+) => {
        $(
            impl ToProto for hapi::$hapi {
                type Output = proto::$proto;

                fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    Ok(proto::$proto {
                        value: self.value.clone().unwrap_or_default(),
                        id: element_id_to_proto(&self.id),
                        extension: self.extension.to_proto(config)?,
                    })
                }
            }

            impl ToHapi for proto::$proto {
                type Output = hapi::$hapi;

                fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    Ok(hapi::$hapi {
                        id: element_id_to_hapi(self.id.as_ref()),
                        extension: self.extension.to_hapi(config)?,
                        value: non_empty(&self.value),
                    })
                }
            }
        )+
    };
}

string_primitive! {
    CodeType => Code,
    UriType => Uri,
    UrlType => Url,
    OidType => Oid,
    UuidType => Uuid,
    CanonicalType => Canonical,
    MarkdownType => Markdown,
    IdType => Id,
}

/// Primitives whose wire value has no "empty" state.
macro_rules! scalar_primitive {
    ($($hapi:ident => $proto:ident,)+) => {
        $(
            impl ToProto for hapi::$hapi {
                type Output = proto::$proto;

                fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    Ok(proto::$proto {
                        value: self.value.unwrap_or_default(),
                        id: element_id_to_proto(&self.id),
                        extension: self.extension.to_proto(config)?,
                    })
                }
            }

            impl ToHapi for proto::$proto {
                type Output = hapi::$hapi;

                fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                    Ok(hapi::$hapi {
                        id: element_id_to_hapi(self.id.as_ref()),
                        extension: self.extension.to_hapi(config)?,
                        value: Some(self.value),
                    })
                }
            }
        )+
    };
}

scalar_primitive! {
    BooleanType => Boolean,
    IntegerType => Integer,
    PositiveIntType => PositiveInt,
    UnsignedIntType => UnsignedInt,
}

impl ToProto for hapi::DecimalType {
    type Output = proto::Decimal;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::Decimal {
            value: self.value.map(|v| v.to_string()).unwrap_or_default(),
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
        })
    }
}

impl ToHapi for proto::Decimal {
    type Output = hapi::DecimalType;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        let value = if self.value.is_empty() {
            None
        } else {
            let parsed = Decimal::from_str(&self.value)
                .or_else(|_| Decimal::from_scientific(&self.value))
                .map_err(|e| ConvertError::InvalidValue {
                    datatype: "decimal",
                    reason: format!("'{}': {e}", self.value),
                })?;
            Some(parsed)
        };

        Ok(hapi::DecimalType {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            value,
        })
    }
}

impl ToProto for hapi::Base64BinaryType {
    type Output = proto::Base64Binary;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::Base64Binary {
            value: self.value.clone().unwrap_or_default(),
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
        })
    }
}

impl ToHapi for proto::Base64Binary {
    type Output = hapi::Base64BinaryType;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(hapi::Base64BinaryType {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            value: (!self.value.is_empty()).then(|| self.value.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hapi::{Base64BinaryType, BooleanType, DecimalType, IntegerType, StringType, UriType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    #[test]
    fn string_keeps_id_and_extensions() {
        let mut given = StringType::new("Sarah");
        given.id = Some("given-1".to_string());
        given.extension = vec![hapi::Extension::new(
            "http://example.org/pronunciation",
            StringType::new("SAIR-uh"),
        )];

        let proto = given.to_proto(&config()).expect("to proto");
        assert_eq!(proto.value, "Sarah");
        assert_eq!(
            proto.id.as_ref().map(|id| id.value.as_str()),
            Some("given-1")
        );
        assert_eq!(proto.extension.len(), 1);

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), given);
    }

    #[test]
    fn absent_values_become_proto_defaults() {
        let proto = StringType::default().to_proto(&config()).expect("string");
        assert_eq!(proto, proto::FhirString::default());

        let proto = BooleanType::default().to_proto(&config()).expect("boolean");
        assert!(!proto.value);

        let proto = UriType::default().to_proto(&config()).expect("uri");
        assert_eq!(proto.value, "");
    }

    #[test]
    fn empty_wire_strings_become_absent() {
        let back = proto::Uri::of("").to_hapi(&config()).expect("uri");
        assert_eq!(back.value, None);

        let back = proto::Base64Binary::default()
            .to_hapi(&config())
            .expect("bytes");
        assert_eq!(back.value, None);
    }

    #[test]
    fn scalars_always_produce_values() {
        let back = proto::Boolean::default().to_hapi(&config()).expect("boolean");
        assert_eq!(back.value, Some(false));

        let back = proto::Integer::of(0).to_hapi(&config()).expect("integer");
        assert_eq!(back, IntegerType::new(0));
    }

    #[test]
    fn decimal_keeps_its_scale() {
        let value = Decimal::from_str("100.10").expect("decimal literal");
        let proto = DecimalType::new(value).to_proto(&config()).expect("to proto");
        assert_eq!(proto.value, "100.10");

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back.value.map(|v| v.to_string()).as_deref(), Some("100.10"));
    }

    #[test]
    fn malformed_decimal_is_rejected() {
        let err = proto::Decimal::of("12.3.4")
            .to_hapi(&config())
            .expect_err("malformed decimal");
        assert!(matches!(
            err,
            ConvertError::InvalidValue {
                datatype: "decimal",
                ..
            }
        ));
    }

    #[test]
    fn base64_binary_keeps_raw_bytes() {
        let bytes = vec![0u8, 159, 146, 150];
        let proto = Base64BinaryType::new(bytes.clone())
            .to_proto(&config())
            .expect("to proto");
        assert_eq!(proto.value, bytes);
        assert_eq!(
            proto.to_hapi(&config()).expect("to hapi").value,
            Some(bytes)
        );
    }

    macro_rules! round_trips {
        ($($name:ident: $hapi:ident($strategy:expr);)+) => {
            proptest! {
                $(
                    #[test]
                    fn $name(value in $strategy, id in proptest::option::of("[a-z0-9-]{1,8}")) {
                        let element = hapi::$hapi { id, ..hapi::$hapi::new(value) };
                        let proto = element.to_proto(&config()).expect("to proto");
                        prop_assert_eq!(proto.to_hapi(&config()).expect("to hapi"), element);
                    }
                )+
            }
        };
    }

    round_trips! {
        string_round_trips: StringType("[A-Za-z0-9 .:/-]{1,24}");
        boolean_round_trips: BooleanType(any::<bool>());
        integer_round_trips: IntegerType(any::<i32>());
        decimal_round_trips: DecimalType(
            (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
        );
        code_round_trips: CodeType("[a-z][a-z0-9-]{0,15}");
        uri_round_trips: UriType("urn:[a-z]{1,8}:[a-z0-9]{1,8}");
        url_round_trips: UrlType("https://[a-z]{1,12}\\.org/[a-z]{0,8}");
        oid_round_trips: OidType("urn:oid:[1-9](\\.[0-9]{1,4}){1,6}");
        uuid_round_trips: UuidType("urn:uuid:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}");
        canonical_round_trips: CanonicalType("http://[a-z]{1,8}\\.org/StructureDefinition/[a-z]{1,8}");
        markdown_round_trips: MarkdownType("[*_#A-Za-z0-9 ]{1,32}");
        base64_binary_round_trips: Base64BinaryType(proptest::collection::vec(any::<u8>(), 1..32));
        id_round_trips: IdType("[A-Za-z0-9.-]{1,64}");
        positive_int_round_trips: PositiveIntType(1..=u32::MAX);
        unsigned_int_round_trips: UnsignedIntType(any::<u32>());
    }

    proptest! {
        #[test]
        fn decimal_text_keeps_its_scale(mantissa in any::<i64>(), scale in 0u32..=10) {
            let decimal = DecimalType::new(Decimal::new(mantissa, scale));
            let proto = decimal.to_proto(&config()).expect("to proto");
            let back = proto.to_hapi(&config()).expect("to hapi");
            prop_assert_eq!(
                back.value.map(|value| value.to_string()),
                decimal.value.map(|value| value.to_string())
            );
        }
    }
}
