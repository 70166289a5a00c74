//! The open sum type used for choice (`[x]`) elements.

use crate::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Duration,
    HumanName, Identifier, Meta, ParameterDefinition, Period, Quantity, Range, Ratio, Reference,
    SampledData, Timing,
};
use crate::primitive::{
    Base64BinaryType, BooleanType, CanonicalType, CodeType, DecimalType, IdType, IntegerType,
    MarkdownType, OidType, PositiveIntType, StringType, UnsignedIntType, UriType, UrlType,
    UuidType,
};
use crate::temporal::{DateTimeType, DateType, InstantType, TimeType};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! data_type {
    ($($variant:ident($ty:ty) => $fhir:literal as $key:literal,)+) => {
        /// A value of any datatype that may appear in a choice element.
        ///
        /// In YAML the variant is written as a single-key map named after the FHIR type,
        /// for example `{ boolean: true }` or `{ reference: { reference: Patient/1 } }`.
        #[derive(Clone, Debug, PartialEq)]
        pub enum DataType {
            $($variant($ty),)+
        }

        impl DataType {
            /// FHIR type name of the held value (`boolean`, `Reference`, ...).
            pub fn fhir_type(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $fhir,)+
                }
            }
        }

        const YAML_KEYS: &[&str] = &[$($key),+];

        impl Serialize for DataType {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(1))?;
                match self {
                    $(Self::$variant(value) => map.serialize_entry($key, value)?,)+
                }
                map.end()
            }
        }

        impl<'de> Visitor<'de> for DataTypeVisitor {
            type Value = DataType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a single-key map naming the value's FHIR type")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let key: String = map
                    .next_key()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let value = match key.as_str() {
                    $($key => DataType::$variant(map.next_value()?),)+
                    other => return Err(de::Error::unknown_variant(other, YAML_KEYS)),
                };
                if map.next_key::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(value)
            }
        }
    };
}

struct DataTypeVisitor;

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DataTypeVisitor)
    }
}

data_type! {
    Base64Binary(Base64BinaryType) => "base64Binary" as "base64Binary",
    Boolean(BooleanType) => "boolean" as "boolean",
    Canonical(CanonicalType) => "canonical" as "canonical",
    Code(CodeType) => "code" as "code",
    Date(DateType) => "date" as "date",
    DateTime(DateTimeType) => "dateTime" as "dateTime",
    Decimal(DecimalType) => "decimal" as "decimal",
    Id(IdType) => "id" as "id",
    Instant(InstantType) => "instant" as "instant",
    Integer(IntegerType) => "integer" as "integer",
    Markdown(MarkdownType) => "markdown" as "markdown",
    Oid(OidType) => "oid" as "oid",
    PositiveInt(PositiveIntType) => "positiveInt" as "positiveInt",
    String(StringType) => "string" as "string",
    Time(TimeType) => "time" as "time",
    UnsignedInt(UnsignedIntType) => "unsignedInt" as "unsignedInt",
    Uri(UriType) => "uri" as "uri",
    Url(UrlType) => "url" as "url",
    Uuid(UuidType) => "uuid" as "uuid",
    Address(Address) => "Address" as "address",
    Age(Age) => "Age" as "age",
    Annotation(Box<Annotation>) => "Annotation" as "annotation",
    Attachment(Attachment) => "Attachment" as "attachment",
    CodeableConcept(CodeableConcept) => "CodeableConcept" as "codeableConcept",
    Coding(Coding) => "Coding" as "coding",
    ContactPoint(ContactPoint) => "ContactPoint" as "contactPoint",
    Duration(Duration) => "Duration" as "duration",
    HumanName(HumanName) => "HumanName" as "humanName",
    Identifier(Identifier) => "Identifier" as "identifier",
    Period(Period) => "Period" as "period",
    Quantity(Quantity) => "Quantity" as "quantity",
    Range(Range) => "Range" as "range",
    Ratio(Ratio) => "Ratio" as "ratio",
    Reference(Reference) => "Reference" as "reference",
    SampledData(SampledData) => "SampledData" as "sampledData",
    Timing(Box<Timing>) => "Timing" as "timing",
    ParameterDefinition(ParameterDefinition) => "ParameterDefinition" as "parameterDefinition",
    Meta(Meta) => "Meta" as "meta",
}

macro_rules! from_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for DataType {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

from_value! {
    Base64BinaryType => Base64Binary,
    BooleanType => Boolean,
    CanonicalType => Canonical,
    CodeType => Code,
    DateType => Date,
    DateTimeType => DateTime,
    DecimalType => Decimal,
    IdType => Id,
    InstantType => Instant,
    IntegerType => Integer,
    MarkdownType => Markdown,
    OidType => Oid,
    PositiveIntType => PositiveInt,
    StringType => String,
    TimeType => Time,
    UnsignedIntType => UnsignedInt,
    UriType => Uri,
    UrlType => Url,
    UuidType => Uuid,
    Address => Address,
    Age => Age,
    Box<Annotation> => Annotation,
    Attachment => Attachment,
    CodeableConcept => CodeableConcept,
    Coding => Coding,
    ContactPoint => ContactPoint,
    Duration => Duration,
    HumanName => HumanName,
    Identifier => Identifier,
    Period => Period,
    Quantity => Quantity,
    Range => Range,
    Ratio => Ratio,
    Reference => Reference,
    SampledData => SampledData,
    Box<Timing> => Timing,
    ParameterDefinition => ParameterDefinition,
    Meta => Meta,
}

impl From<Annotation> for DataType {
    fn from(value: Annotation) -> Self {
        Self::Annotation(Box::new(value))
    }
}

impl From<Timing> for DataType {
    fn from(value: Timing) -> Self {
        Self::Timing(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yaml_variant_names_match_fhir_types() {
        let value: DataType = serde_yaml::from_str("dateTime: '2020-01-01'").expect("parse");
        assert_eq!(value.fhir_type(), "dateTime");

        let value: DataType =
            serde_yaml::from_str("reference:\n  reference: Patient/1\n").expect("parse");
        assert_eq!(value, DataType::Reference(Reference::new("Patient/1")));
        assert_eq!(value.fhir_type(), "Reference");
    }

    #[test]
    fn boxed_variants_convert_from_unboxed_values() {
        let value = DataType::from(Timing::default());
        assert!(matches!(value, DataType::Timing(_)));
        assert_eq!(value.fhir_type(), "Timing");
    }

    #[test]
    fn renders_as_single_key_map_and_reparses() {
        let value = DataType::Boolean(BooleanType::new(false));
        let text = serde_yaml::to_string(&value).expect("render");
        assert_eq!(text.trim(), "boolean: false");
        assert_eq!(serde_yaml::from_str::<DataType>(&text).expect("reparse"), value);

        let value = DataType::from(Annotation {
            text: Some(MarkdownType::new("Seen")),
            ..Annotation::default()
        });
        let text = serde_yaml::to_string(&value).expect("render");
        assert!(!text.contains('!'), "{text}");
        assert_eq!(serde_yaml::from_str::<DataType>(&text).expect("reparse"), value);
    }

    #[test]
    fn decimal_choice_keeps_scale() {
        let value: DataType = serde_yaml::from_str("decimal: 98.60").expect("parse");
        match value {
            DataType::Decimal(decimal) => assert_eq!(
                decimal.value.map(|d| d.to_string()).as_deref(),
                Some("98.60")
            ),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn unknown_and_multiple_keys_are_rejected() {
        assert!(serde_yaml::from_str::<DataType>("colour: red").is_err());
        assert!(serde_yaml::from_str::<DataType>("boolean: true\nstring: x\n").is_err());
        assert!(serde_yaml::from_str::<DataType>("{}").is_err());
    }
}
