//! Complex datatype messages.
//!
//! Every datatype starts with `id = 1` and `extension = 2`. Choice elements are wrapper
//! messages (`extension::ValueX`) holding a `oneof choice`.

use crate::codes::{
    AddressTypeCode, AddressUseCode, ContactPointSystemCode, ContactPointUseCode,
    DaysOfWeekCode, EventTimingCode, IdentifierUseCode, NameUseCode, NarrativeStatusCode,
    OperationParameterUseCode, QuantityComparatorCode, UnitsOfTimeCode,
};
use crate::primitives::{
    Base64Binary, Boolean, Canonical, Code, DateTime, Decimal, FhirString, Id, Instant, Integer,
    Markdown, PositiveInt, Time, UnsignedInt, Uri, Url, Xhtml,
};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Extension {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub url: Option<Uri>,
    #[prost(message, optional, tag = "4")]
    pub value: Option<extension::ValueX>,
}

pub mod extension {
    /// `Extension.value[x]`
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValueX {
        #[prost(
            oneof = "value_x::Choice",
            tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38"
        )]
        pub choice: Option<value_x::Choice>,
    }

    pub mod value_x {
        use crate::datatypes::*;
        use crate::primitives::*;

        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Choice {
            #[prost(message, tag = "1")]
            Base64Binary(Base64Binary),
            #[prost(message, tag = "2")]
            Boolean(Boolean),
            #[prost(message, tag = "3")]
            Canonical(Canonical),
            #[prost(message, tag = "4")]
            Code(Code),
            #[prost(message, tag = "5")]
            Date(Date),
            #[prost(message, tag = "6")]
            DateTime(DateTime),
            #[prost(message, tag = "7")]
            Decimal(Decimal),
            #[prost(message, tag = "8")]
            Id(Id),
            #[prost(message, tag = "9")]
            Instant(Instant),
            #[prost(message, tag = "10")]
            Integer(Integer),
            #[prost(message, tag = "11")]
            Markdown(Markdown),
            #[prost(message, tag = "12")]
            Oid(Oid),
            #[prost(message, tag = "13")]
            PositiveInt(PositiveInt),
            #[prost(message, tag = "14")]
            StringValue(FhirString),
            #[prost(message, tag = "15")]
            Time(Time),
            #[prost(message, tag = "16")]
            UnsignedInt(UnsignedInt),
            #[prost(message, tag = "17")]
            Uri(Uri),
            #[prost(message, tag = "18")]
            Url(Url),
            #[prost(message, tag = "19")]
            Uuid(Uuid),
            #[prost(message, tag = "20")]
            Address(Address),
            #[prost(message, tag = "21")]
            Age(Age),
            #[prost(message, tag = "22")]
            Annotation(Annotation),
            #[prost(message, tag = "23")]
            Attachment(Attachment),
            #[prost(message, tag = "24")]
            CodeableConcept(CodeableConcept),
            #[prost(message, tag = "25")]
            Coding(Coding),
            #[prost(message, tag = "26")]
            ContactPoint(ContactPoint),
            #[prost(message, tag = "27")]
            Duration(Duration),
            #[prost(message, tag = "28")]
            HumanName(HumanName),
            #[prost(message, tag = "29")]
            Identifier(Identifier),
            #[prost(message, tag = "30")]
            Period(Period),
            #[prost(message, tag = "31")]
            Quantity(Quantity),
            #[prost(message, tag = "32")]
            Range(Range),
            #[prost(message, tag = "33")]
            Ratio(Ratio),
            #[prost(message, tag = "34")]
            Reference(Reference),
            #[prost(message, tag = "35")]
            SampledData(SampledData),
            #[prost(message, tag = "36")]
            Timing(Timing),
            #[prost(message, tag = "37")]
            ParameterDefinition(ParameterDefinition),
            #[prost(message, tag = "38")]
            Meta(Meta),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coding {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub system: Option<Uri>,
    #[prost(message, optional, tag = "4")]
    pub version: Option<FhirString>,
    #[prost(message, optional, tag = "5")]
    pub code: Option<Code>,
    #[prost(message, optional, tag = "6")]
    pub display: Option<FhirString>,
    #[prost(message, optional, tag = "7")]
    pub user_selected: Option<Boolean>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeableConcept {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub coding: Vec<Coding>,
    #[prost(message, optional, tag = "4")]
    pub text: Option<FhirString>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Identifier {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub r#use: Option<IdentifierUseCode>,
    #[prost(message, optional, tag = "4")]
    pub r#type: Option<CodeableConcept>,
    #[prost(message, optional, tag = "5")]
    pub system: Option<Uri>,
    #[prost(message, optional, tag = "6")]
    pub value: Option<FhirString>,
    #[prost(message, optional, tag = "7")]
    pub period: Option<Period>,
    #[prost(message, optional, boxed, tag = "8")]
    pub assigner: Option<Box<Reference>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HumanName {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub r#use: Option<NameUseCode>,
    #[prost(message, optional, tag = "4")]
    pub text: Option<FhirString>,
    #[prost(message, optional, tag = "5")]
    pub family: Option<FhirString>,
    #[prost(message, repeated, tag = "6")]
    pub given: Vec<FhirString>,
    #[prost(message, repeated, tag = "7")]
    pub prefix: Vec<FhirString>,
    #[prost(message, repeated, tag = "8")]
    pub suffix: Vec<FhirString>,
    #[prost(message, optional, tag = "9")]
    pub period: Option<Period>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Address {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub r#use: Option<AddressUseCode>,
    #[prost(message, optional, tag = "4")]
    pub r#type: Option<AddressTypeCode>,
    #[prost(message, optional, tag = "5")]
    pub text: Option<FhirString>,
    #[prost(message, repeated, tag = "6")]
    pub line: Vec<FhirString>,
    #[prost(message, optional, tag = "7")]
    pub city: Option<FhirString>,
    #[prost(message, optional, tag = "8")]
    pub district: Option<FhirString>,
    #[prost(message, optional, tag = "9")]
    pub state: Option<FhirString>,
    #[prost(message, optional, tag = "10")]
    pub postal_code: Option<FhirString>,
    #[prost(message, optional, tag = "11")]
    pub country: Option<FhirString>,
    #[prost(message, optional, tag = "12")]
    pub period: Option<Period>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContactPoint {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub system: Option<ContactPointSystemCode>,
    #[prost(message, optional, tag = "4")]
    pub value: Option<FhirString>,
    #[prost(message, optional, tag = "5")]
    pub r#use: Option<ContactPointUseCode>,
    #[prost(message, optional, tag = "6")]
    pub rank: Option<PositiveInt>,
    #[prost(message, optional, tag = "7")]
    pub period: Option<Period>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Period {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub start: Option<DateTime>,
    #[prost(message, optional, tag = "4")]
    pub end: Option<DateTime>,
}

macro_rules! quantity_message {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct $name {
                #[prost(message, optional, tag = "1")]
                pub id: Option<FhirString>,
                #[prost(message, repeated, tag = "2")]
                pub extension: Vec<Extension>,
                #[prost(message, optional, tag = "3")]
                pub value: Option<Decimal>,
                #[prost(message, optional, tag = "4")]
                pub comparator: Option<QuantityComparatorCode>,
                #[prost(message, optional, tag = "5")]
                pub unit: Option<FhirString>,
                #[prost(message, optional, tag = "6")]
                pub system: Option<Uri>,
                #[prost(message, optional, tag = "7")]
                pub code: Option<Code>,
            }
        )+
    };
}

quantity_message! {
    Quantity;
    Duration;
    Age;
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleQuantity {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub value: Option<Decimal>,
    #[prost(message, optional, tag = "4")]
    pub unit: Option<FhirString>,
    #[prost(message, optional, tag = "5")]
    pub system: Option<Uri>,
    #[prost(message, optional, tag = "6")]
    pub code: Option<Code>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Range {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub low: Option<SimpleQuantity>,
    #[prost(message, optional, tag = "4")]
    pub high: Option<SimpleQuantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ratio {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub numerator: Option<Quantity>,
    #[prost(message, optional, tag = "4")]
    pub denominator: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Reference {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub reference: Option<FhirString>,
    #[prost(message, optional, tag = "4")]
    pub r#type: Option<Uri>,
    #[prost(message, optional, tag = "5")]
    pub identifier: Option<Identifier>,
    #[prost(message, optional, tag = "6")]
    pub display: Option<FhirString>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attachment {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub content_type: Option<Code>,
    #[prost(message, optional, tag = "4")]
    pub language: Option<Code>,
    #[prost(message, optional, tag = "5")]
    pub data: Option<Base64Binary>,
    #[prost(message, optional, tag = "6")]
    pub url: Option<Url>,
    #[prost(message, optional, tag = "7")]
    pub size: Option<UnsignedInt>,
    #[prost(message, optional, tag = "8")]
    pub hash: Option<Base64Binary>,
    #[prost(message, optional, tag = "9")]
    pub title: Option<FhirString>,
    #[prost(message, optional, tag = "10")]
    pub creation: Option<DateTime>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Annotation {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub author: Option<annotation::AuthorX>,
    #[prost(message, optional, tag = "4")]
    pub time: Option<DateTime>,
    #[prost(message, optional, tag = "5")]
    pub text: Option<Markdown>,
}

pub mod annotation {
    /// `Annotation.author[x]`
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AuthorX {
        #[prost(oneof = "author_x::Choice", tags = "1, 2")]
        pub choice: Option<author_x::Choice>,
    }

    pub mod author_x {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Choice {
            #[prost(message, tag = "1")]
            Reference(crate::datatypes::Reference),
            #[prost(message, tag = "2")]
            StringValue(crate::primitives::FhirString),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Meta {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub version_id: Option<Id>,
    #[prost(message, optional, tag = "4")]
    pub last_updated: Option<Instant>,
    #[prost(message, optional, tag = "5")]
    pub source: Option<Uri>,
    #[prost(message, repeated, tag = "6")]
    pub profile: Vec<Canonical>,
    #[prost(message, repeated, tag = "7")]
    pub security: Vec<Coding>,
    #[prost(message, repeated, tag = "8")]
    pub tag: Vec<Coding>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Narrative {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub status: Option<NarrativeStatusCode>,
    #[prost(message, optional, tag = "4")]
    pub div: Option<Xhtml>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SampledData {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub origin: Option<SimpleQuantity>,
    #[prost(message, optional, tag = "4")]
    pub period: Option<Decimal>,
    #[prost(message, optional, tag = "5")]
    pub factor: Option<Decimal>,
    #[prost(message, optional, tag = "6")]
    pub lower_limit: Option<Decimal>,
    #[prost(message, optional, tag = "7")]
    pub upper_limit: Option<Decimal>,
    #[prost(message, optional, tag = "8")]
    pub dimensions: Option<PositiveInt>,
    #[prost(message, optional, tag = "9")]
    pub data: Option<FhirString>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Timing {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, repeated, tag = "4")]
    pub event: Vec<DateTime>,
    #[prost(message, optional, tag = "5")]
    pub repeat: Option<timing::Repeat>,
    #[prost(message, optional, tag = "6")]
    pub code: Option<CodeableConcept>,
}

pub mod timing {
    use super::*;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Repeat {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FhirString>,
        #[prost(message, repeated, tag = "2")]
        pub extension: Vec<Extension>,
        #[prost(message, optional, tag = "3")]
        pub bounds: Option<repeat::BoundsX>,
        #[prost(message, optional, tag = "4")]
        pub count: Option<PositiveInt>,
        #[prost(message, optional, tag = "5")]
        pub count_max: Option<PositiveInt>,
        #[prost(message, optional, tag = "6")]
        pub duration: Option<Decimal>,
        #[prost(message, optional, tag = "7")]
        pub duration_max: Option<Decimal>,
        #[prost(message, optional, tag = "8")]
        pub duration_unit: Option<UnitsOfTimeCode>,
        #[prost(message, optional, tag = "9")]
        pub frequency: Option<PositiveInt>,
        #[prost(message, optional, tag = "10")]
        pub frequency_max: Option<PositiveInt>,
        #[prost(message, optional, tag = "11")]
        pub period: Option<Decimal>,
        #[prost(message, optional, tag = "12")]
        pub period_max: Option<Decimal>,
        #[prost(message, optional, tag = "13")]
        pub period_unit: Option<UnitsOfTimeCode>,
        #[prost(message, repeated, tag = "14")]
        pub day_of_week: Vec<DaysOfWeekCode>,
        #[prost(message, repeated, tag = "15")]
        pub time_of_day: Vec<Time>,
        #[prost(message, repeated, tag = "16")]
        pub when: Vec<EventTimingCode>,
        #[prost(message, optional, tag = "17")]
        pub offset: Option<UnsignedInt>,
    }

    pub mod repeat {
        /// `Timing.repeat.bounds[x]`
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct BoundsX {
            #[prost(oneof = "bounds_x::Choice", tags = "1, 2, 3")]
            pub choice: Option<bounds_x::Choice>,
        }

        pub mod bounds_x {
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Choice {
                #[prost(message, tag = "1")]
                Duration(crate::datatypes::Duration),
                #[prost(message, tag = "2")]
                Range(crate::datatypes::Range),
                #[prost(message, tag = "3")]
                Period(crate::datatypes::Period),
            }
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParameterDefinition {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, optional, tag = "3")]
    pub name: Option<Code>,
    #[prost(message, optional, tag = "4")]
    pub r#use: Option<OperationParameterUseCode>,
    #[prost(message, optional, tag = "5")]
    pub min: Option<Integer>,
    #[prost(message, optional, tag = "6")]
    pub max: Option<FhirString>,
    #[prost(message, optional, tag = "7")]
    pub documentation: Option<FhirString>,
    #[prost(message, optional, tag = "8")]
    pub r#type: Option<Code>,
    #[prost(message, optional, tag = "9")]
    pub profile: Option<Canonical>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prost::Message;

    #[test]
    fn extension_choice_round_trips_through_bytes() {
        let ext = Extension {
            url: Some(Uri::of("http://example.org/ext")),
            value: Some(extension::ValueX {
                choice: Some(extension::value_x::Choice::Reference(Reference {
                    reference: Some(FhirString::of("Patient/1")),
                    ..Default::default()
                })),
            }),
            ..Default::default()
        };

        let decoded = Extension::decode(ext.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded, ext);
        assert!(matches!(
            decoded.value.and_then(|v| v.choice),
            Some(extension::value_x::Choice::Reference(_))
        ));
    }

    #[test]
    fn identifier_assigner_recursion_encodes() {
        let identifier = Identifier {
            value: Some(FhirString::of("123")),
            assigner: Some(Box::new(Reference {
                identifier: Some(Identifier {
                    value: Some(FhirString::of("org-9")),
                    ..Default::default()
                }),
                ..Default::default()
            })),
            ..Default::default()
        };
        let decoded = Identifier::decode(identifier.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded, identifier);
    }

    #[test]
    fn zero_valued_choice_is_still_populated() {
        let bounds = timing::repeat::BoundsX {
            choice: Some(timing::repeat::bounds_x::Choice::Duration(Duration::default())),
        };
        let decoded =
            timing::repeat::BoundsX::decode(bounds.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded, bounds);
    }
}
