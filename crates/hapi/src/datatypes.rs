//! Complex datatypes.
//!
//! Field names follow FHIR element names in snake case; `use` and `type` are written as raw
//! identifiers. Choice elements hold a [`DataType`].

use crate::codes::{
    AddressType, AddressUse, ContactPointSystem, ContactPointUse, DaysOfWeek, EventTiming,
    IdentifierUse, NameUse, NarrativeStatus, OperationParameterUse, QuantityComparator,
    UnitsOfTime,
};
use crate::datatype::DataType;
use crate::enumeration::Enumeration;
use crate::primitive::{
    Base64BinaryType, BooleanType, CanonicalType, CodeType, DecimalType, IdType, IntegerType,
    MarkdownType, PositiveIntType, StringType, UnsignedIntType, UriType, UrlType,
};
use crate::temporal::{DateTimeType, InstantType, TimeType};
use serde::{Deserialize, Serialize};

/// Additional content defined by implementations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extension {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Identifies the meaning of the extension.
    pub url: Option<String>,
    /// `value[x]`
    pub value: Option<DataType>,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: impl Into<DataType>) -> Self {
        Self {
            url: Some(url.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// A reference to a code defined by a terminology system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coding {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub system: Option<UriType>,
    pub version: Option<StringType>,
    pub code: Option<CodeType>,
    pub display: Option<StringType>,
    pub user_selected: Option<BooleanType>,
}

/// Concept, as defined by codings and/or text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeableConcept {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub coding: Vec<Coding>,
    pub text: Option<StringType>,
}

/// An identifier intended for computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identifier {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#use: Option<Enumeration<IdentifierUse>>,
    pub r#type: Option<CodeableConcept>,
    pub system: Option<UriType>,
    pub value: Option<StringType>,
    pub period: Option<Period>,
    /// Organization that issued the identifier.
    pub assigner: Option<Box<Reference>>,
}

/// Name of a human or other living entity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HumanName {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#use: Option<Enumeration<NameUse>>,
    pub text: Option<StringType>,
    pub family: Option<StringType>,
    pub given: Vec<StringType>,
    pub prefix: Vec<StringType>,
    pub suffix: Vec<StringType>,
    pub period: Option<Period>,
}

/// A postal or physical address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#use: Option<Enumeration<AddressUse>>,
    pub r#type: Option<Enumeration<AddressType>>,
    pub text: Option<StringType>,
    pub line: Vec<StringType>,
    pub city: Option<StringType>,
    pub district: Option<StringType>,
    pub state: Option<StringType>,
    pub postal_code: Option<StringType>,
    pub country: Option<StringType>,
    pub period: Option<Period>,
}

/// Details of a technology-mediated contact point (phone, email, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPoint {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub system: Option<Enumeration<ContactPointSystem>>,
    pub value: Option<StringType>,
    pub r#use: Option<Enumeration<ContactPointUse>>,
    pub rank: Option<PositiveIntType>,
    pub period: Option<Period>,
}

/// Time range defined by start and end date/time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Period {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub start: Option<DateTimeType>,
    pub end: Option<DateTimeType>,
}

/// Declare a quantity profile. All of them share the `Quantity` shape.
macro_rules! quantity_type {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
            #[serde(default, rename_all = "camelCase")]
            pub struct $name {
                pub id: Option<String>,
                pub extension: Vec<Extension>,
                pub value: Option<DecimalType>,
                pub comparator: Option<Enumeration<QuantityComparator>>,
                pub unit: Option<StringType>,
                pub system: Option<UriType>,
                pub code: Option<CodeType>,
            }
        )+
    };
}

quantity_type! {
    /// A measured amount.
    Quantity;
    /// A length of time.
    Duration;
    /// A duration of time during which an organism has existed.
    Age;
}

/// A fixed quantity: no comparator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimpleQuantity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<DecimalType>,
    pub unit: Option<StringType>,
    pub system: Option<UriType>,
    pub code: Option<CodeType>,
}

/// Set of values bounded by low and high.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Range {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
}

/// A ratio of two quantities.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ratio {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}

/// A reference from one resource to another.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Literal reference, relative, internal or absolute URL.
    pub reference: Option<StringType>,
    /// Type the reference refers to (e.g. `Patient`).
    pub r#type: Option<UriType>,
    pub identifier: Option<Identifier>,
    pub display: Option<StringType>,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(StringType::new(reference.into())),
            ..Self::default()
        }
    }
}

/// Content in a format defined elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub content_type: Option<CodeType>,
    pub language: Option<CodeType>,
    pub data: Option<Base64BinaryType>,
    pub url: Option<UrlType>,
    pub size: Option<UnsignedIntType>,
    pub hash: Option<Base64BinaryType>,
    pub title: Option<StringType>,
    pub creation: Option<DateTimeType>,
}

/// Text note with attribution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Annotation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// `author[x]`: Reference or string.
    pub author: Option<DataType>,
    pub time: Option<DateTimeType>,
    pub text: Option<MarkdownType>,
}

/// Metadata about a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub version_id: Option<IdType>,
    pub last_updated: Option<InstantType>,
    pub source: Option<UriType>,
    pub profile: Vec<CanonicalType>,
    pub security: Vec<Coding>,
    pub tag: Vec<Coding>,
}

/// Human-readable summary of a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Narrative {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub status: Option<Enumeration<NarrativeStatus>>,
    /// XHTML content. Not carried across the wire model.
    pub div: Option<String>,
}

/// A series of measurements taken by a device.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SampledData {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub origin: Option<SimpleQuantity>,
    pub period: Option<DecimalType>,
    pub factor: Option<DecimalType>,
    pub lower_limit: Option<DecimalType>,
    pub upper_limit: Option<DecimalType>,
    pub dimensions: Option<PositiveIntType>,
    pub data: Option<StringType>,
}

/// A timing schedule that specifies an event that may occur multiple times.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub event: Vec<DateTimeType>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
}

/// When the event is to occur.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingRepeat {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// `bounds[x]`: Duration, Range or Period.
    pub bounds: Option<DataType>,
    pub count: Option<PositiveIntType>,
    pub count_max: Option<PositiveIntType>,
    pub duration: Option<DecimalType>,
    pub duration_max: Option<DecimalType>,
    pub duration_unit: Option<Enumeration<UnitsOfTime>>,
    pub frequency: Option<PositiveIntType>,
    pub frequency_max: Option<PositiveIntType>,
    pub period: Option<DecimalType>,
    pub period_max: Option<DecimalType>,
    pub period_unit: Option<Enumeration<UnitsOfTime>>,
    pub day_of_week: Vec<Enumeration<DaysOfWeek>>,
    pub time_of_day: Vec<TimeType>,
    pub when: Vec<Enumeration<EventTiming>>,
    pub offset: Option<UnsignedIntType>,
}

/// Definition of a parameter to a module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub name: Option<CodeType>,
    pub r#use: Option<Enumeration<OperationParameterUse>>,
    pub min: Option<IntegerType>,
    pub max: Option<StringType>,
    pub documentation: Option<StringType>,
    /// Type of the parameter. Not carried across the wire model.
    pub r#type: Option<CodeType>,
    pub profile: Option<CanonicalType>,
}
