//! `Observation`, its backbone elements and its choice wrappers.

use super::ContainedResource;
use crate::codes::ObservationStatusCode;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Range, Reference,
    SimpleQuantity,
};
use crate::primitives::{Code, FhirString, Id, Instant, Uri};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Observation {
    #[prost(message, optional, tag = "1")]
    pub id: Option<Id>,
    #[prost(message, optional, tag = "2")]
    pub meta: Option<Meta>,
    #[prost(message, optional, tag = "3")]
    pub implicit_rules: Option<Uri>,
    #[prost(message, optional, tag = "4")]
    pub language: Option<Code>,
    #[prost(message, optional, tag = "5")]
    pub text: Option<Narrative>,
    #[prost(message, repeated, tag = "6")]
    pub contained: Vec<ContainedResource>,
    #[prost(message, repeated, tag = "8")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "9")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, repeated, tag = "10")]
    pub identifier: Vec<Identifier>,
    #[prost(message, repeated, tag = "11")]
    pub based_on: Vec<Reference>,
    #[prost(message, repeated, tag = "12")]
    pub part_of: Vec<Reference>,
    #[prost(message, optional, tag = "13")]
    pub status: Option<ObservationStatusCode>,
    #[prost(message, repeated, tag = "14")]
    pub category: Vec<CodeableConcept>,
    #[prost(message, optional, tag = "15")]
    pub code: Option<CodeableConcept>,
    #[prost(message, optional, tag = "16")]
    pub subject: Option<Reference>,
    #[prost(message, repeated, tag = "17")]
    pub focus: Vec<Reference>,
    #[prost(message, optional, tag = "18")]
    pub encounter: Option<Reference>,
    #[prost(message, optional, tag = "19")]
    pub effective: Option<EffectiveX>,
    #[prost(message, optional, tag = "20")]
    pub issued: Option<Instant>,
    #[prost(message, repeated, tag = "21")]
    pub performer: Vec<Reference>,
    #[prost(message, optional, tag = "22")]
    pub value: Option<ValueX>,
    #[prost(message, optional, tag = "23")]
    pub data_absent_reason: Option<CodeableConcept>,
    #[prost(message, repeated, tag = "24")]
    pub interpretation: Vec<CodeableConcept>,
    #[prost(message, repeated, tag = "25")]
    pub note: Vec<Annotation>,
    #[prost(message, optional, tag = "26")]
    pub body_site: Option<CodeableConcept>,
    #[prost(message, optional, tag = "27")]
    pub method: Option<CodeableConcept>,
    #[prost(message, optional, tag = "28")]
    pub specimen: Option<Reference>,
    #[prost(message, optional, tag = "29")]
    pub device: Option<Reference>,
    #[prost(message, repeated, tag = "30")]
    pub reference_range: Vec<ReferenceRange>,
    #[prost(message, repeated, tag = "31")]
    pub has_member: Vec<Reference>,
    #[prost(message, repeated, tag = "32")]
    pub derived_from: Vec<Reference>,
    #[prost(message, repeated, tag = "33")]
    pub component: Vec<Component>,
}

/// `Observation.effective[x]`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EffectiveX {
    #[prost(oneof = "effective_x::Choice", tags = "1, 2, 3, 4")]
    pub choice: Option<effective_x::Choice>,
}

pub mod effective_x {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(message, tag = "1")]
        DateTime(crate::primitives::DateTime),
        #[prost(message, tag = "2")]
        Period(crate::datatypes::Period),
        #[prost(message, tag = "3")]
        Timing(crate::datatypes::Timing),
        #[prost(message, tag = "4")]
        Instant(crate::primitives::Instant),
    }
}

/// `Observation.value[x]`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueX {
    #[prost(oneof = "value_x::Choice", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11")]
    pub choice: Option<value_x::Choice>,
}

/// Declares the `value[x]` choice shared by `Observation` and `Observation.component`.
macro_rules! observation_value_choice {
    () => {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Choice {
            #[prost(message, tag = "1")]
            Quantity(crate::datatypes::Quantity),
            #[prost(message, tag = "2")]
            CodeableConcept(crate::datatypes::CodeableConcept),
            #[prost(message, tag = "3")]
            StringValue(crate::primitives::FhirString),
            #[prost(message, tag = "4")]
            Boolean(crate::primitives::Boolean),
            #[prost(message, tag = "5")]
            Integer(crate::primitives::Integer),
            #[prost(message, tag = "6")]
            Range(crate::datatypes::Range),
            #[prost(message, tag = "7")]
            Ratio(crate::datatypes::Ratio),
            #[prost(message, tag = "8")]
            SampledData(crate::datatypes::SampledData),
            #[prost(message, tag = "9")]
            Time(crate::primitives::Time),
            #[prost(message, tag = "10")]
            DateTime(crate::primitives::DateTime),
            #[prost(message, tag = "11")]
            Period(crate::datatypes::Period),
        }
    };
}

pub mod value_x {
    observation_value_choice!();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReferenceRange {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub low: Option<SimpleQuantity>,
    #[prost(message, optional, tag = "5")]
    pub high: Option<SimpleQuantity>,
    #[prost(message, optional, tag = "6")]
    pub r#type: Option<CodeableConcept>,
    #[prost(message, repeated, tag = "7")]
    pub applies_to: Vec<CodeableConcept>,
    #[prost(message, optional, tag = "8")]
    pub age: Option<Range>,
    #[prost(message, optional, tag = "9")]
    pub text: Option<FhirString>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Component {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub code: Option<CodeableConcept>,
    #[prost(message, optional, tag = "5")]
    pub value: Option<component::ValueX>,
    #[prost(message, optional, tag = "6")]
    pub data_absent_reason: Option<CodeableConcept>,
    #[prost(message, repeated, tag = "7")]
    pub interpretation: Vec<CodeableConcept>,
    #[prost(message, repeated, tag = "8")]
    pub reference_range: Vec<ReferenceRange>,
}

pub mod component {
    /// `Observation.component.value[x]`
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValueX {
        #[prost(oneof = "value_x::Choice", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11")]
        pub choice: Option<value_x::Choice>,
    }

    pub mod value_x {
        observation_value_choice!();
    }
}
