use super::ContainedResource;
use crate::codes::EventStatusCode;
use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::primitives::{Code, Decimal, FhirString, Id, Instant, PositiveInt, Uri};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Media {
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
    pub status: Option<EventStatusCode>,
    #[prost(message, optional, tag = "14")]
    pub r#type: Option<CodeableConcept>,
    #[prost(message, optional, tag = "15")]
    pub modality: Option<CodeableConcept>,
    #[prost(message, optional, tag = "16")]
    pub view: Option<CodeableConcept>,
    #[prost(message, optional, tag = "17")]
    pub subject: Option<Reference>,
    #[prost(message, optional, tag = "18")]
    pub encounter: Option<Reference>,
    #[prost(message, optional, tag = "19")]
    pub created: Option<CreatedX>,
    #[prost(message, optional, tag = "20")]
    pub issued: Option<Instant>,
    #[prost(message, optional, tag = "21")]
    pub operator: Option<Reference>,
    #[prost(message, repeated, tag = "22")]
    pub reason_code: Vec<CodeableConcept>,
    #[prost(message, optional, tag = "23")]
    pub body_site: Option<CodeableConcept>,
    #[prost(message, optional, tag = "24")]
    pub device_name: Option<FhirString>,
    #[prost(message, optional, tag = "25")]
    pub device: Option<Reference>,
    #[prost(message, optional, tag = "26")]
    pub height: Option<PositiveInt>,
    #[prost(message, optional, tag = "27")]
    pub width: Option<PositiveInt>,
    #[prost(message, optional, tag = "28")]
    pub frames: Option<PositiveInt>,
    #[prost(message, optional, tag = "29")]
    pub duration: Option<Decimal>,
    #[prost(message, optional, tag = "30")]
    pub content: Option<Attachment>,
    #[prost(message, repeated, tag = "31")]
    pub note: Vec<Annotation>,
}

/// `Media.created[x]`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatedX {
    #[prost(oneof = "created_x::Choice", tags = "1, 2")]
    pub choice: Option<created_x::Choice>,
}

pub mod created_x {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(message, tag = "1")]
        DateTime(crate::primitives::DateTime),
        #[prost(message, tag = "2")]
        Period(crate::datatypes::Period),
    }
}
