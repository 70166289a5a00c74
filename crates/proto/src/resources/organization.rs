use super::ContainedResource;
use crate::datatypes::{
    Address, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta, Narrative,
    Reference,
};
use crate::primitives::{Boolean, Code, FhirString, Id, Uri};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Organization {
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
    #[prost(message, optional, tag = "11")]
    pub active: Option<Boolean>,
    #[prost(message, repeated, tag = "12")]
    pub r#type: Vec<CodeableConcept>,
    #[prost(message, optional, tag = "13")]
    pub name: Option<FhirString>,
    #[prost(message, repeated, tag = "14")]
    pub alias: Vec<FhirString>,
    #[prost(message, repeated, tag = "15")]
    pub telecom: Vec<ContactPoint>,
    #[prost(message, repeated, tag = "16")]
    pub address: Vec<Address>,
    #[prost(message, optional, tag = "17")]
    pub part_of: Option<Reference>,
    #[prost(message, repeated, tag = "18")]
    pub contact: Vec<Contact>,
    #[prost(message, repeated, tag = "19")]
    pub endpoint: Vec<Reference>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Contact {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub purpose: Option<CodeableConcept>,
    #[prost(message, optional, tag = "5")]
    pub name: Option<HumanName>,
    #[prost(message, repeated, tag = "6")]
    pub telecom: Vec<ContactPoint>,
    #[prost(message, optional, tag = "7")]
    pub address: Option<Address>,
}
