//! `Patient` and its backbone elements.

use super::ContainedResource;
use crate::codes::{AdministrativeGenderCode, LinkTypeCode};
use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::primitives::{Boolean, Code, Date, FhirString, Id, Uri};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Patient {
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
    pub name: Vec<HumanName>,
    #[prost(message, repeated, tag = "13")]
    pub telecom: Vec<ContactPoint>,
    #[prost(message, optional, tag = "14")]
    pub gender: Option<AdministrativeGenderCode>,
    #[prost(message, optional, tag = "15")]
    pub birth_date: Option<Date>,
    #[prost(message, optional, tag = "16")]
    pub deceased: Option<DeceasedX>,
    #[prost(message, repeated, tag = "17")]
    pub address: Vec<Address>,
    #[prost(message, optional, tag = "18")]
    pub marital_status: Option<CodeableConcept>,
    #[prost(message, optional, tag = "19")]
    pub multiple_birth: Option<MultipleBirthX>,
    #[prost(message, repeated, tag = "20")]
    pub photo: Vec<Attachment>,
    #[prost(message, repeated, tag = "21")]
    pub contact: Vec<Contact>,
    #[prost(message, repeated, tag = "22")]
    pub communication: Vec<Communication>,
    #[prost(message, repeated, tag = "23")]
    pub general_practitioner: Vec<Reference>,
    #[prost(message, optional, tag = "24")]
    pub managing_organization: Option<Reference>,
    #[prost(message, repeated, tag = "25")]
    pub link: Vec<Link>,
}

/// `Patient.deceased[x]`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeceasedX {
    #[prost(oneof = "deceased_x::Choice", tags = "1, 2")]
    pub choice: Option<deceased_x::Choice>,
}

pub mod deceased_x {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(message, tag = "1")]
        Boolean(crate::primitives::Boolean),
        #[prost(message, tag = "2")]
        DateTime(crate::primitives::DateTime),
    }
}

/// `Patient.multipleBirth[x]`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultipleBirthX {
    #[prost(oneof = "multiple_birth_x::Choice", tags = "1, 2")]
    pub choice: Option<multiple_birth_x::Choice>,
}

pub mod multiple_birth_x {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(message, tag = "1")]
        Boolean(crate::primitives::Boolean),
        #[prost(message, tag = "2")]
        Integer(crate::primitives::Integer),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Contact {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, repeated, tag = "4")]
    pub relationship: Vec<CodeableConcept>,
    #[prost(message, optional, tag = "5")]
    pub name: Option<HumanName>,
    #[prost(message, repeated, tag = "6")]
    pub telecom: Vec<ContactPoint>,
    #[prost(message, optional, tag = "7")]
    pub address: Option<Address>,
    #[prost(message, optional, tag = "8")]
    pub gender: Option<AdministrativeGenderCode>,
    #[prost(message, optional, tag = "9")]
    pub organization: Option<Reference>,
    #[prost(message, optional, tag = "10")]
    pub period: Option<Period>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Communication {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub language: Option<CodeableConcept>,
    #[prost(message, optional, tag = "5")]
    pub preferred: Option<Boolean>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Link {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub other: Option<Reference>,
    #[prost(message, optional, tag = "5")]
    pub r#type: Option<LinkTypeCode>,
}
