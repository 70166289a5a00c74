//! Demographics and administrative information about a person receiving care.

use super::Resource;
use crate::codes::{AdministrativeGender, LinkType};
use crate::datatype::DataType;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::enumeration::Enumeration;
use crate::primitive::{BooleanType, CodeType, UriType};
use crate::temporal::DateType;
use serde::{Deserialize, Serialize};

/// A patient resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Patient {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<UriType>,
    pub language: Option<CodeType>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,

    pub identifier: Vec<Identifier>,
    pub active: Option<BooleanType>,
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub gender: Option<Enumeration<AdministrativeGender>>,
    pub birth_date: Option<DateType>,
    /// `deceased[x]`: boolean or dateTime.
    pub deceased: Option<DataType>,
    pub address: Vec<Address>,
    pub marital_status: Option<CodeableConcept>,
    /// `multipleBirth[x]`: boolean or integer.
    pub multiple_birth: Option<DataType>,
    pub photo: Vec<Attachment>,
    pub contact: Vec<PatientContact>,
    pub communication: Vec<PatientCommunication>,
    pub general_practitioner: Vec<Reference>,
    pub managing_organization: Option<Reference>,
    pub link: Vec<PatientLink>,
}

/// A contact party (guardian, partner, friend) for the patient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientContact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub relationship: Vec<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
    pub gender: Option<Enumeration<AdministrativeGender>>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
}

/// A language which may be used to communicate with the patient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientCommunication {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: Option<CodeableConcept>,
    pub preferred: Option<BooleanType>,
}

/// Link to another patient resource that concerns the same actual person.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientLink {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub other: Option<Reference>,
    pub r#type: Option<Enumeration<LinkType>>,
}
