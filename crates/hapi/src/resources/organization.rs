use super::Resource;
use crate::datatypes::{
    Address, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta, Narrative,
    Reference,
};
use crate::primitive::{BooleanType, CodeType, StringType, UriType};
use serde::{Deserialize, Serialize};

/// A formally or informally recognized grouping of people or organizations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
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
    pub r#type: Vec<CodeableConcept>,
    pub name: Option<StringType>,
    pub alias: Vec<StringType>,
    pub telecom: Vec<ContactPoint>,
    pub address: Vec<Address>,
    pub part_of: Option<Reference>,
    pub contact: Vec<OrganizationContact>,
    pub endpoint: Vec<Reference>,
}

/// Contact for the organization for a certain purpose.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationContact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub purpose: Option<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
}
