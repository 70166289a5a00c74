use super::Resource;
use crate::codes::EventStatus;
use crate::datatype::DataType;
use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::enumeration::Enumeration;
use crate::primitive::{CodeType, DecimalType, PositiveIntType, StringType, UriType};
use crate::temporal::InstantType;
use serde::{Deserialize, Serialize};

/// A photo, video, or audio recording acquired or used in healthcare.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<UriType>,
    pub language: Option<CodeType>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,

    pub identifier: Vec<Identifier>,
    pub based_on: Vec<Reference>,
    pub part_of: Vec<Reference>,
    pub status: Option<Enumeration<EventStatus>>,
    pub r#type: Option<CodeableConcept>,
    pub modality: Option<CodeableConcept>,
    pub view: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    /// `created[x]`: dateTime or Period.
    pub created: Option<DataType>,
    pub issued: Option<InstantType>,
    pub operator: Option<Reference>,
    pub reason_code: Vec<CodeableConcept>,
    pub body_site: Option<CodeableConcept>,
    pub device_name: Option<StringType>,
    pub device: Option<Reference>,
    pub height: Option<PositiveIntType>,
    pub width: Option<PositiveIntType>,
    pub frames: Option<PositiveIntType>,
    pub duration: Option<DecimalType>,
    pub content: Option<Attachment>,
    pub note: Vec<Annotation>,
}
