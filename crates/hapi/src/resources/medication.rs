use super::Resource;
use crate::codes::MedicationStatus;
use crate::datatype::DataType;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Ratio, Reference};
use crate::enumeration::Enumeration;
use crate::primitive::{BooleanType, CodeType, StringType, UriType};
use crate::temporal::DateTimeType;
use serde::{Deserialize, Serialize};

/// Definition of a medication.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Medication {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<UriType>,
    pub language: Option<CodeType>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,

    pub identifier: Vec<Identifier>,
    pub code: Option<CodeableConcept>,
    pub status: Option<Enumeration<MedicationStatus>>,
    pub manufacturer: Option<Reference>,
    pub form: Option<CodeableConcept>,
    pub amount: Option<Ratio>,
    pub ingredient: Vec<MedicationIngredient>,
    pub batch: Option<MedicationBatch>,
}

/// Active or inactive ingredient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicationIngredient {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// `item[x]`: CodeableConcept or Reference.
    pub item: Option<DataType>,
    pub is_active: Option<BooleanType>,
    pub strength: Option<Ratio>,
}

/// Details about a packaged medication.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicationBatch {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub lot_number: Option<StringType>,
    pub expiration_date: Option<DateTimeType>,
}
