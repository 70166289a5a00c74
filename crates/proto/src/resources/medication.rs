use super::ContainedResource;
use crate::codes::MedicationStatusCode;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Ratio, Reference};
use crate::primitives::{Boolean, Code, DateTime, FhirString, Id, Uri};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Medication {
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
    pub code: Option<CodeableConcept>,
    #[prost(message, optional, tag = "12")]
    pub status: Option<MedicationStatusCode>,
    #[prost(message, optional, tag = "13")]
    pub manufacturer: Option<Reference>,
    #[prost(message, optional, tag = "14")]
    pub form: Option<CodeableConcept>,
    #[prost(message, optional, tag = "15")]
    pub amount: Option<Ratio>,
    #[prost(message, repeated, tag = "16")]
    pub ingredient: Vec<Ingredient>,
    #[prost(message, optional, tag = "17")]
    pub batch: Option<Batch>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ingredient {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub item: Option<ingredient::ItemX>,
    #[prost(message, optional, tag = "5")]
    pub is_active: Option<Boolean>,
    #[prost(message, optional, tag = "6")]
    pub strength: Option<Ratio>,
}

pub mod ingredient {
    /// `Medication.ingredient.item[x]`
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ItemX {
        #[prost(oneof = "item_x::Choice", tags = "1, 2")]
        pub choice: Option<item_x::Choice>,
    }

    pub mod item_x {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Choice {
            #[prost(message, tag = "1")]
            CodeableConcept(crate::datatypes::CodeableConcept),
            #[prost(message, tag = "2")]
            Reference(crate::datatypes::Reference),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub lot_number: Option<FhirString>,
    #[prost(message, optional, tag = "5")]
    pub expiration_date: Option<DateTime>,
}
