use super::ContainedResource;
use crate::codes::{SubscriptionChannelTypeCode, SubscriptionStatusCode};
use crate::datatypes::{ContactPoint, Extension, Meta, Narrative};
use crate::primitives::{Code, FhirString, Id, Instant, Uri, Url};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subscription {
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
    #[prost(message, optional, tag = "10")]
    pub status: Option<SubscriptionStatusCode>,
    #[prost(message, repeated, tag = "11")]
    pub contact: Vec<ContactPoint>,
    #[prost(message, optional, tag = "12")]
    pub end: Option<Instant>,
    #[prost(message, optional, tag = "13")]
    pub reason: Option<FhirString>,
    #[prost(message, optional, tag = "14")]
    pub criteria: Option<FhirString>,
    #[prost(message, optional, tag = "15")]
    pub error: Option<FhirString>,
    #[prost(message, optional, tag = "16")]
    pub channel: Option<Channel>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Channel {
    #[prost(message, optional, tag = "1")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "2")]
    pub extension: Vec<Extension>,
    #[prost(message, repeated, tag = "3")]
    pub modifier_extension: Vec<Extension>,
    #[prost(message, optional, tag = "4")]
    pub r#type: Option<SubscriptionChannelTypeCode>,
    #[prost(message, optional, tag = "5")]
    pub endpoint: Option<Url>,
    #[prost(message, optional, tag = "6")]
    pub payload: Option<Code>,
    #[prost(message, repeated, tag = "7")]
    pub header: Vec<FhirString>,
}
