use super::Resource;
use crate::codes::{SubscriptionChannelType, SubscriptionStatus};
use crate::datatypes::{ContactPoint, Extension, Meta, Narrative};
use crate::enumeration::Enumeration;
use crate::primitive::{CodeType, StringType, UriType, UrlType};
use crate::temporal::InstantType;
use serde::{Deserialize, Serialize};

/// A server push subscription criteria.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscription {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<UriType>,
    pub language: Option<CodeType>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,

    pub status: Option<Enumeration<SubscriptionStatus>>,
    pub contact: Vec<ContactPoint>,
    pub end: Option<InstantType>,
    pub reason: Option<StringType>,
    pub criteria: Option<StringType>,
    pub error: Option<StringType>,
    pub channel: Option<SubscriptionChannel>,
}

/// The channel on which to report matches to the criteria.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionChannel {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: Option<Enumeration<SubscriptionChannelType>>,
    pub endpoint: Option<UrlType>,
    /// MIME type to send, or omit for no payload. Open value set.
    pub payload: Option<CodeType>,
    pub header: Vec<StringType>,
}
