//! Resource messages.
//!
//! Common tags: `id = 1`, `meta = 2`, `implicit_rules = 3`, `language = 4`, `text = 5`,
//! `contained = 6`, `extension = 8`, `modifier_extension = 9`. Resource elements start at 10.
//! Backbone elements use `id = 1`, `extension = 2`, `modifier_extension = 3`, then 4 onwards.

pub mod media;
pub mod medication;
pub mod observation;
pub mod organization;
pub mod patient;
pub mod subscription;

pub use media::Media;
pub use medication::Medication;
pub use observation::Observation;
pub use organization::Organization;
pub use patient::Patient;
pub use subscription::Subscription;

/// A resource held inline by another resource.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainedResource {
    #[prost(oneof = "contained_resource::OneofResource", tags = "1, 2, 3, 4, 5, 6")]
    pub oneof_resource: Option<contained_resource::OneofResource>,
}

pub mod contained_resource {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum OneofResource {
        #[prost(message, tag = "1")]
        Patient(super::Patient),
        #[prost(message, tag = "2")]
        Organization(super::Organization),
        #[prost(message, tag = "3")]
        Observation(super::Observation),
        #[prost(message, tag = "4")]
        Medication(super::Medication),
        #[prost(message, tag = "5")]
        Media(super::Media),
        #[prost(message, tag = "6")]
        Subscription(super::Subscription),
    }
}
