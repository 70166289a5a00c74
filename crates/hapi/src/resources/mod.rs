//! Resources.
//!
//! Every resource carries the common `Resource`/`DomainResource` elements (`id`, `meta`,
//! `implicitRules`, `language`, `text`, `contained`, `extension`, `modifierExtension`)
//! followed by its own elements.

pub mod media;
pub mod medication;
pub mod observation;
pub mod organization;
pub mod patient;
pub mod subscription;

pub use media::Media;
pub use medication::{Medication, MedicationBatch, MedicationIngredient};
pub use observation::{Observation, ObservationComponent, ObservationReferenceRange};
pub use organization::{Organization, OrganizationContact};
pub use patient::{Patient, PatientCommunication, PatientContact, PatientLink};
pub use subscription::{Subscription, SubscriptionChannel};

use serde::de::{self, value::MapAccessDeserializer, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Any supported resource, tagged by `resourceType`.
///
/// `resourceType` must be the first key when reading YAML; the remaining keys are read
/// straight into the named resource.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Patient(Patient),
    Organization(Organization),
    Observation(Observation),
    Medication(Medication),
    Media(Media),
    Subscription(Subscription),
}

impl Resource {
    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::Patient(_) => "Patient",
            Self::Organization(_) => "Organization",
            Self::Observation(_) => "Observation",
            Self::Medication(_) => "Medication",
            Self::Media(_) => "Media",
            Self::Subscription(_) => "Subscription",
        }
    }

    /// Logical id of the wrapped resource.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Patient(r) => r.id.as_deref(),
            Self::Organization(r) => r.id.as_deref(),
            Self::Observation(r) => r.id.as_deref(),
            Self::Medication(r) => r.id.as_deref(),
            Self::Media(r) => r.id.as_deref(),
            Self::Subscription(r) => r.id.as_deref(),
        }
    }
}

macro_rules! from_resource {
    ($($name:ident),+) => {
        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Self::$name(resource)
                }
            }
        )+
    };
}

from_resource!(Patient, Organization, Observation, Medication, Media, Subscription);

macro_rules! resource_visitor {
    ($($name:ident),+) => {
        const RESOURCE_TYPES: &[&str] = &[$(stringify!($name)),+];

        impl<'de> Visitor<'de> for ResourceVisitor {
            type Value = Resource;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a resource map starting with resourceType")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                match map.next_key::<String>()?.as_deref() {
                    Some("resourceType") => {}
                    Some(other) => {
                        return Err(de::Error::custom(format!(
                            "resourceType must be the first key of a resource, found '{other}'"
                        )))
                    }
                    None => return Err(de::Error::missing_field("resourceType")),
                }
                let resource_type: String = map.next_value()?;
                let rest = MapAccessDeserializer::new(map);
                match resource_type.as_str() {
                    $(stringify!($name) => $name::deserialize(rest).map(Resource::$name),)+
                    other => Err(de::Error::unknown_variant(other, RESOURCE_TYPES)),
                }
            }
        }
    };
}

struct ResourceVisitor;

resource_visitor!(Patient, Organization, Observation, Medication, Media, Subscription);

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ResourceVisitor)
    }
}
