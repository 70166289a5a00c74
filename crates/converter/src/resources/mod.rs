//! Resource converters.
//!
//! Resources share the `Resource`/`DomainResource` header, which [`resource!`] fills in
//! before the resource's own fields. The logical `id` is a plain string on the
//! business-object side and an `Id` message on the wire. Contained resources travel as a
//! [`ContainedResource`](proto::ContainedResource) oneof.

use crate::primitives::non_empty;
use crate::{ConvertResult, ConverterConfig, ToHapi, ToProto};
use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::contained_resource::OneofResource;

/// Declare the converter pair for a resource.
///
/// Header elements are converted for every resource; list the remaining fields and choice
/// fields as for `composite!`.
macro_rules! resource {
    (
        $hapi:path => $proto:path {
            $($field:ident),+ $(,)?
            $(; $($choice:ident: $choice_to_proto:ident / $choice_to_hapi:ident),+ $(,)?)?
        }
    ) => {
        composite!(
            @impl $hapi => $proto,
            $crate::resources::resource_id_to_proto,
            $crate::resources::resource_id_to_hapi,
            {
                meta, implicit_rules, language, text, contained, extension, modifier_extension,
                $($field),+
            }
            { $($($choice: $choice_to_proto / $choice_to_hapi),+)? }
        );
    };
}

mod media;
mod medication;
mod observation;
mod organization;
mod patient;
mod subscription;

pub(crate) fn resource_id_to_proto(id: &Option<String>) -> Option<proto::Id> {
    id.as_ref().map(proto::Id::of)
}

pub(crate) fn resource_id_to_hapi(id: Option<&proto::Id>) -> Option<String> {
    id.and_then(|id| non_empty(&id.value))
}

macro_rules! contained {
    ($($variant:ident),+) => {
        impl ToProto for hapi::Resource {
            type Output = proto::ContainedResource;

            fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                tracing::trace!(
                    resource_type = self.resource_type(),
                    id = self.id(),
                    "converting contained resource"
                );
                let resource = match self {
                    $(hapi::Resource::$variant(r) => OneofResource::$variant(r.to_proto(config)?),)+
                };
                Ok(proto::ContainedResource {
                    oneof_resource: Some(resource),
                })
            }
        }

        impl ToHapi for proto::ContainedResource {
            type Output = hapi::Resource;

            fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                match &self.oneof_resource {
                    $(Some(OneofResource::$variant(r)) => {
                        Ok(hapi::Resource::$variant(r.to_hapi(config)?))
                    })+
                    None => Err(crate::choice::unset("ContainedResource")),
                }
            }
        }
    };
}

contained!(Patient, Organization, Observation, Medication, Media, Subscription);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use hapi::{BooleanType, Organization, Patient, Reference, Resource, StringType};
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    #[test]
    fn contained_resources_keep_type_and_order() {
        let patient = Patient {
            id: Some("p1".to_string()),
            contained: vec![
                Resource::Organization(Organization {
                    id: Some("org-1".to_string()),
                    name: Some(StringType::new("Acme Health")),
                    ..Organization::default()
                }),
                Resource::Patient(Patient {
                    id: Some("p2".to_string()),
                    active: Some(BooleanType::new(false)),
                    ..Patient::default()
                }),
            ],
            managing_organization: Some(Reference::new("#org-1")),
            ..Patient::default()
        };

        let proto = patient.to_proto(&config()).expect("to proto");
        assert!(matches!(
            proto.contained[0].oneof_resource,
            Some(OneofResource::Organization(_))
        ));
        assert!(matches!(
            proto.contained[1].oneof_resource,
            Some(OneofResource::Patient(_))
        ));

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), patient);
    }

    #[test]
    fn empty_contained_resource_is_rejected() {
        assert_eq!(
            proto::ContainedResource::default().to_hapi(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "ContainedResource",
                found: None,
            })
        );
    }

    #[test]
    fn yaml_resource_survives_the_wire() {
        use prost::Message;

        let yaml = r#"
resourceType: Organization
id: org-1
name: Acme Health
contained:
  - resourceType: Subscription
    id: sub-1
    status: active
    channel:
      type: rest-hook
      endpoint: https://example.org/hook
"#;
        let resource: Resource = hapi::yaml::parse(yaml).expect("parse resource");

        let bytes = resource.to_proto(&config()).expect("to proto").encode_to_vec();
        let decoded = proto::ContainedResource::decode(bytes.as_slice()).expect("decode");
        assert_eq!(decoded.to_hapi(&config()).expect("to hapi"), resource);
    }

    #[test]
    fn empty_resource_id_becomes_absent() {
        assert_eq!(resource_id_to_hapi(Some(&proto::Id::of(""))), None);
        assert_eq!(
            resource_id_to_proto(&Some("abc".to_string())).map(|id| id.value),
            Some("abc".to_string())
        );
    }
}
