//! Complex datatype converters.
//!
//! Most datatypes convert element by element through [`composite!`]. The hand-written impls
//! below cover the elements that need more than delegation: choice elements, boxed
//! references, and the fields the wire model does not carry (`Narrative.div`,
//! `ParameterDefinition.type`).

use crate::primitives::{element_id_to_hapi, element_id_to_proto};
use crate::{ConvertResult, ConverterConfig, ToHapi, ToProto};
use fhir_hapi as hapi;
use fhir_proto as proto;

/// Declare the converter pair for an element whose fields all delegate.
///
/// The element `id` is handled here; every other field is listed and converted with
/// `to_proto` / `to_hapi`. Choice fields follow a `;` as `field: to_proto_fn / to_hapi_fn`,
/// naming the pair generated by `choice_type!`.
macro_rules! composite {
    (
        @impl $hapi:path => $proto:path, $id_to_proto:path, $id_to_hapi:path,
        { $($field:ident),+ }
        { $($choice:ident: $choice_to_proto:ident / $choice_to_hapi:ident),* }
    ) => {
        impl $crate::ToProto for $hapi {
            type Output = $proto;

            fn to_proto(
                &self,
                config: &$crate::ConverterConfig,
            ) -> $crate::ConvertResult<Self::Output> {
                type Target = $proto;

                Ok(Target {
                    id: $id_to_proto(&self.id),
                    $($field: $crate::ToProto::to_proto(&self.$field, config)?,)+
                    $($choice: self
                        .$choice
                        .as_ref()
                        .map(|value| $choice_to_proto(value, config))
                        .transpose()?,)*
                })
            }
        }

        impl $crate::ToHapi for $proto {
            type Output = $hapi;

            fn to_hapi(
                &self,
                config: &$crate::ConverterConfig,
            ) -> $crate::ConvertResult<Self::Output> {
                type Target = $hapi;

                Ok(Target {
                    id: $id_to_hapi(self.id.as_ref()),
                    $($field: $crate::ToHapi::to_hapi(&self.$field, config)?,)+
                    $($choice: self
                        .$choice
                        .as_ref()
                        .map(|value| $choice_to_hapi(value, config))
                        .transpose()?,)*
                })
            }
        }
    };
    ($(
        $hapi:path => $proto:path {
            $($field:ident),+ $(,)?
            $(; $($choice:ident: $choice_to_proto:ident / $choice_to_hapi:ident),+ $(,)?)?
        }
    )+) => {
        $(
            composite!(
                @impl $hapi => $proto,
                $crate::primitives::element_id_to_proto,
                $crate::primitives::element_id_to_hapi,
                { $($field),+ }
                { $($($choice: $choice_to_proto / $choice_to_hapi),+)? }
            );
        )+
    };
}

mod extension;
mod quantity;
mod timing;

composite! {
    hapi::Coding => proto::Coding {
        extension, system, version, code, display, user_selected,
    }
    hapi::CodeableConcept => proto::CodeableConcept {
        extension, coding, text,
    }
    hapi::HumanName => proto::HumanName {
        extension, r#use, text, family, given, prefix, suffix, period,
    }
    hapi::Address => proto::Address {
        extension, r#use, r#type, text, line, city, district, state, postal_code, country,
        period,
    }
    hapi::ContactPoint => proto::ContactPoint {
        extension, system, value, r#use, rank, period,
    }
    hapi::Period => proto::Period {
        extension, start, end,
    }
    hapi::Reference => proto::Reference {
        extension, reference, r#type, identifier, display,
    }
    hapi::Attachment => proto::Attachment {
        extension, content_type, language, data, url, size, hash, title, creation,
    }
    hapi::Meta => proto::Meta {
        extension, version_id, last_updated, source, profile, security, tag,
    }
}

impl ToProto for hapi::Identifier {
    type Output = proto::Identifier;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        let assigner = match &self.assigner {
            Some(assigner) => Some(Box::new(assigner.to_proto(config)?)),
            None => None,
        };

        Ok(proto::Identifier {
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
            r#use: self.r#use.to_proto(config)?,
            r#type: self.r#type.to_proto(config)?,
            system: self.system.to_proto(config)?,
            value: self.value.to_proto(config)?,
            period: self.period.to_proto(config)?,
            assigner,
        })
    }
}

impl ToHapi for proto::Identifier {
    type Output = hapi::Identifier;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        let assigner = match &self.assigner {
            Some(assigner) => Some(Box::new(assigner.to_hapi(config)?)),
            None => None,
        };

        Ok(hapi::Identifier {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            r#use: self.r#use.to_hapi(config)?,
            r#type: self.r#type.to_hapi(config)?,
            system: self.system.to_hapi(config)?,
            value: self.value.to_hapi(config)?,
            period: self.period.to_hapi(config)?,
            assigner,
        })
    }
}

use proto::annotation::{author_x, AuthorX};

choice_type! {
    author_to_proto, author_to_hapi, "Annotation.author[x]", AuthorX, author_x {
        Reference <=> Reference,
        String <=> StringValue,
    }
}

composite! {
    hapi::Annotation => proto::Annotation {
        extension, time, text;
        author: author_to_proto / author_to_hapi,
    }
}

// `div` is not carried in either direction.
impl ToProto for hapi::Narrative {
    type Output = proto::Narrative;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::Narrative {
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
            status: self.status.to_proto(config)?,
            div: None,
        })
    }
}

impl ToHapi for proto::Narrative {
    type Output = hapi::Narrative;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(hapi::Narrative {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            status: self.status.to_hapi(config)?,
            div: None,
        })
    }
}

// `type` is not carried in either direction.
impl ToProto for hapi::ParameterDefinition {
    type Output = proto::ParameterDefinition;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::ParameterDefinition {
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
            name: self.name.to_proto(config)?,
            r#use: self.r#use.to_proto(config)?,
            min: self.min.to_proto(config)?,
            max: self.max.to_proto(config)?,
            documentation: self.documentation.to_proto(config)?,
            r#type: None,
            profile: self.profile.to_proto(config)?,
        })
    }
}

impl ToHapi for proto::ParameterDefinition {
    type Output = hapi::ParameterDefinition;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(hapi::ParameterDefinition {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            name: self.name.to_hapi(config)?,
            r#use: self.r#use.to_hapi(config)?,
            min: self.min.to_hapi(config)?,
            max: self.max.to_hapi(config)?,
            documentation: self.documentation.to_hapi(config)?,
            r#type: None,
            profile: self.profile.to_hapi(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoicePolicy, ConvertError};
    use hapi::{
        CodeType, DataType, Enumeration, IdentifierUse, MarkdownType,
        NarrativeStatus, StringType,
    };
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    #[test]
    fn identifier_with_assigner_round_trips() {
        let identifier = hapi::Identifier {
            r#use: Some(Enumeration::new(IdentifierUse::Official)),
            system: Some(hapi::UriType::new("https://fhir.nhs.uk/Id/nhs-number")),
            value: Some(StringType::new("9000000009")),
            assigner: Some(Box::new(hapi::Reference::new("Organization/1"))),
            ..hapi::Identifier::default()
        };

        let proto = identifier.to_proto(&config()).expect("to proto");
        assert_eq!(
            proto
                .assigner
                .as_ref()
                .and_then(|a| a.reference.as_ref())
                .map(|r| r.value.as_str()),
            Some("Organization/1")
        );
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), identifier);
    }

    #[test]
    fn reference_author_populates_only_the_reference_variant() {
        let annotation = hapi::Annotation {
            author: Some(DataType::Reference(hapi::Reference::new("Practitioner/7"))),
            text: Some(MarkdownType::new("Seen in clinic")),
            ..hapi::Annotation::default()
        };

        let proto = annotation.to_proto(&config()).expect("to proto");
        let choice = proto.author.as_ref().and_then(|a| a.choice.as_ref());
        assert!(matches!(choice, Some(author_x::Choice::Reference(_))));

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), annotation);
    }

    #[test]
    fn undeclared_author_type_follows_policy() {
        let annotation = hapi::Annotation {
            author: Some(DataType::Code(CodeType::new("x"))),
            ..hapi::Annotation::default()
        };

        assert_eq!(
            annotation.to_proto(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Annotation.author[x]",
                found: Some("code"),
            })
        );

        let lenient = ConverterConfig::new(ChoicePolicy::EmptyMessage);
        let proto = annotation.to_proto(&lenient).expect("lenient");
        assert_eq!(proto.author, Some(AuthorX::default()));
    }

    #[test]
    fn empty_author_wrapper_is_rejected() {
        let proto = proto::Annotation {
            author: Some(AuthorX::default()),
            ..proto::Annotation::default()
        };
        assert_eq!(
            proto.to_hapi(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Annotation.author[x]",
                found: None,
            })
        );
    }

    #[test]
    fn narrative_div_is_not_carried() {
        let narrative = hapi::Narrative {
            status: Some(Enumeration::new(NarrativeStatus::Generated)),
            div: Some("<div xmlns=\"http://www.w3.org/1999/xhtml\">Sarah</div>".to_string()),
            ..hapi::Narrative::default()
        };

        let proto = narrative.to_proto(&config()).expect("to proto");
        assert_eq!(proto.div, None);

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back.div, None);
        assert_eq!(back.status, narrative.status);
    }

    #[test]
    fn parameter_definition_type_is_not_carried() {
        let definition = hapi::ParameterDefinition {
            name: Some(CodeType::new("patient")),
            r#type: Some(CodeType::new("Patient")),
            ..hapi::ParameterDefinition::default()
        };
        let proto = definition.to_proto(&config()).expect("to proto");
        assert_eq!(proto.r#type, None);
        assert_eq!(proto.to_hapi(&config()).expect("to hapi").r#type, None);
    }

    #[test]
    fn coded_fields_inside_composites_convert() {
        let name = hapi::HumanName {
            r#use: Some(Enumeration::new(hapi::NameUse::Maiden)),
            family: Some(StringType::new("Taylor")),
            given: vec![StringType::new("Sarah"), StringType::new("Jane")],
            ..hapi::HumanName::default()
        };
        let proto = name.to_proto(&config()).expect("to proto");
        assert_eq!(proto.given.len(), 2);
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), name);
    }
}
