use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::media::{created_x, CreatedX};

choice_type! {
    created_to_proto, created_to_hapi, "Media.created[x]", CreatedX, created_x {
        DateTime <=> DateTime,
        Period <=> Period,
    }
}

resource! {
    hapi::Media => proto::Media {
        identifier, based_on, part_of, status, r#type, modality, view, subject, encounter,
        issued, operator, reason_code, body_site, device_name, device, height, width, frames,
        duration, content, note;
        created: created_to_proto / created_to_hapi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConvertError, ConverterConfig, ToHapi, ToProto};
    use hapi::{
        Attachment, CodeType, DataType, DateTimeType, Enumeration, EventStatus, Media,
        Period, PositiveIntType,
    };
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    #[test]
    fn media_with_period_created_round_trips() {
        let media = Media {
            id: Some("photo-1".to_string()),
            status: Some(Enumeration::new(EventStatus::Completed)),
            created: Some(DataType::Period(Period {
                start: Some(DateTimeType::parse("2024-02-03T10:00:00Z").expect("start")),
                end: Some(DateTimeType::parse("2024-02-03T10:05:00Z").expect("end")),
                ..Period::default()
            })),
            height: Some(PositiveIntType::new(480u32)),
            width: Some(PositiveIntType::new(640u32)),
            content: Some(Attachment {
                content_type: Some(CodeType::new("image/jpeg")),
                ..Attachment::default()
            }),
            ..Media::default()
        };

        let proto = media.to_proto(&config()).expect("to proto");
        assert!(matches!(
            proto.created.as_ref().and_then(|c| c.choice.as_ref()),
            Some(created_x::Choice::Period(_))
        ));
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), media);
    }

    #[test]
    fn instant_is_not_a_created_type() {
        let media = Media {
            created: Some(DataType::Instant(
                hapi::InstantType::parse("2024-02-03T10:00:00Z").expect("instant"),
            )),
            ..Media::default()
        };
        assert_eq!(
            media.to_proto(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Media.created[x]",
                found: Some("instant"),
            })
        );
    }
}
