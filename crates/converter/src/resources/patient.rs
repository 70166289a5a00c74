use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::patient::{deceased_x, multiple_birth_x, DeceasedX, MultipleBirthX};

choice_type! {
    deceased_to_proto, deceased_to_hapi, "Patient.deceased[x]", DeceasedX, deceased_x {
        Boolean <=> Boolean,
        DateTime <=> DateTime,
    }
}

choice_type! {
    multiple_birth_to_proto, multiple_birth_to_hapi, "Patient.multipleBirth[x]",
    MultipleBirthX, multiple_birth_x {
        Boolean <=> Boolean,
        Integer <=> Integer,
    }
}

resource! {
    hapi::Patient => proto::Patient {
        identifier, active, name, telecom, gender, birth_date, address, marital_status, photo,
        contact, communication, general_practitioner, managing_organization, link;
        deceased: deceased_to_proto / deceased_to_hapi,
        multiple_birth: multiple_birth_to_proto / multiple_birth_to_hapi,
    }
}

composite! {
    hapi::PatientContact => proto::patient::Contact {
        extension, modifier_extension, relationship, name, telecom, address, gender,
        organization, period,
    }
    hapi::PatientCommunication => proto::patient::Communication {
        extension, modifier_extension, language, preferred,
    }
    hapi::PatientLink => proto::patient::Link {
        extension, modifier_extension, other, r#type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoicePolicy, ConvertError, ConverterConfig, ToHapi, ToProto};
    use fhir_proto::{administrative_gender_code, link_type_code};
    use hapi::{
        AdministrativeGender, BooleanType, DataType, DateTimeType, DateType, Enumeration,
        HumanName, IntegerType, LinkType, Patient, PatientLink, Reference, StringType,
        TemporalPrecision,
    };
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    fn sarah() -> Patient {
        Patient {
            id: Some("90a8d1ea318041d9adb070a834d4e0f6".to_string()),
            active: Some(BooleanType::new(true)),
            name: vec![HumanName {
                family: Some(StringType::new("Taylor")),
                given: vec![StringType::new("Sarah")],
                ..HumanName::default()
            }],
            gender: Some(Enumeration::new(AdministrativeGender::Female)),
            birth_date: Some(DateType::parse("1984-06-14").expect("birth date")),
            deceased: Some(DataType::Boolean(BooleanType::new(false))),
            multiple_birth: Some(DataType::Integer(IntegerType::new(2))),
            link: vec![PatientLink {
                other: Some(Reference::new("Patient/old-1")),
                r#type: Some(Enumeration::new(LinkType::Replaces)),
                ..PatientLink::default()
            }],
            ..Patient::default()
        }
    }

    #[test]
    fn patient_round_trips() {
        let patient = sarah();
        let proto = patient.to_proto(&config()).expect("to proto");

        assert_eq!(
            proto.id.as_ref().map(|id| id.value.as_str()),
            Some("90a8d1ea318041d9adb070a834d4e0f6")
        );
        assert_eq!(
            proto.gender.as_ref().map(|g| g.value),
            Some(administrative_gender_code::Value::Female as i32)
        );
        assert_eq!(
            proto.birth_date.as_ref().map(|d| d.precision()),
            Some(proto::date::Precision::Day)
        );
        assert_eq!(
            proto.link[0].r#type.as_ref().map(|t| t.value),
            Some(link_type_code::Value::Replaces as i32)
        );

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back, patient);
        assert_eq!(
            back.birth_date.and_then(|d| d.precision),
            Some(TemporalPrecision::Day)
        );
    }

    #[test]
    fn deceased_date_time_selects_the_date_time_variant() {
        let patient = Patient {
            deceased: Some(DataType::DateTime(
                DateTimeType::parse("2023-11-02T10:15:00Z").expect("date time"),
            )),
            ..Patient::default()
        };
        let proto = patient.to_proto(&config()).expect("to proto");
        assert!(matches!(
            proto.deceased.as_ref().and_then(|d| d.choice.as_ref()),
            Some(deceased_x::Choice::DateTime(_))
        ));
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), patient);
    }

    #[test]
    fn undeclared_deceased_type_follows_policy() {
        let patient = Patient {
            deceased: Some(DataType::Reference(Reference::new("Patient/1"))),
            ..Patient::default()
        };

        assert_eq!(
            patient.to_proto(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Patient.deceased[x]",
                found: Some("Reference"),
            })
        );

        let lenient = ConverterConfig::new(ChoicePolicy::EmptyMessage);
        let proto = patient.to_proto(&lenient).expect("lenient");
        assert_eq!(proto.deceased, Some(DeceasedX::default()));
    }

    #[test]
    fn absent_choice_stays_absent() {
        let proto = Patient::default().to_proto(&config()).expect("to proto");
        assert_eq!(proto.deceased, None);
        assert_eq!(proto.multiple_birth, None);
        assert_eq!(proto, proto::Patient::default());
    }
}
