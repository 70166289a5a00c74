use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::observation::component::{value_x as component_value_x, ValueX as ComponentValueX};
use proto::observation::{effective_x, value_x, EffectiveX, ValueX};

choice_type! {
    effective_to_proto, effective_to_hapi, "Observation.effective[x]", EffectiveX, effective_x {
        DateTime <=> DateTime,
        Period <=> Period,
        Timing <=> Timing,
        Instant <=> Instant,
    }
}

/// Both `value[x]` elements declare the same types.
macro_rules! observation_value {
    ($to_proto:ident, $to_hapi:ident, $field:literal, $wrapper:ident, $module:ident) => {
        choice_type! {
            $to_proto, $to_hapi, $field, $wrapper, $module {
                Quantity <=> Quantity,
                CodeableConcept <=> CodeableConcept,
                String <=> StringValue,
                Boolean <=> Boolean,
                Integer <=> Integer,
                Range <=> Range,
                Ratio <=> Ratio,
                SampledData <=> SampledData,
                Time <=> Time,
                DateTime <=> DateTime,
                Period <=> Period,
            }
        }
    };
}

observation_value!(value_to_proto, value_to_hapi, "Observation.value[x]", ValueX, value_x);
observation_value!(
    component_value_to_proto,
    component_value_to_hapi,
    "Observation.component.value[x]",
    ComponentValueX,
    component_value_x
);

resource! {
    hapi::Observation => proto::Observation {
        identifier, based_on, part_of, status, category, code, subject, focus, encounter,
        issued, performer, data_absent_reason, interpretation, note, body_site, method,
        specimen, device, reference_range, has_member, derived_from, component;
        effective: effective_to_proto / effective_to_hapi,
        value: value_to_proto / value_to_hapi,
    }
}

composite! {
    hapi::ObservationReferenceRange => proto::observation::ReferenceRange {
        extension, modifier_extension, low, high, r#type, applies_to, age, text,
    }
    hapi::ObservationComponent => proto::observation::Component {
        extension, modifier_extension, code, data_absent_reason, interpretation,
        reference_range;
        value: component_value_to_proto / component_value_to_hapi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoicePolicy, ConvertError, ConverterConfig, ToHapi, ToProto};
    use fhir_proto::observation_status_code;
    use hapi::{
        CodeableConcept, Coding, DataType, DateTimeType, DecimalType, Enumeration, Observation,
        ObservationComponent, ObservationStatus, Quantity, Reference, StringType, Timing,
        UriType,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    fn loinc(code: &str, display: &str) -> CodeableConcept {
        CodeableConcept {
            coding: vec![Coding {
                system: Some(UriType::new("http://loinc.org")),
                code: Some(hapi::CodeType::new(code)),
                display: Some(StringType::new(display)),
                ..Coding::default()
            }],
            ..CodeableConcept::default()
        }
    }

    fn mm_hg(value: i64) -> DataType {
        DataType::Quantity(Quantity {
            value: Some(DecimalType::new(Decimal::new(value, 0))),
            unit: Some(StringType::new("mmHg")),
            ..Quantity::default()
        })
    }

    fn blood_pressure() -> Observation {
        Observation {
            id: Some("bp-1".to_string()),
            status: Some(Enumeration::new(ObservationStatus::Final)),
            code: Some(loinc("85354-9", "Blood pressure panel")),
            subject: Some(Reference::new("Patient/p1")),
            effective: Some(DataType::DateTime(
                DateTimeType::parse("2024-05-01T08:30:00Z").expect("effective"),
            )),
            component: vec![
                ObservationComponent {
                    code: Some(loinc("8480-6", "Systolic blood pressure")),
                    value: Some(mm_hg(120)),
                    ..ObservationComponent::default()
                },
                ObservationComponent {
                    code: Some(loinc("8462-4", "Diastolic blood pressure")),
                    value: Some(mm_hg(80)),
                    ..ObservationComponent::default()
                },
            ],
            ..Observation::default()
        }
    }

    #[test]
    fn observation_with_components_round_trips() {
        let observation = blood_pressure();
        let proto = observation.to_proto(&config()).expect("to proto");

        assert_eq!(
            proto.status.as_ref().map(|s| s.value),
            Some(observation_status_code::Value::Final as i32)
        );
        assert_eq!(proto.component.len(), 2);
        assert!(matches!(
            proto.component[0].value.as_ref().and_then(|v| v.choice.as_ref()),
            Some(component_value_x::Choice::Quantity(_))
        ));

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), observation);
    }

    #[test]
    fn string_value_uses_the_string_variant() {
        let observation = Observation {
            value: Some(DataType::String(StringType::new("negative"))),
            ..Observation::default()
        };
        let proto = observation.to_proto(&config()).expect("to proto");
        assert!(matches!(
            proto.value.as_ref().and_then(|v| v.choice.as_ref()),
            Some(value_x::Choice::StringValue(s)) if s.value == "negative"
        ));
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), observation);
    }

    #[test]
    fn timing_effective_round_trips() {
        let observation = Observation {
            effective: Some(DataType::from(Timing {
                event: vec![DateTimeType::parse("2024-05-01").expect("event")],
                ..Timing::default()
            })),
            ..Observation::default()
        };
        let proto = observation.to_proto(&config()).expect("to proto");
        assert!(matches!(
            proto.effective.as_ref().and_then(|e| e.choice.as_ref()),
            Some(effective_x::Choice::Timing(_))
        ));
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), observation);
    }

    #[test]
    fn zero_valued_quantity_is_still_the_populated_variant() {
        use prost::Message;

        let observation = Observation {
            value: Some(DataType::Quantity(Quantity::default())),
            ..Observation::default()
        };
        let bytes = observation.to_proto(&config()).expect("to proto").encode_to_vec();
        let decoded = proto::Observation::decode(bytes.as_slice()).expect("decode");
        assert!(matches!(
            decoded.value.as_ref().and_then(|v| v.choice.as_ref()),
            Some(value_x::Choice::Quantity(_))
        ));
        assert_eq!(decoded.to_hapi(&config()).expect("to hapi"), observation);
    }

    #[test]
    fn reference_is_not_an_observation_value() {
        let observation = Observation {
            value: Some(DataType::Reference(Reference::new("Patient/p1"))),
            ..Observation::default()
        };
        assert_eq!(
            observation.to_proto(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Observation.value[x]",
                found: Some("Reference"),
            })
        );

        let lenient = ConverterConfig::new(ChoicePolicy::EmptyMessage);
        let proto = observation.to_proto(&lenient).expect("lenient");
        assert_eq!(proto.value, Some(ValueX::default()));
    }

    #[test]
    fn empty_component_value_wrapper_is_rejected() {
        let proto = proto::Observation {
            component: vec![proto::observation::Component {
                value: Some(ComponentValueX::default()),
                ..proto::observation::Component::default()
            }],
            ..proto::Observation::default()
        };
        assert_eq!(
            proto.to_hapi(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Observation.component.value[x]",
                found: None,
            })
        );
    }
}
