//! `Timing` and its `repeat` backbone.

use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::timing::repeat::{bounds_x, BoundsX};

composite! {
    hapi::Timing => proto::Timing {
        extension, modifier_extension, event, repeat, code,
    }
}

choice_type! {
    bounds_to_proto, bounds_to_hapi, "Timing.repeat.bounds[x]", BoundsX, bounds_x {
        Duration <=> Duration,
        Range <=> Range,
        Period <=> Period,
    }
}

composite! {
    hapi::TimingRepeat => proto::timing::Repeat {
        extension, count, count_max, duration, duration_max, duration_unit, frequency,
        frequency_max, period, period_max, period_unit, day_of_week, time_of_day, when, offset;
        bounds: bounds_to_proto / bounds_to_hapi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConvertError, ConverterConfig, ToHapi, ToProto};
    use hapi::{
        DataType, DaysOfWeek, Duration, Enumeration, EventTiming, PositiveIntType, TimeType,
        Timing, TimingRepeat, UnitsOfTime,
    };
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    fn twice_daily() -> Timing {
        Timing {
            repeat: Some(TimingRepeat {
                bounds: Some(DataType::Duration(Duration {
                    unit: Some(hapi::StringType::new("d")),
                    ..Duration::default()
                })),
                frequency: Some(PositiveIntType::new(2u32)),
                period_unit: Some(Enumeration::new(UnitsOfTime::D)),
                day_of_week: vec![
                    Enumeration::new(DaysOfWeek::Mon),
                    Enumeration::new(DaysOfWeek::Thu),
                ],
                time_of_day: vec![TimeType::parse("08:00:00").expect("parse time")],
                when: vec![Enumeration::new(EventTiming::MornEarly)],
                ..TimingRepeat::default()
            }),
            ..Timing::default()
        }
    }

    #[test]
    fn repeat_round_trips_with_codes_in_order() {
        let timing = twice_daily();
        let proto = timing.to_proto(&config()).expect("to proto");

        let repeat = proto.repeat.as_ref().expect("repeat");
        assert_eq!(repeat.day_of_week.len(), 2);
        assert!(matches!(
            repeat.bounds.as_ref().and_then(|b| b.choice.as_ref()),
            Some(bounds_x::Choice::Duration(_))
        ));

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), timing);
    }

    #[test]
    fn quantity_is_not_a_bounds_type() {
        let repeat = TimingRepeat {
            bounds: Some(DataType::Quantity(hapi::Quantity::default())),
            ..TimingRepeat::default()
        };
        assert_eq!(
            repeat.to_proto(&config()),
            Err(ConvertError::InvalidChoiceType {
                field: "Timing.repeat.bounds[x]",
                found: Some("Quantity"),
            })
        );
    }
}
