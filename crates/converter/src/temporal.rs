//! Temporal converters: `date`, `dateTime`, `instant` and `time`.
//!
//! Values cross the wire as microseconds (since the Unix epoch, or since midnight for
//! `time`) with the precision enum and timezone identifier alongside. Precision is mapped
//! through an explicit table per message; a precision the message cannot express is sent as
//! `Unspecified` and `Unspecified` comes back as `None`. A present value without a recorded
//! precision is sent with its type's `DEFAULT_PRECISION`.
//!
//! A wire value of `0` with `Unspecified` precision is read as an absent value.

use crate::primitives::{element_id_to_hapi, element_id_to_proto};
use crate::{ConvertError, ConvertResult, ConverterConfig, ToHapi, ToProto};
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use fhir_hapi::{self as hapi, TemporalPrecision, TimeZoneId};
use fhir_proto as proto;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

fn epoch_micros(value: Option<&DateTime<Utc>>) -> i64 {
    value.map(DateTime::timestamp_micros).unwrap_or_default()
}

fn epoch_from_micros(value_us: i64, datatype: &'static str) -> ConvertResult<DateTime<Utc>> {
    let seconds = value_us.div_euclid(MICROS_PER_SECOND);
    let nanos = (value_us.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
    DateTime::<Utc>::from_timestamp(seconds, nanos).ok_or_else(|| ConvertError::InvalidValue {
        datatype,
        reason: format!("{value_us} microseconds since the epoch is out of range"),
    })
}

fn timezone_to_proto(timezone: Option<&TimeZoneId>) -> String {
    timezone.map(|tz| tz.as_str().to_string()).unwrap_or_default()
}

fn timezone_to_hapi(timezone: &str) -> Option<TimeZoneId> {
    (!timezone.is_empty()).then(|| TimeZoneId::new(timezone))
}

/// Declare the converter pair for an epoch-based temporal type and its precision table.
macro_rules! epoch_converter {
    (
        $hapi:ident => $proto:ident, $module:ident, $datatype:literal {
            $($a:ident <=> $b:ident,)+
        }
    ) => {
        impl ToProto for hapi::$hapi {
            type Output = proto::$proto;

            fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                let precision = match (self.value, self.precision) {
                    (Some(_), precision) => {
                        match precision.unwrap_or(hapi::$hapi::DEFAULT_PRECISION) {
                            $(TemporalPrecision::$a => proto::$module::Precision::$b,)+
                            _ => proto::$module::Precision::Unspecified,
                        }
                    }
                    (None, _) => proto::$module::Precision::Unspecified,
                };

                Ok(proto::$proto {
                    value_us: epoch_micros(self.value.as_ref()),
                    timezone: timezone_to_proto(self.timezone.as_ref()),
                    precision: precision as i32,
                    id: element_id_to_proto(&self.id),
                    extension: self.extension.to_proto(config)?,
                })
            }
        }

        impl ToHapi for proto::$proto {
            type Output = hapi::$hapi;

            fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
                let precision = match self.precision() {
                    $(proto::$module::Precision::$b => Some(TemporalPrecision::$a),)+
                    proto::$module::Precision::Unspecified => None,
                };
                let value = if self.value_us == 0 && precision.is_none() {
                    None
                } else {
                    Some(epoch_from_micros(self.value_us, $datatype)?)
                };

                Ok(hapi::$hapi {
                    id: element_id_to_hapi(self.id.as_ref()),
                    extension: self.extension.to_hapi(config)?,
                    value,
                    precision,
                    timezone: timezone_to_hapi(&self.timezone),
                })
            }
        }
    };
}

epoch_converter! {
    DateType => Date, date, "date" {
        Year <=> Year,
        Month <=> Month,
        Day <=> Day,
    }
}

epoch_converter! {
    DateTimeType => DateTime, date_time, "dateTime" {
        Year <=> Year,
        Month <=> Month,
        Day <=> Day,
        Second <=> Second,
        Milli <=> Millisecond,
        Micro <=> Microsecond,
    }
}

epoch_converter! {
    InstantType => Instant, instant, "instant" {
        Second <=> Second,
        Milli <=> Millisecond,
        Micro <=> Microsecond,
    }
}

impl ToProto for hapi::TimeType {
    type Output = proto::Time;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        let precision = match self
            .value
            .map(|_| self.precision.unwrap_or(hapi::TimeType::DEFAULT_PRECISION))
        {
            Some(TemporalPrecision::Second) => proto::time::Precision::Second,
            Some(TemporalPrecision::Milli) => proto::time::Precision::Millisecond,
            Some(TemporalPrecision::Micro) => proto::time::Precision::Microsecond,
            _ => proto::time::Precision::Unspecified,
        };
        let value_us = self
            .value
            .map(|time| {
                let micros = i64::from(time.nanosecond() / 1_000).min(MICROS_PER_SECOND - 1);
                i64::from(time.num_seconds_from_midnight()) * MICROS_PER_SECOND + micros
            })
            .unwrap_or_default();

        Ok(proto::Time {
            value_us,
            precision: precision as i32,
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
        })
    }
}

impl ToHapi for proto::Time {
    type Output = hapi::TimeType;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        let precision = match self.precision() {
            proto::time::Precision::Second => Some(TemporalPrecision::Second),
            proto::time::Precision::Millisecond => Some(TemporalPrecision::Milli),
            proto::time::Precision::Microsecond => Some(TemporalPrecision::Micro),
            proto::time::Precision::Unspecified => None,
        };
        let value = if self.value_us == 0 && precision.is_none() {
            None
        } else {
            Some(time_from_micros(self.value_us)?)
        };

        Ok(hapi::TimeType {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            value,
            precision,
        })
    }
}

fn time_from_micros(value_us: i64) -> ConvertResult<NaiveTime> {
    let out_of_range = || ConvertError::InvalidValue {
        datatype: "time",
        reason: format!("{value_us} microseconds is not within a day"),
    };
    if !(0..MICROS_PER_DAY).contains(&value_us) {
        return Err(out_of_range());
    }

    let seconds = (value_us / MICROS_PER_SECOND) as u32;
    let nanos = ((value_us % MICROS_PER_SECOND) * 1_000) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hapi::{DateTimeType, DateType, InstantType, TimeType};
    use pretty_assertions::assert_eq;

    fn config() -> ConverterConfig {
        ConverterConfig::default()
    }

    #[test]
    fn day_precision_date_round_trips_exactly() {
        let value = epoch_from_micros(86_400_000_000, "date").expect("in range");
        let date = DateType::new(value, TemporalPrecision::Day).with_timezone("UTC");

        let proto = date.to_proto(&config()).expect("to proto");
        assert_eq!(proto.value_us, 86_400_000_000);
        assert_eq!(proto.timezone, "UTC");
        assert_eq!(proto.precision(), proto::date::Precision::Day);

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), date);
    }

    #[test]
    fn microseconds_are_not_truncated() {
        let instant = InstantType::parse("2024-03-01T09:30:15.123456Z").expect("parse instant");
        let proto = instant.to_proto(&config()).expect("to proto");
        assert_eq!(proto.value_us % 1_000_000, 123_456);
        assert_eq!(proto.precision(), proto::instant::Precision::Microsecond);

        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), instant);
    }

    #[test]
    fn timezone_identifier_is_carried_verbatim() {
        let date_time = DateTimeType::parse("2024-03-01T09:30:15+01:00").expect("parse");
        let proto = date_time.to_proto(&config()).expect("to proto");
        let expected = date_time.timezone.as_ref().map(ToString::to_string);
        assert_eq!(Some(proto.timezone.clone()), expected);

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back.timezone, date_time.timezone);
        assert_eq!(back.value_as_string(), date_time.value_as_string());
    }

    #[test]
    fn inexpressible_precision_becomes_unspecified() {
        let value = epoch_from_micros(0, "date").expect("epoch");
        let date = DateType::new(value, TemporalPrecision::Second);
        let proto = date.to_proto(&config()).expect("to proto");
        assert_eq!(proto.precision(), proto::date::Precision::Unspecified);
    }

    #[test]
    fn epoch_value_without_precision_keeps_its_value() {
        let date_time = DateTimeType {
            value: Some(epoch_from_micros(0, "dateTime").expect("epoch")),
            ..DateTimeType::default()
        };
        let proto = date_time.to_proto(&config()).expect("to proto");
        assert_eq!(proto.precision(), proto::date_time::Precision::Second);

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back.value, date_time.value);
        assert_eq!(back.precision, Some(DateTimeType::DEFAULT_PRECISION));
    }

    #[test]
    fn midnight_time_keeps_its_value() {
        let midnight = TimeType::parse("00:00:00").expect("parse time");
        let proto = midnight.to_proto(&config()).expect("to proto");
        assert_eq!(proto.value_us, 0);
        assert_eq!(proto.precision(), proto::time::Precision::Second);
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), midnight);

        let unrecorded = TimeType {
            precision: None,
            ..midnight.clone()
        };
        let back = unrecorded
            .to_proto(&config())
            .and_then(|proto| proto.to_hapi(&config()))
            .expect("round trip");
        assert_eq!(back, midnight);
    }

    #[test]
    fn unknown_precision_values_become_none() {
        let proto = proto::DateTime {
            value_us: 1_000_000,
            precision: 42,
            ..proto::DateTime::default()
        };
        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back.precision, None);
        assert!(back.value.is_some());
    }

    #[test]
    fn absent_value_round_trips_as_absent() {
        let proto = DateTimeType::default().to_proto(&config()).expect("to proto");
        assert_eq!(proto, proto::DateTime::default());
        assert_eq!(proto.to_hapi(&config()).expect("to hapi"), DateTimeType::default());
    }

    #[test]
    fn out_of_range_micros_are_rejected() {
        let proto = proto::DateTime {
            value_us: i64::MAX,
            precision: proto::date_time::Precision::Second as i32,
            ..proto::DateTime::default()
        };
        assert!(matches!(
            proto.to_hapi(&config()),
            Err(ConvertError::InvalidValue {
                datatype: "dateTime",
                ..
            })
        ));
    }

    #[test]
    fn time_carries_explicit_precision() {
        let time = TimeType::parse("13:45:30.250").expect("parse time");
        assert_eq!(time.precision, Some(TemporalPrecision::Milli));

        let proto = time.to_proto(&config()).expect("to proto");
        assert_eq!(proto.value_us, (13 * 3600 + 45 * 60 + 30) * 1_000_000 + 250_000);
        assert_eq!(proto.precision(), proto::time::Precision::Millisecond);

        let back = proto.to_hapi(&config()).expect("to hapi");
        assert_eq!(back, time);
        assert_eq!(back.value_as_string().as_deref(), Some("13:45:30.250"));
    }

    #[test]
    fn time_outside_a_day_is_rejected() {
        let proto = proto::Time {
            value_us: MICROS_PER_DAY,
            precision: proto::time::Precision::Second as i32,
            ..proto::Time::default()
        };
        assert!(proto.to_hapi(&config()).is_err());
    }
}
