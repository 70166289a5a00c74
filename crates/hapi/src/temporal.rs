//! Temporal primitives: `date`, `dateTime`, `instant` and `time`.
//!
//! Date-like values are held as a UTC instant plus the precision the value was written with
//! and the timezone identifier it was written in. Precision is taken from the lexical
//! structure: which date components are present and how many fractional-second digits
//! follow the seconds.

use crate::datatypes::Extension;
use crate::primitive::PrimitiveRepr;
use crate::{HapiError, HapiResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Precision of a temporal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemporalPrecision {
    Year,
    Month,
    Day,
    Minute,
    Second,
    Milli,
    Micro,
}

/// Timezone identifier as written alongside a value (`Z`, `UTC`, `+01:00`, `Europe/London`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed offset named by this identifier.
    ///
    /// Only `Z`, `UTC`, `GMT` and `±hh:mm` forms resolve; region names return `None`.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self.0.as_str() {
            "Z" | "UTC" | "GMT" | "Etc/UTC" => Some(Utc.fix()),
            other => parse_offset(other),
        }
    }
}

impl From<&str> for TimeZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! epoch_type {
    ($(#[$meta:meta])* $name:ident, $default:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(try_from = "PrimitiveRepr<String>", into = "PrimitiveRepr<String>")]
        pub struct $name {
            pub id: Option<String>,
            pub extension: Vec<Extension>,
            pub value: Option<DateTime<Utc>>,
            pub precision: Option<TemporalPrecision>,
            pub timezone: Option<TimeZoneId>,
        }

        impl $name {
            /// Precision assumed when none is recorded.
            pub const DEFAULT_PRECISION: TemporalPrecision = TemporalPrecision::$default;

            pub fn new(value: DateTime<Utc>, precision: TemporalPrecision) -> Self {
                Self {
                    value: Some(value),
                    precision: Some(precision),
                    ..Self::default()
                }
            }

            pub fn with_timezone(mut self, timezone: impl Into<TimeZoneId>) -> Self {
                self.timezone = Some(timezone.into());
                self
            }

            /// FHIR lexical form of the value, rendered in its own timezone.
            pub fn value_as_string(&self) -> Option<String> {
                let value = self.value.as_ref()?;
                Some(format_epoch(
                    value,
                    self.precision.unwrap_or(Self::DEFAULT_PRECISION),
                    self.timezone.as_ref(),
                ))
            }
        }

        impl TryFrom<PrimitiveRepr<String>> for $name {
            type Error = HapiError;

            fn try_from(repr: PrimitiveRepr<String>) -> HapiResult<Self> {
                let (id, extension, text) = repr.into_parts();
                let mut element = match text {
                    Some(text) => Self::parse(&text)?,
                    None => Self::default(),
                };
                element.id = id;
                element.extension = extension;
                Ok(element)
            }
        }

        impl From<$name> for PrimitiveRepr<String> {
            fn from(element: $name) -> Self {
                let text = element.value_as_string();
                PrimitiveRepr::from_parts(element.id, element.extension, text)
            }
        }
    };
}

impl From<String> for TimeZoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

epoch_type!(
    /// `date`: year, year-month or full date.
    DateType, Day
);
epoch_type!(
    /// `dateTime`: a date, or a date with a time of day and offset.
    DateTimeType, Second
);
epoch_type!(
    /// `instant`: a full timestamp with offset, to at least second precision.
    InstantType, Milli
);

impl DateType {
    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`HapiError::InvalidValue`] for any other form or a time component.
    pub fn parse(text: &str) -> HapiResult<Self> {
        let lexical = parse_lexical("date", text)?;
        if lexical.precision > TemporalPrecision::Day {
            return Err(invalid("date", text, "a date may not carry a time of day"));
        }
        Ok(Self::from_lexical(lexical))
    }
}

impl DateTimeType {
    /// Parse any FHIR `dateTime` form.
    ///
    /// # Errors
    ///
    /// Returns [`HapiError::InvalidValue`] if the text is not a `dateTime`, including a time
    /// without seconds or on a partial date.
    pub fn parse(text: &str) -> HapiResult<Self> {
        Ok(Self::from_lexical(parse_lexical("dateTime", text)?))
    }
}

impl InstantType {
    /// Parse `YYYY-MM-DDThh:mm:ss[.f](Z|±hh:mm)`.
    ///
    /// # Errors
    ///
    /// Returns [`HapiError::InvalidValue`] for anything less than a full timestamp with offset.
    pub fn parse(text: &str) -> HapiResult<Self> {
        let lexical = parse_lexical("instant", text)?;
        if lexical.precision < TemporalPrecision::Second {
            return Err(invalid("instant", text, "an instant requires seconds"));
        }
        if lexical.timezone.is_none() {
            return Err(invalid("instant", text, "an instant requires a timezone"));
        }
        Ok(Self::from_lexical(lexical))
    }
}

/// `time`: a time of day without date or offset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PrimitiveRepr<String>", into = "PrimitiveRepr<String>")]
pub struct TimeType {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<NaiveTime>,
    pub precision: Option<TemporalPrecision>,
}

impl TimeType {
    pub const DEFAULT_PRECISION: TemporalPrecision = TemporalPrecision::Second;

    pub fn new(value: NaiveTime, precision: TemporalPrecision) -> Self {
        Self {
            value: Some(value),
            precision: Some(precision),
            ..Self::default()
        }
    }

    /// Parse `hh:mm:ss[.f]`.
    ///
    /// # Errors
    ///
    /// Returns [`HapiError::InvalidValue`] if hours, minutes or seconds are missing or out of
    /// range.
    pub fn parse(text: &str) -> HapiResult<Self> {
        let (value, precision) =
            parse_clock(text).ok_or_else(|| invalid("time", text, "expected hh:mm:ss[.fff]"))?;
        Ok(Self::new(value, precision))
    }

    pub fn value_as_string(&self) -> Option<String> {
        let value = self.value.as_ref()?;
        let pattern = match self.precision.unwrap_or(Self::DEFAULT_PRECISION) {
            TemporalPrecision::Minute => "%H:%M",
            TemporalPrecision::Milli => "%H:%M:%S%.3f",
            TemporalPrecision::Micro => "%H:%M:%S%.6f",
            _ => "%H:%M:%S",
        };
        Some(value.format(pattern).to_string())
    }
}

impl TryFrom<PrimitiveRepr<String>> for TimeType {
    type Error = HapiError;

    fn try_from(repr: PrimitiveRepr<String>) -> HapiResult<Self> {
        let (id, extension, text) = repr.into_parts();
        let mut element = match text {
            Some(text) => Self::parse(&text)?,
            None => Self::default(),
        };
        element.id = id;
        element.extension = extension;
        Ok(element)
    }
}

impl From<TimeType> for PrimitiveRepr<String> {
    fn from(element: TimeType) -> Self {
        let text = element.value_as_string();
        PrimitiveRepr::from_parts(element.id, element.extension, text)
    }
}

// ============================================================================
// Lexical parsing and formatting (internal)
// ============================================================================

struct Lexical {
    value: DateTime<Utc>,
    precision: TemporalPrecision,
    timezone: Option<TimeZoneId>,
}

macro_rules! from_lexical {
    ($($name:ident),+) => {
        $(
            impl $name {
                fn from_lexical(lexical: Lexical) -> Self {
                    Self {
                        value: Some(lexical.value),
                        precision: Some(lexical.precision),
                        timezone: lexical.timezone,
                        ..Self::default()
                    }
                }
            }
        )+
    };
}

from_lexical!(DateType, DateTimeType, InstantType);

fn invalid(datatype: &'static str, text: &str, reason: &str) -> HapiError {
    HapiError::InvalidValue {
        datatype,
        value: text.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_lexical(datatype: &'static str, text: &str) -> HapiResult<Lexical> {
    let (date_part, time_part) = match text.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (text, None),
    };

    let (date, date_precision) = parse_calendar_date(date_part)
        .ok_or_else(|| invalid(datatype, text, "expected YYYY, YYYY-MM or YYYY-MM-DD"))?;

    let Some(time_part) = time_part else {
        let midnight = date.and_time(NaiveTime::default());
        return Ok(Lexical {
            value: Utc.from_utc_datetime(&midnight),
            precision: date_precision,
            timezone: None,
        });
    };

    if date_precision != TemporalPrecision::Day {
        return Err(invalid(datatype, text, "a time of day requires a full date"));
    }

    let (clock, zone) = if let Some(clock) = time_part.strip_suffix('Z') {
        (clock, Some("Z"))
    } else if let Some(idx) = time_part.rfind(['+', '-']) {
        (&time_part[..idx], Some(&time_part[idx..]))
    } else {
        (time_part, None)
    };

    let (time, precision) =
        parse_clock(clock).ok_or_else(|| invalid(datatype, text, "malformed time of day"))?;

    let timezone = zone.map(TimeZoneId::from);
    let offset = match &timezone {
        Some(tz) => tz
            .offset()
            .ok_or_else(|| invalid(datatype, text, "malformed timezone offset"))?,
        None => Utc.fix(),
    };

    let value = offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| invalid(datatype, text, "ambiguous local time"))?
        .with_timezone(&Utc);

    Ok(Lexical {
        value,
        precision,
        timezone,
    })
}

fn parse_calendar_date(text: &str) -> Option<(NaiveDate, TemporalPrecision)> {
    let parts: Vec<&str> = text.split('-').collect();
    let year = parse_digits(parts.first()?, 4)? as i32;
    let (month, day, precision) = match parts.len() {
        1 => (1, 1, TemporalPrecision::Year),
        2 => (parse_digits(parts[1], 2)?, 1, TemporalPrecision::Month),
        3 => (
            parse_digits(parts[1], 2)?,
            parse_digits(parts[2], 2)?,
            TemporalPrecision::Day,
        ),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, precision))
}

fn parse_clock(text: &str) -> Option<(NaiveTime, TemporalPrecision)> {
    let (hms, fraction) = match text.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (text, None),
    };

    // Seconds are required: FHIR has no minute-only time of day.
    let parts: Vec<&str> = hms.split(':').collect();
    let [hour, minute, second] = parts.as_slice() else {
        return None;
    };
    let hour = parse_digits(hour, 2)?;
    let minute = parse_digits(minute, 2)?;
    let second = parse_digits(second, 2)?;
    let mut precision = TemporalPrecision::Second;

    let mut micros = 0;
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        precision = if fraction.len() <= 3 {
            TemporalPrecision::Milli
        } else {
            TemporalPrecision::Micro
        };
        let mut digits: String = fraction.chars().take(6).collect();
        while digits.len() < 6 {
            digits.push('0');
        }
        micros = digits.parse().ok()?;
    }

    NaiveTime::from_hms_micro_opt(hour, minute, second, micros).map(|time| (time, precision))
}

fn parse_digits(text: &str, width: usize) -> Option<u32> {
    if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = text[1..].split_once(':')?;
    let seconds = parse_digits(hours, 2)? * 3600 + parse_digits(minutes, 2)? * 60;
    FixedOffset::east_opt(sign * seconds as i32)
}

fn format_epoch(
    value: &DateTime<Utc>,
    precision: TemporalPrecision,
    timezone: Option<&TimeZoneId>,
) -> String {
    let offset = timezone.and_then(TimeZoneId::offset).unwrap_or(Utc.fix());
    let local = value.with_timezone(&offset);
    let pattern = match precision {
        TemporalPrecision::Year => return local.format("%Y").to_string(),
        TemporalPrecision::Month => return local.format("%Y-%m").to_string(),
        TemporalPrecision::Day => return local.format("%Y-%m-%d").to_string(),
        TemporalPrecision::Minute => "%Y-%m-%dT%H:%M",
        TemporalPrecision::Second => "%Y-%m-%dT%H:%M:%S",
        TemporalPrecision::Milli => "%Y-%m-%dT%H:%M:%S%.3f",
        TemporalPrecision::Micro => "%Y-%m-%dT%H:%M:%S%.6f",
    };
    let suffix = if offset.local_minus_utc() == 0 {
        "Z".to_string()
    } else {
        local.format("%:z").to_string()
    };
    format!("{}{}", local.format(pattern), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_precision_follows_components() {
        let year = DateType::parse("2020").expect("parse year");
        assert_eq!(year.precision, Some(TemporalPrecision::Year));
        assert_eq!(year.value_as_string().as_deref(), Some("2020"));

        let month = DateType::parse("2020-02").expect("parse month");
        assert_eq!(month.precision, Some(TemporalPrecision::Month));
        assert_eq!(
            month.value.map(|v| v.timestamp()),
            Some(Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap().timestamp())
        );

        let day = DateType::parse("1970-01-02").expect("parse day");
        assert_eq!(day.precision, Some(TemporalPrecision::Day));
        assert_eq!(day.value.map(|v| v.timestamp_micros()), Some(86_400_000_000));
    }

    #[test]
    fn date_time_precision_counts_fraction_digits() {
        let seconds = DateTimeType::parse("2021-03-04T05:06:07Z").expect("parse");
        assert_eq!(seconds.precision, Some(TemporalPrecision::Second));

        let millis = DateTimeType::parse("2021-03-04T05:06:07.1Z").expect("parse");
        assert_eq!(millis.precision, Some(TemporalPrecision::Milli));

        let micros = DateTimeType::parse("2021-03-04T05:06:07.1234Z").expect("parse");
        assert_eq!(micros.precision, Some(TemporalPrecision::Micro));
        assert_eq!(micros.value.map(|v| v.timestamp_subsec_micros()), Some(123_400));
    }

    #[test]
    fn date_time_renders_in_its_own_offset() {
        let text = "2021-03-04T05:06:07.123+01:00";
        let parsed = DateTimeType::parse(text).expect("parse");
        assert_eq!(parsed.timezone, Some(TimeZoneId::new("+01:00")));
        assert_eq!(
            parsed.value,
            Some(Utc.with_ymd_and_hms(2021, 3, 4, 4, 6, 7).unwrap() + chrono::Duration::milliseconds(123))
        );
        assert_eq!(parsed.value_as_string().as_deref(), Some(text));
    }

    #[test]
    fn instant_requires_seconds_and_zone() {
        assert!(InstantType::parse("2020-01-01").is_err());
        assert!(InstantType::parse("2020-01-01T10:00:00").is_err());
        let instant = InstantType::parse("2020-01-01T10:00:00.000Z").expect("parse");
        assert_eq!(instant.precision, Some(TemporalPrecision::Milli));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(DateType::parse("2020-13-01").is_err());
        assert!(DateType::parse("20-01-01").is_err());
        assert!(DateType::parse("2020-01-01T10:00:00Z").is_err());
        assert!(DateTimeType::parse("2020-01T10:00:00Z").is_err());
        assert!(TimeType::parse("25:00:00").is_err());
    }

    #[test]
    fn time_keeps_explicit_precision() {
        let time = TimeType::parse("10:15:30.5").expect("parse");
        assert_eq!(time.precision, Some(TemporalPrecision::Milli));
        assert_eq!(time.value_as_string().as_deref(), Some("10:15:30.500"));

    }

    #[test]
    fn minute_only_clock_forms_are_rejected() {
        assert!(TimeType::parse("10:15").is_err());
        assert!(TimeType::parse("00:00").is_err());
        assert!(DateTimeType::parse("2020-01-01T10:15Z").is_err());
        assert!(InstantType::parse("2020-01-01T10:15+01:00").is_err());

        let midnight = TimeType::parse("00:00:00").expect("parse");
        assert_eq!(midnight.precision, Some(TemporalPrecision::Second));
        assert_eq!(midnight.value, Some(NaiveTime::default()));
    }

    #[test]
    fn named_zones_fall_back_to_utc_rendering() {
        let date_time = DateTimeType::new(
            Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap(),
            TemporalPrecision::Second,
        )
        .with_timezone("Europe/London");
        assert_eq!(
            date_time.value_as_string().as_deref(),
            Some("2022-06-01T12:00:00Z")
        );
    }

    #[test]
    fn yaml_uses_lexical_form() {
        let date: DateType = serde_yaml::from_str("'1992-03-20'").expect("parse yaml");
        assert_eq!(date.precision, Some(TemporalPrecision::Day));
        let text = serde_yaml::to_string(&date).expect("render");
        let reparsed: DateType = serde_yaml::from_str(&text).expect("reparse");
        assert_eq!(date, reparsed);
    }
}
