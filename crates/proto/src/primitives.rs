//! Primitive messages.
//!
//! Scalar primitives carry `value = 1`, `id = 2`, `extension = 3`. Temporal primitives carry
//! their value as microseconds (`value_us`) with the timezone identifier and precision
//! alongside.

use crate::datatypes::Extension;

/// `string`. Also the type of every element `id`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FhirString {
    #[prost(string, tag = "1")]
    pub value: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub id: Option<Box<FhirString>>,
    #[prost(message, repeated, tag = "3")]
    pub extension: Vec<Extension>,
}

impl FhirString {
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

macro_rules! primitive_message {
    ($($(#[$meta:meta])* $name:ident [$($kind:tt)+] $ty:ty;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct $name {
                #[prost($($kind)+, tag = "1")]
                pub value: $ty,
                #[prost(message, optional, tag = "2")]
                pub id: Option<FhirString>,
                #[prost(message, repeated, tag = "3")]
                pub extension: Vec<Extension>,
            }

            impl $name {
                pub fn of(value: impl Into<$ty>) -> Self {
                    Self {
                        value: value.into(),
                        ..Self::default()
                    }
                }
            }
        )+
    };
}

primitive_message! {
    Boolean [bool] bool;
    /// 32-bit signed integer.
    Integer [int32] i32;
    /// Decimal in its exact lexical form.
    Decimal [string] String;
    /// `code` bound to an open value set.
    Code [string] String;
    Uri [string] String;
    Url [string] String;
    Oid [string] String;
    Uuid [string] String;
    Canonical [string] String;
    Markdown [string] String;
    Base64Binary [bytes = "vec"] Vec<u8>;
    Id [string] String;
    PositiveInt [uint32] u32;
    UnsignedInt [uint32] u32;
    /// XHTML fragment of a narrative.
    Xhtml [string] String;
}

/// `date`: microseconds since the epoch of the start of the date in `timezone`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Date {
    #[prost(int64, tag = "1")]
    pub value_us: i64,
    #[prost(string, tag = "2")]
    pub timezone: String,
    #[prost(enumeration = "date::Precision", tag = "3")]
    pub precision: i32,
    #[prost(message, optional, tag = "4")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "5")]
    pub extension: Vec<Extension>,
}

pub mod date {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Precision {
        Unspecified = 0,
        Year = 1,
        Month = 2,
        Day = 3,
    }
}

/// `dateTime`: microseconds since the epoch.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DateTime {
    #[prost(int64, tag = "1")]
    pub value_us: i64,
    #[prost(string, tag = "2")]
    pub timezone: String,
    #[prost(enumeration = "date_time::Precision", tag = "3")]
    pub precision: i32,
    #[prost(message, optional, tag = "4")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "5")]
    pub extension: Vec<Extension>,
}

pub mod date_time {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Precision {
        Unspecified = 0,
        Year = 1,
        Month = 2,
        Day = 3,
        Second = 4,
        Millisecond = 5,
        Microsecond = 6,
    }
}

/// `instant`: microseconds since the epoch.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Instant {
    #[prost(int64, tag = "1")]
    pub value_us: i64,
    #[prost(string, tag = "2")]
    pub timezone: String,
    #[prost(enumeration = "instant::Precision", tag = "3")]
    pub precision: i32,
    #[prost(message, optional, tag = "4")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "5")]
    pub extension: Vec<Extension>,
}

pub mod instant {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Precision {
        Unspecified = 0,
        Second = 1,
        Millisecond = 2,
        Microsecond = 3,
    }
}

/// `time`: microseconds since midnight.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Time {
    #[prost(int64, tag = "1")]
    pub value_us: i64,
    #[prost(enumeration = "time::Precision", tag = "2")]
    pub precision: i32,
    #[prost(message, optional, tag = "3")]
    pub id: Option<FhirString>,
    #[prost(message, repeated, tag = "4")]
    pub extension: Vec<Extension>,
}

pub mod time {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Precision {
        Unspecified = 0,
        Second = 1,
        Millisecond = 2,
        Microsecond = 3,
    }
}
