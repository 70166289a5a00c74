//! Primitive element wrappers.
//!
//! Every FHIR primitive is an element: an optional value plus an optional element `id` and
//! extensions. In YAML a primitive may be written either as a bare scalar (`active: true`)
//! or as an element map (`active: { id: a1, value: true }`).

use crate::datatypes::Extension;
use base64::{engine::general_purpose, Engine as _};
use rust_decimal::Decimal;
use serde::de::{self, EnumAccess, IgnoredAny, IntoDeserializer, MapAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Serialised form shared by all primitive wrappers.
///
/// Deserialisation reads straight from the input without buffering, so nested values keep
/// the deserializer's own scalar handling.
#[doc(hidden)]
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum PrimitiveRepr<T> {
    Bare(T),
    Element {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        extension: Vec<Extension>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<T>,
    },
}

impl<T> PrimitiveRepr<T> {
    pub(crate) fn into_parts(self) -> (Option<String>, Vec<Extension>, Option<T>) {
        match self {
            Self::Bare(value) => (None, Vec::new(), Some(value)),
            Self::Element {
                id,
                extension,
                value,
            } => (id, extension, value),
        }
    }

    pub(crate) fn from_parts(id: Option<String>, extension: Vec<Extension>, value: Option<T>) -> Self {
        match (id, extension.is_empty(), value) {
            (None, true, Some(value)) => Self::Bare(value),
            (id, _, value) => Self::Element {
                id,
                extension,
                value,
            },
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PrimitiveRepr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PrimitiveReprVisitor(PhantomData))
    }
}

struct PrimitiveReprVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> PrimitiveReprVisitor<T> {
    /// Read a bare scalar, retrying with its text so `postalCode: 12345` still reads as a
    /// string. The first error is kept when both attempts fail.
    fn bare<S, E>(scalar: S, text: impl FnOnce() -> String) -> Result<PrimitiveRepr<T>, E>
    where
        S: IntoDeserializer<'de, E>,
        E: de::Error,
    {
        T::deserialize(scalar.into_deserializer())
            .or_else(|err| T::deserialize(text().into_deserializer()).map_err(|_: E| err))
            .map(PrimitiveRepr::Bare)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for PrimitiveReprVisitor<T> {
    type Value = PrimitiveRepr<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a primitive value or a map of id, extension and value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Self::bare(v, || v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::bare(v, || v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::bare(v, || v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::bare(v, || v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(PrimitiveRepr::Bare)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PrimitiveRepr::from_parts(None, Vec::new(), None))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id = None;
        let mut extension = Vec::new();
        let mut value = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => id = map.next_value()?,
                "extension" => extension = map.next_value()?,
                "value" => value = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(PrimitiveRepr::Element {
            id,
            extension,
            value,
        })
    }
}

/// Declare a primitive wrapper.
///
/// `$repr` is the serde representation of the value; it must convert to and from `$value`.
macro_rules! primitive_type {
    (@element $(#[$meta:meta])* $name:ident, $value:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub id: Option<String>,
            pub extension: Vec<Extension>,
            pub value: Option<$value>,
        }

        impl $name {
            pub fn new(value: impl Into<$value>) -> Self {
                Self {
                    id: None,
                    extension: Vec::new(),
                    value: Some(value.into()),
                }
            }

            /// True when the element has neither a value, an id nor extensions.
            pub fn is_empty(&self) -> bool {
                self.id.is_none() && self.extension.is_empty() && self.value.is_none()
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $value:ty, $repr:ty) => {
        primitive_type!(@element $(#[$meta])* $name, $value);

        impl From<PrimitiveRepr<$repr>> for $name {
            fn from(repr: PrimitiveRepr<$repr>) -> Self {
                let (id, extension, value) = repr.into_parts();
                Self {
                    id,
                    extension,
                    value: value.map(Into::into),
                }
            }
        }

        impl From<$name> for PrimitiveRepr<$repr> {
            fn from(element: $name) -> Self {
                PrimitiveRepr::from_parts(
                    element.id,
                    element.extension,
                    element.value.map(<$repr>::from),
                )
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                PrimitiveRepr::<$repr>::from(self.clone()).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                PrimitiveRepr::<$repr>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

primitive_type!(
    /// `string`
    StringType, String, String
);
primitive_type!(
    /// `boolean`
    BooleanType, bool, bool
);
primitive_type!(
    /// `integer` (signed 32-bit).
    IntegerType, i32, i32
);
primitive_type!(
    @element
    /// `decimal`, kept with the scale it was written with.
    ///
    /// In YAML a decimal is a bare scalar, quoted or not (`value: 72.50`). A decimal that
    /// carries an `id` or extensions is written as an `!element` tagged map: the scalar has
    /// to be read as text to keep its scale, and a plain map cannot be told apart from it
    /// before reading.
    DecimalType, Decimal
);
primitive_type!(
    /// `code` bound to an open value set.
    CodeType, String, String
);
primitive_type!(
    /// `uri`
    UriType, String, String
);
primitive_type!(
    /// `url`
    UrlType, String, String
);
primitive_type!(
    /// `oid`
    OidType, String, String
);
primitive_type!(
    /// `uuid`
    UuidType, String, String
);
primitive_type!(
    /// `canonical`
    CanonicalType, String, String
);
primitive_type!(
    /// `markdown`
    MarkdownType, String, String
);
primitive_type!(
    /// `base64Binary`, held as raw bytes and written as base64 text.
    Base64BinaryType, Vec<u8>, Base64Text
);
primitive_type!(
    /// `id`
    IdType, String, String
);
primitive_type!(
    /// `positiveInt`
    PositiveIntType, u32, u32
);
primitive_type!(
    /// `unsignedInt`
    UnsignedIntType, u32, u32
);

impl From<&str> for StringType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Base64 text form of binary content.
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Base64Text(Vec<u8>);

impl From<Vec<u8>> for Base64Text {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Base64Text> for Vec<u8> {
    fn from(text: Base64Text) -> Self {
        text.0
    }
}

impl Serialize for Base64Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&general_purpose::STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Base64Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(text.trim())
            .map(Self)
            .map_err(|e| serde::de::Error::custom(format!("invalid base64Binary: {e}")))
    }
}

const DECIMAL_ELEMENT_TAG: &str = "element";

fn parse_decimal<E: de::Error>(text: &str) -> Result<Decimal, E> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| E::custom(format!("invalid decimal '{text}': {e}")))
}

/// Decimal text read without passing through a float.
#[derive(Clone, Debug)]
struct DecimalText(Decimal);

impl Serialize for DecimalText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_decimal(&text).map(Self)
    }
}

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct DecimalElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<DecimalText>,
}

impl Serialize for DecimalType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match (&self.id, self.extension.is_empty(), &self.value) {
            (None, true, Some(value)) => serializer.collect_str(value),
            _ => serializer.serialize_newtype_variant(
                "DecimalType",
                0,
                DECIMAL_ELEMENT_TAG,
                &DecimalElement {
                    id: self.id.clone(),
                    extension: self.extension.clone(),
                    value: self.value.map(DecimalText),
                },
            ),
        }
    }
}

impl<'de> Deserialize<'de> for DecimalType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The enum entry point hands over the scalar's text; `deserialize_any` would
        // give a float for `72.50`.
        deserializer.deserialize_enum("DecimalType", &[DECIMAL_ELEMENT_TAG], DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = DecimalType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal or an !element map")
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, variant): (String, _) = data.variant()?;
        if tag == DECIMAL_ELEMENT_TAG {
            let element: DecimalElement = variant.newtype_variant()?;
            return Ok(DecimalType {
                id: element.id,
                extension: element.extension,
                value: element.value.map(|text| text.0),
            });
        }
        variant.unit_variant()?;
        parse_decimal(&tag).map(DecimalType::new)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_decimal(v).map(DecimalType::new)
    }
}
