//! Code enums and the coded-element wrapper.
//!
//! FHIR codes are lowercase, hyphen-delimited tokens (`entered-in-error`). In this model a
//! code enum also exposes a constant *name* with the separators stripped
//! (`ENTEREDINERROR`), and every enum has a `Null` sentinel named `NULL` that stands for an
//! absent or unrecognised code.

use crate::datatypes::Extension;
use crate::primitive::PrimitiveRepr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Constant name of the sentinel variant present in every code enum.
pub const NULL_NAME: &str = "NULL";

/// Behaviour shared by every generated code enum.
pub trait CodeEnum: Copy + Eq + Default + std::fmt::Debug + 'static {
    /// Simple name of the enum type (for example `AdministrativeGender`).
    const NAME: &'static str;

    /// FHIR code of this constant, or `None` for the `Null` sentinel.
    fn to_code(&self) -> Option<&'static str>;

    /// Look up a constant by its FHIR code.
    fn from_code(code: &str) -> Option<Self>;

    /// Constant name (hyphen-free, upper case).
    fn name(&self) -> &'static str;

    /// Look up a constant by its constant name, including `NULL`.
    fn value_of(name: &str) -> Option<Self>;

    /// Every constant, sentinel last.
    fn variants() -> &'static [Self];

    fn is_null(&self) -> bool {
        *self == Self::default()
    }
}

/// A coded element: the enum value plus element `id` and extensions.
///
/// Serialised like a primitive: a bare code, or an element map with `value`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Enumeration<E> {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: E,
}

impl<E: CodeEnum> Enumeration<E> {
    pub fn new(value: E) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value,
        }
    }

    /// FHIR code of the held value.
    pub fn to_code(&self) -> Option<&'static str> {
        self.value.to_code()
    }
}

impl<E: CodeEnum> From<E> for Enumeration<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

impl<E: CodeEnum + Serialize> Serialize for Enumeration<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = (!self.value.is_null()).then_some(self.value);
        PrimitiveRepr::from_parts(self.id.clone(), self.extension.clone(), value)
            .serialize(serializer)
    }
}

impl<'de, E: CodeEnum + Deserialize<'de>> Deserialize<'de> for Enumeration<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (id, extension, value) = PrimitiveRepr::<E>::deserialize(deserializer)?.into_parts();
        Ok(Self {
            id,
            extension,
            value: value.unwrap_or_default(),
        })
    }
}

/// Declare a code enum.
///
/// Each entry is `Variant => "fhir-code", "CONSTANTNAME";`. A `Null` sentinel is appended
/// and used as the default. Serde uses the FHIR code; the sentinel serialises as null.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $code:literal, $const_name:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            #[default]
            Null,
        }

        impl $crate::enumeration::CodeEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn to_code(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($code),)+
                    Self::Null => None,
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $const_name,)+
                    Self::Null => $crate::enumeration::NULL_NAME,
                }
            }

            fn value_of(name: &str) -> Option<Self> {
                match name {
                    $($const_name => Some(Self::$variant),)+
                    "NULL" => Some(Self::Null),
                    _ => None,
                }
            }

            fn variants() -> &'static [Self] {
                &[$(Self::$variant,)+ Self::Null]
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match $crate::enumeration::CodeEnum::to_code(self) {
                    Some(code) => serializer.serialize_str(code),
                    None => serializer.serialize_none(),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                // Null is handled by the surrounding `Option` or element map.
                let code = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::enumeration::CodeEnum>::from_code(&code).ok_or_else(|| {
                    ::serde::de::Error::custom(format!(
                        "unknown {} code '{}'",
                        stringify!($name),
                        code
                    ))
                })
            }
        }
    };
}
