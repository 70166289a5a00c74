//! Code-system messages.
//!
//! A code-system message wraps an `i32` holding a `Value` enum. Identifiers are the FHIR
//! code upper-cased with `-` replaced by `_`. Codes that cannot be written that way
//! (`<=`, `MORN.early`) carry their original FHIR code as an annotation.

use crate::datatypes::Extension;
use crate::primitives::FhirString;

/// Identifier of the zero value of every `Value` enum.
pub const INVALID_UNINITIALIZED: &str = "INVALID_UNINITIALIZED";

/// Identifier reported for an integer outside the `Value` enum.
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// Behaviour shared by every code-system message.
pub trait ProtoCode: prost::Message + Default + Clone {
    /// Message name (for example `AdministrativeGenderCode`).
    const SYSTEM: &'static str;

    /// Identifier of the held value; [`UNRECOGNIZED`] when the integer is out of range.
    fn identifier(&self) -> &'static str;

    /// Original FHIR code annotation of the held value, if it has one.
    fn original_code(&self) -> Option<&'static str>;

    /// Message holding the value named by `identifier` (including `INVALID_UNINITIALIZED`).
    fn from_identifier(identifier: &str) -> Option<Self>;

    /// Message holding the value annotated with `code`.
    fn from_original_code(code: &str) -> Option<Self>;

    fn element_id(&self) -> Option<&FhirString>;

    fn element_extension(&self) -> &[Extension];

    /// Replace the element `id` and extensions.
    fn with_element(self, id: Option<FhirString>, extension: Vec<Extension>) -> Self;
}

/// Declare a code-system message and its `Value` enum.
///
/// `code_system!(Name, module, "module::Value" { Variant = 1, "IDENT" [, "original"]; ... })`
macro_rules! code_system {
    (@original) => {
        None
    };
    (@original $code:literal) => {
        Some($code)
    };
    (
        $(#[$meta:meta])*
        $name:ident, $module:ident, $enum_path:tt {
            $($variant:ident = $num:literal, $ident:literal $(, $original:literal)?;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct $name {
            #[prost(enumeration = $enum_path, tag = "1")]
            pub value: i32,
            #[prost(message, optional, tag = "2")]
            pub id: Option<$crate::primitives::FhirString>,
            #[prost(message, repeated, tag = "3")]
            pub extension: Vec<$crate::datatypes::Extension>,
        }

        pub mod $module {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Value {
                InvalidUninitialized = 0,
                $($variant = $num,)+
            }

            impl Value {
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::InvalidUninitialized => $crate::code_system::INVALID_UNINITIALIZED,
                        $(Self::$variant => $ident,)+
                    }
                }

                pub fn from_str_name(value: &str) -> Option<Self> {
                    match value {
                        "INVALID_UNINITIALIZED" => Some(Self::InvalidUninitialized),
                        $($ident => Some(Self::$variant),)+
                        _ => None,
                    }
                }
            }
        }

        impl $name {
            pub fn of(value: $module::Value) -> Self {
                Self {
                    value: value as i32,
                    ..Self::default()
                }
            }
        }

        impl $crate::code_system::ProtoCode for $name {
            const SYSTEM: &'static str = stringify!($name);

            fn identifier(&self) -> &'static str {
                match $module::Value::try_from(self.value) {
                    Ok(value) => value.as_str_name(),
                    Err(_) => $crate::code_system::UNRECOGNIZED,
                }
            }

            fn original_code(&self) -> Option<&'static str> {
                match $module::Value::try_from(self.value) {
                    $(Ok($module::Value::$variant) => code_system!(@original $($original)?),)+
                    _ => None,
                }
            }

            fn from_identifier(identifier: &str) -> Option<Self> {
                $module::Value::from_str_name(identifier).map(Self::of)
            }

            #[allow(unused_variables)]
            fn from_original_code(code: &str) -> Option<Self> {
                $($(
                    if code == $original {
                        return Some(Self::of($module::Value::$variant));
                    }
                )?)+
                None
            }

            fn element_id(&self) -> Option<&$crate::primitives::FhirString> {
                self.id.as_ref()
            }

            fn element_extension(&self) -> &[$crate::datatypes::Extension] {
                &self.extension
            }

            fn with_element(
                mut self,
                id: Option<$crate::primitives::FhirString>,
                extension: Vec<$crate::datatypes::Extension>,
            ) -> Self {
                self.id = id;
                self.extension = extension;
                self
            }
        }
    };
}
