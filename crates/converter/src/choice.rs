//! Choice (`[x]`) element dispatch.
//!
//! On the business-object side a choice element is an open [`DataType`]; on the wire it is a
//! `…X` wrapper whose `oneof choice` lists only the types the element declares. Each field
//! gets a pair of functions generated by [`choice_type!`] from its variant table.

use crate::config::ChoicePolicy;
use crate::{ConvertError, ConvertResult, ConverterConfig};
use fhir_hapi::DataType;

/// Handle a business-object value whose type the choice element does not declare.
pub(crate) fn unmatched<W: Default>(
    field: &'static str,
    value: &DataType,
    config: &ConverterConfig,
) -> ConvertResult<W> {
    match config.choice_policy() {
        ChoicePolicy::Fail => Err(ConvertError::InvalidChoiceType {
            field,
            found: Some(value.fhir_type()),
        }),
        ChoicePolicy::EmptyMessage => {
            tracing::warn!(
                field,
                found = value.fhir_type(),
                "undeclared choice type; emitting empty choice"
            );
            Ok(W::default())
        }
    }
}

pub(crate) fn unset(field: &'static str) -> ConvertError {
    ConvertError::InvalidChoiceType { field, found: None }
}

/// Generate `$to_proto(&DataType) -> Wrapper` and `$to_hapi(&Wrapper) -> DataType` for one
/// choice element.
///
/// `$module` is the prost module holding the `Choice` oneof for `$wrapper`. Each table entry
/// is `DataTypeVariant <=> ChoiceVariant`.
macro_rules! choice_type {
    (
        $to_proto:ident, $to_hapi:ident, $field:literal, $wrapper:ident, $module:ident {
            $($data:ident <=> $oneof:ident,)+
        }
    ) => {
        #[allow(unreachable_patterns)]
        pub(crate) fn $to_proto(
            value: &fhir_hapi::DataType,
            config: &$crate::ConverterConfig,
        ) -> $crate::ConvertResult<$wrapper> {
            use $crate::ToProto as _;

            // Boxed variants convert through their contents by auto-deref.
            let choice = match value {
                $(fhir_hapi::DataType::$data(inner) => {
                    $module::Choice::$oneof(inner.to_proto(config)?)
                })+
                other => return $crate::choice::unmatched($field, other, config),
            };
            Ok($wrapper {
                choice: Some(choice),
            })
        }

        pub(crate) fn $to_hapi(
            value: &$wrapper,
            config: &$crate::ConverterConfig,
        ) -> $crate::ConvertResult<fhir_hapi::DataType> {
            match &value.choice {
                $(Some($module::Choice::$oneof(inner)) => Ok(fhir_hapi::DataType::$data(
                    $crate::ToHapi::to_hapi(inner, config)?.into(),
                )),)+
                None => Err($crate::choice::unset($field)),
            }
        }
    };
}
