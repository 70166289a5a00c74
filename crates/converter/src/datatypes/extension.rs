//! `Extension`, whose `value[x]` may hold any datatype.

use crate::primitives::{element_id_to_hapi, element_id_to_proto};
use crate::{ConvertResult, ConverterConfig, ToHapi, ToProto};
use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::extension::{value_x, ValueX};

choice_type! {
    value_to_proto, value_to_hapi, "Extension.value[x]", ValueX, value_x {
        Base64Binary <=> Base64Binary,
        Boolean <=> Boolean,
        Canonical <=> Canonical,
        Code <=> Code,
        Date <=> Date,
        DateTime <=> DateTime,
        Decimal <=> Decimal,
        Id <=> Id,
        Instant <=> Instant,
        Integer <=> Integer,
        Markdown <=> Markdown,
        Oid <=> Oid,
        PositiveInt <=> PositiveInt,
        String <=> StringValue,
        Time <=> Time,
        UnsignedInt <=> UnsignedInt,
        Uri <=> Uri,
        Url <=> Url,
        Uuid <=> Uuid,
        Address <=> Address,
        Age <=> Age,
        Annotation <=> Annotation,
        Attachment <=> Attachment,
        CodeableConcept <=> CodeableConcept,
        Coding <=> Coding,
        ContactPoint <=> ContactPoint,
        Duration <=> Duration,
        HumanName <=> HumanName,
        Identifier <=> Identifier,
        Period <=> Period,
        Quantity <=> Quantity,
        Range <=> Range,
        Ratio <=> Ratio,
        Reference <=> Reference,
        SampledData <=> SampledData,
        Timing <=> Timing,
        ParameterDefinition <=> ParameterDefinition,
        Meta <=> Meta,
    }
}

impl ToProto for hapi::Extension {
    type Output = proto::Extension;

    fn to_proto(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(proto::Extension {
            id: element_id_to_proto(&self.id),
            extension: self.extension.to_proto(config)?,
            url: self.url.as_ref().map(proto::Uri::of),
            value: self
                .value
                .as_ref()
                .map(|value| value_to_proto(value, config))
                .transpose()?,
        })
    }
}

impl ToHapi for proto::Extension {
    type Output = hapi::Extension;

    fn to_hapi(&self, config: &ConverterConfig) -> ConvertResult<Self::Output> {
        Ok(hapi::Extension {
            id: element_id_to_hapi(self.id.as_ref()),
            extension: self.extension.to_hapi(config)?,
            url: self
                .url
                .as_ref()
                .and_then(|url| crate::primitives::non_empty(&url.value)),
            value: self
                .value
                .as_ref()
                .map(|value| value_to_hapi(value, config))
                .transpose()?,
        })
    }
}
