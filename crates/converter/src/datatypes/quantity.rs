//! Quantity profiles and the datatypes built from them.

use fhir_hapi as hapi;
use fhir_proto as proto;

composite! {
    hapi::Quantity => proto::Quantity {
        extension, value, comparator, unit, system, code,
    }
    hapi::Duration => proto::Duration {
        extension, value, comparator, unit, system, code,
    }
    hapi::Age => proto::Age {
        extension, value, comparator, unit, system, code,
    }
    hapi::SimpleQuantity => proto::SimpleQuantity {
        extension, value, unit, system, code,
    }
    hapi::Range => proto::Range {
        extension, low, high,
    }
    hapi::Ratio => proto::Ratio {
        extension, numerator, denominator,
    }
    hapi::SampledData => proto::SampledData {
        extension, origin, period, factor, lower_limit, upper_limit, dimensions, data,
    }
}
