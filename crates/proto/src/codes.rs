//! Code-system messages for the bound value sets.

code_system! {
    AdministrativeGenderCode, administrative_gender_code, "administrative_gender_code::Value" {
        Male = 1, "MALE";
        Female = 2, "FEMALE";
        Other = 3, "OTHER";
        Unknown = 4, "UNKNOWN";
    }
}

code_system! {
    NameUseCode, name_use_code, "name_use_code::Value" {
        Usual = 1, "USUAL";
        Official = 2, "OFFICIAL";
        Temp = 3, "TEMP";
        Nickname = 4, "NICKNAME";
        Anonymous = 5, "ANONYMOUS";
        Old = 6, "OLD";
        Maiden = 7, "MAIDEN";
    }
}

code_system! {
    AddressUseCode, address_use_code, "address_use_code::Value" {
        Home = 1, "HOME";
        Work = 2, "WORK";
        Temp = 3, "TEMP";
        Old = 4, "OLD";
        Billing = 5, "BILLING";
    }
}

code_system! {
    AddressTypeCode, address_type_code, "address_type_code::Value" {
        Postal = 1, "POSTAL";
        Physical = 2, "PHYSICAL";
        Both = 3, "BOTH";
    }
}

code_system! {
    ContactPointSystemCode, contact_point_system_code, "contact_point_system_code::Value" {
        Phone = 1, "PHONE";
        Fax = 2, "FAX";
        Email = 3, "EMAIL";
        Pager = 4, "PAGER";
        Url = 5, "URL";
        Sms = 6, "SMS";
        Other = 7, "OTHER";
    }
}

code_system! {
    ContactPointUseCode, contact_point_use_code, "contact_point_use_code::Value" {
        Home = 1, "HOME";
        Work = 2, "WORK";
        Temp = 3, "TEMP";
        Old = 4, "OLD";
        Mobile = 5, "MOBILE";
    }
}

code_system! {
    IdentifierUseCode, identifier_use_code, "identifier_use_code::Value" {
        Usual = 1, "USUAL";
        Official = 2, "OFFICIAL";
        Temp = 3, "TEMP";
        Secondary = 4, "SECONDARY";
        Old = 5, "OLD";
    }
}

code_system! {
    /// Comparator codes are symbols, so every value carries its original code.
    QuantityComparatorCode, quantity_comparator_code, "quantity_comparator_code::Value" {
        LessThan = 1, "LESS_THAN", "<";
        LessThanOrEqualTo = 2, "LESS_THAN_OR_EQUAL_TO", "<=";
        GreaterThanOrEqualTo = 3, "GREATER_THAN_OR_EQUAL_TO", ">=";
        GreaterThan = 4, "GREATER_THAN", ">";
    }
}

code_system! {
    NarrativeStatusCode, narrative_status_code, "narrative_status_code::Value" {
        Generated = 1, "GENERATED";
        Extensions = 2, "EXTENSIONS";
        Additional = 3, "ADDITIONAL";
        Empty = 4, "EMPTY";
    }
}

code_system! {
    LinkTypeCode, link_type_code, "link_type_code::Value" {
        ReplacedBy = 1, "REPLACED_BY";
        Replaces = 2, "REPLACES";
        Refer = 3, "REFER";
        SeeAlso = 4, "SEEALSO";
    }
}

code_system! {
    ObservationStatusCode, observation_status_code, "observation_status_code::Value" {
        Registered = 1, "REGISTERED";
        Preliminary = 2, "PRELIMINARY";
        Final = 3, "FINAL";
        Amended = 4, "AMENDED";
        Corrected = 5, "CORRECTED";
        Cancelled = 6, "CANCELLED";
        EnteredInError = 7, "ENTERED_IN_ERROR";
        Unknown = 8, "UNKNOWN";
    }
}

code_system! {
    EventStatusCode, event_status_code, "event_status_code::Value" {
        Preparation = 1, "PREPARATION";
        InProgress = 2, "IN_PROGRESS";
        NotDone = 3, "NOT_DONE";
        OnHold = 4, "ON_HOLD";
        Stopped = 5, "STOPPED";
        Completed = 6, "COMPLETED";
        EnteredInError = 7, "ENTERED_IN_ERROR";
        Unknown = 8, "UNKNOWN";
    }
}

code_system! {
    MedicationStatusCode, medication_status_code, "medication_status_code::Value" {
        Active = 1, "ACTIVE";
        Inactive = 2, "INACTIVE";
        EnteredInError = 3, "ENTERED_IN_ERROR";
    }
}

code_system! {
    SubscriptionStatusCode, subscription_status_code, "subscription_status_code::Value" {
        Requested = 1, "REQUESTED";
        Active = 2, "ACTIVE";
        Error = 3, "ERROR";
        Off = 4, "OFF";
    }
}

code_system! {
    SubscriptionChannelTypeCode, subscription_channel_type_code, "subscription_channel_type_code::Value" {
        RestHook = 1, "REST_HOOK";
        Websocket = 2, "WEBSOCKET";
        Email = 3, "EMAIL";
        Sms = 4, "SMS";
        Message = 5, "MESSAGE";
    }
}

code_system! {
    UnitsOfTimeCode, units_of_time_code, "units_of_time_code::Value" {
        S = 1, "S";
        Min = 2, "MIN";
        H = 3, "H";
        D = 4, "D";
        Wk = 5, "WK";
        Mo = 6, "MO";
        A = 7, "A";
    }
}

code_system! {
    DaysOfWeekCode, days_of_week_code, "days_of_week_code::Value" {
        Mon = 1, "MON";
        Tue = 2, "TUE";
        Wed = 3, "WED";
        Thu = 4, "THU";
        Fri = 5, "FRI";
        Sat = 6, "SAT";
        Sun = 7, "SUN";
    }
}

code_system! {
    /// Dotted codes (`MORN.early`) carry their original code.
    EventTimingCode, event_timing_code, "event_timing_code::Value" {
        Morn = 1, "MORN";
        MornEarly = 2, "MORN_EARLY", "MORN.early";
        MornLate = 3, "MORN_LATE", "MORN.late";
        Noon = 4, "NOON";
        Aft = 5, "AFT";
        AftEarly = 6, "AFT_EARLY", "AFT.early";
        AftLate = 7, "AFT_LATE", "AFT.late";
        Eve = 8, "EVE";
        EveEarly = 9, "EVE_EARLY", "EVE.early";
        EveLate = 10, "EVE_LATE", "EVE.late";
        Night = 11, "NIGHT";
        Phs = 12, "PHS";
        Hs = 13, "HS";
        Wake = 14, "WAKE";
        C = 15, "C";
        Cm = 16, "CM";
        Cd = 17, "CD";
        Cv = 18, "CV";
        Ac = 19, "AC";
        Acm = 20, "ACM";
        Acd = 21, "ACD";
        Acv = 22, "ACV";
        Pc = 23, "PC";
        Pcm = 24, "PCM";
        Pcd = 25, "PCD";
        Pcv = 26, "PCV";
    }
}

code_system! {
    OperationParameterUseCode, operation_parameter_use_code, "operation_parameter_use_code::Value" {
        In = 1, "IN";
        Out = 2, "OUT";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_system::{ProtoCode, UNRECOGNIZED};
    use pretty_assertions::assert_eq;
    use prost::Message;

    #[test]
    fn identifiers_round_trip() {
        let code = ObservationStatusCode::from_identifier("ENTERED_IN_ERROR").expect("known");
        assert_eq!(code.value(), observation_status_code::Value::EnteredInError);
        assert_eq!(code.identifier(), "ENTERED_IN_ERROR");
        assert_eq!(code.original_code(), None);
    }

    #[test]
    fn zero_value_is_invalid_uninitialized() {
        let code = AdministrativeGenderCode::default();
        assert_eq!(code.identifier(), "INVALID_UNINITIALIZED");
        assert_eq!(
            AdministrativeGenderCode::from_identifier("INVALID_UNINITIALIZED"),
            Some(code)
        );
    }

    #[test]
    fn out_of_range_values_are_unrecognized() {
        let code = AdministrativeGenderCode {
            value: 42,
            ..Default::default()
        };
        assert_eq!(code.identifier(), UNRECOGNIZED);
        assert_eq!(code.original_code(), None);

        let decoded =
            AdministrativeGenderCode::decode(code.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded.value, 42);
        assert_eq!(decoded.identifier(), UNRECOGNIZED);
        assert_eq!(AdministrativeGenderCode::from_identifier(UNRECOGNIZED), None);
        assert_eq!(AdministrativeGenderCode::from_identifier("male"), None);
    }

    #[test]
    fn original_codes_resolve_symbols() {
        let code = QuantityComparatorCode::from_original_code("<=").expect("annotated");
        assert_eq!(code.identifier(), "LESS_THAN_OR_EQUAL_TO");
        assert_eq!(code.original_code(), Some("<="));

        let timing = EventTimingCode::from_original_code("AFT.late").expect("annotated");
        assert_eq!(timing.value(), event_timing_code::Value::AftLate);
        assert!(EventTimingCode::from_original_code("AFT").is_none());
    }

    #[test]
    fn element_metadata_survives_encoding() {
        let code = NameUseCode::of(name_use_code::Value::Maiden)
            .with_element(Some(crate::FhirString::of("n1")), Vec::new());
        let decoded = NameUseCode::decode(code.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded.element_id().map(|id| id.value.as_str()), Some("n1"));
        assert_eq!(decoded.identifier(), "MAIDEN");
    }
}
