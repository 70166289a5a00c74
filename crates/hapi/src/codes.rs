//! Code enums for the value sets bound to supported elements.

code_enum! {
    /// The gender of a person used for administrative purposes.
    AdministrativeGender {
        Male => "male", "MALE";
        Female => "female", "FEMALE";
        Other => "other", "OTHER";
        Unknown => "unknown", "UNKNOWN";
    }
}

code_enum! {
    /// The use of a human name.
    NameUse {
        Usual => "usual", "USUAL";
        Official => "official", "OFFICIAL";
        Temp => "temp", "TEMP";
        Nickname => "nickname", "NICKNAME";
        Anonymous => "anonymous", "ANONYMOUS";
        Old => "old", "OLD";
        Maiden => "maiden", "MAIDEN";
    }
}

code_enum! {
    /// The use of an address.
    AddressUse {
        Home => "home", "HOME";
        Work => "work", "WORK";
        Temp => "temp", "TEMP";
        Old => "old", "OLD";
        Billing => "billing", "BILLING";
    }
}

code_enum! {
    /// The type of an address (physical / postal).
    AddressType {
        Postal => "postal", "POSTAL";
        Physical => "physical", "PHYSICAL";
        Both => "both", "BOTH";
    }
}

code_enum! {
    /// Telecommunications form for a contact point.
    ContactPointSystem {
        Phone => "phone", "PHONE";
        Fax => "fax", "FAX";
        Email => "email", "EMAIL";
        Pager => "pager", "PAGER";
        Url => "url", "URL";
        Sms => "sms", "SMS";
        Other => "other", "OTHER";
    }
}

code_enum! {
    /// Use of a contact point.
    ContactPointUse {
        Home => "home", "HOME";
        Work => "work", "WORK";
        Temp => "temp", "TEMP";
        Old => "old", "OLD";
        Mobile => "mobile", "MOBILE";
    }
}

code_enum! {
    /// Purpose of an identifier.
    IdentifierUse {
        Usual => "usual", "USUAL";
        Official => "official", "OFFICIAL";
        Temp => "temp", "TEMP";
        Secondary => "secondary", "SECONDARY";
        Old => "old", "OLD";
    }
}

code_enum! {
    /// How a quantity value should be understood relative to the stated value.
    ///
    /// The codes are symbols, so constant names do not follow the hyphen-stripping rule.
    QuantityComparator {
        LessThan => "<", "LESS_THAN";
        LessOrEqual => "<=", "LESS_OR_EQUAL";
        GreaterOrEqual => ">=", "GREATER_OR_EQUAL";
        GreaterThan => ">", "GREATER_THAN";
    }
}

code_enum! {
    /// Status of a narrative.
    NarrativeStatus {
        Generated => "generated", "GENERATED";
        Extensions => "extensions", "EXTENSIONS";
        Additional => "additional", "ADDITIONAL";
        Empty => "empty", "EMPTY";
    }
}

code_enum! {
    /// Type of link between two patient resources.
    LinkType {
        ReplacedBy => "replaced-by", "REPLACEDBY";
        Replaces => "replaces", "REPLACES";
        Refer => "refer", "REFER";
        SeeAlso => "seealso", "SEEALSO";
    }
}

code_enum! {
    /// Status of an observation result.
    ObservationStatus {
        Registered => "registered", "REGISTERED";
        Preliminary => "preliminary", "PRELIMINARY";
        Final => "final", "FINAL";
        Amended => "amended", "AMENDED";
        Corrected => "corrected", "CORRECTED";
        Cancelled => "cancelled", "CANCELLED";
        EnteredInError => "entered-in-error", "ENTEREDINERROR";
        Unknown => "unknown", "UNKNOWN";
    }
}

code_enum! {
    /// Lifecycle status of an event (used by `Media.status`).
    EventStatus {
        Preparation => "preparation", "PREPARATION";
        InProgress => "in-progress", "INPROGRESS";
        NotDone => "not-done", "NOTDONE";
        OnHold => "on-hold", "ONHOLD";
        Stopped => "stopped", "STOPPED";
        Completed => "completed", "COMPLETED";
        EnteredInError => "entered-in-error", "ENTEREDINERROR";
        Unknown => "unknown", "UNKNOWN";
    }
}

code_enum! {
    /// Status of a medication definition.
    MedicationStatus {
        Active => "active", "ACTIVE";
        Inactive => "inactive", "INACTIVE";
        EnteredInError => "entered-in-error", "ENTEREDINERROR";
    }
}

code_enum! {
    /// Status of a subscription.
    SubscriptionStatus {
        Requested => "requested", "REQUESTED";
        Active => "active", "ACTIVE";
        Error => "error", "ERROR";
        Off => "off", "OFF";
    }
}

code_enum! {
    /// Notification channel of a subscription.
    SubscriptionChannelType {
        RestHook => "rest-hook", "RESTHOOK";
        Websocket => "websocket", "WEBSOCKET";
        Email => "email", "EMAIL";
        Sms => "sms", "SMS";
        Message => "message", "MESSAGE";
    }
}

code_enum! {
    /// UCUM units of time used by timing schedules.
    UnitsOfTime {
        S => "s", "S";
        Min => "min", "MIN";
        H => "h", "H";
        D => "d", "D";
        Wk => "wk", "WK";
        Mo => "mo", "MO";
        A => "a", "A";
    }
}

code_enum! {
    /// Day of the week.
    DaysOfWeek {
        Mon => "mon", "MON";
        Tue => "tue", "TUE";
        Wed => "wed", "WED";
        Thu => "thu", "THU";
        Fri => "fri", "FRI";
        Sat => "sat", "SAT";
        Sun => "sun", "SUN";
    }
}

code_enum! {
    /// Real-world event relating to a schedule.
    ///
    /// Several codes contain a dot (`MORN.early`); their constant names use an underscore.
    EventTiming {
        Morn => "MORN", "MORN";
        MornEarly => "MORN.early", "MORN_EARLY";
        MornLate => "MORN.late", "MORN_LATE";
        Noon => "NOON", "NOON";
        Aft => "AFT", "AFT";
        AftEarly => "AFT.early", "AFT_EARLY";
        AftLate => "AFT.late", "AFT_LATE";
        Eve => "EVE", "EVE";
        EveEarly => "EVE.early", "EVE_EARLY";
        EveLate => "EVE.late", "EVE_LATE";
        Night => "NIGHT", "NIGHT";
        Phs => "PHS", "PHS";
        Hs => "HS", "HS";
        Wake => "WAKE", "WAKE";
        C => "C", "C";
        Cm => "CM", "CM";
        Cd => "CD", "CD";
        Cv => "CV", "CV";
        Ac => "AC", "AC";
        Acm => "ACM", "ACM";
        Acd => "ACD", "ACD";
        Acv => "ACV", "ACV";
        Pc => "PC", "PC";
        Pcm => "PCM", "PCM";
        Pcd => "PCD", "PCD";
        Pcv => "PCV", "PCV";
    }
}

code_enum! {
    /// Whether an operation parameter is an input or an output.
    OperationParameterUse {
        In => "in", "IN";
        Out => "out", "OUT";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeEnum;

    #[test]
    fn code_and_name_lookups_agree() {
        for status in ObservationStatus::variants() {
            assert_eq!(ObservationStatus::value_of(status.name()), Some(*status));
            if let Some(code) = status.to_code() {
                assert_eq!(ObservationStatus::from_code(code), Some(*status));
            }
        }
    }

    #[test]
    fn sentinel_is_default_and_named_null() {
        let gender = AdministrativeGender::default();
        assert!(gender.is_null());
        assert_eq!(gender.name(), "NULL");
        assert_eq!(gender.to_code(), None);
        assert_eq!(
            AdministrativeGender::value_of("NULL"),
            Some(AdministrativeGender::Null)
        );
    }

    #[test]
    fn hyphenated_codes_strip_separators_in_names() {
        assert_eq!(EventStatus::InProgress.name(), "INPROGRESS");
        assert_eq!(EventStatus::from_code("in-progress"), Some(EventStatus::InProgress));
        assert_eq!(LinkType::ReplacedBy.to_code(), Some("replaced-by"));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(AdministrativeGender::from_code("MALE"), None);
        assert_eq!(AdministrativeGender::value_of("male"), None);
    }
}
