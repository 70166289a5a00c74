use fhir_hapi as hapi;
use fhir_proto as proto;

resource! {
    hapi::Organization => proto::Organization {
        identifier, active, r#type, name, alias, telecom, address, part_of, contact, endpoint,
    }
}

composite! {
    hapi::OrganizationContact => proto::organization::Contact {
        extension, modifier_extension, purpose, name, telecom, address,
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConverterConfig, ToHapi, ToProto};
    use fhir_hapi::{
        Address, AddressUse, ContactPoint, ContactPointSystem, Enumeration, Organization,
        OrganizationContact, StringType,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn organization_round_trips() {
        let organization = Organization {
            id: Some("org-1".to_string()),
            name: Some(StringType::new("Acme Health")),
            alias: vec![StringType::new("Acme"), StringType::new("AH")],
            telecom: vec![ContactPoint {
                system: Some(Enumeration::new(ContactPointSystem::Phone)),
                value: Some(StringType::new("0161 496 0000")),
                ..ContactPoint::default()
            }],
            contact: vec![OrganizationContact {
                address: Some(Address {
                    r#use: Some(Enumeration::new(AddressUse::Work)),
                    city: Some(StringType::new("Manchester")),
                    ..Address::default()
                }),
                ..OrganizationContact::default()
            }],
            ..Organization::default()
        };
        let config = ConverterConfig::default();

        let proto = organization.to_proto(&config).expect("to proto");
        assert_eq!(proto.alias.len(), 2);
        assert_eq!(proto.alias[1].value, "AH");

        assert_eq!(proto.to_hapi(&config).expect("to hapi"), organization);
    }
}
