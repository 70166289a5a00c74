use fhir_hapi as hapi;
use fhir_proto as proto;
use proto::medication::ingredient::{item_x, ItemX};

choice_type! {
    item_to_proto, item_to_hapi, "Medication.ingredient.item[x]", ItemX, item_x {
        CodeableConcept <=> CodeableConcept,
        Reference <=> Reference,
    }
}

resource! {
    hapi::Medication => proto::Medication {
        identifier, code, status, manufacturer, form, amount, ingredient, batch,
    }
}

composite! {
    hapi::MedicationIngredient => proto::medication::Ingredient {
        extension, modifier_extension, is_active, strength;
        item: item_to_proto / item_to_hapi,
    }
    hapi::MedicationBatch => proto::medication::Batch {
        extension, modifier_extension, lot_number, expiration_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConverterConfig, ToHapi, ToProto};
    use hapi::{
        BooleanType, DataType, DateTimeType, Enumeration, Medication, MedicationBatch,
        MedicationIngredient, MedicationStatus, Reference, StringType,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn ingredient_reference_populates_only_the_reference_variant() {
        let medication = Medication {
            id: Some("med-1".to_string()),
            status: Some(Enumeration::new(MedicationStatus::Active)),
            ingredient: vec![MedicationIngredient {
                item: Some(DataType::Reference(Reference::new("Substance/paracetamol"))),
                is_active: Some(BooleanType::new(true)),
                ..MedicationIngredient::default()
            }],
            batch: Some(MedicationBatch {
                lot_number: Some(StringType::new("B-1044")),
                expiration_date: Some(DateTimeType::parse("2027-01").expect("expiry")),
                ..MedicationBatch::default()
            }),
            ..Medication::default()
        };
        let config = ConverterConfig::default();

        let proto = medication.to_proto(&config).expect("to proto");
        assert!(matches!(
            proto.ingredient[0].item.as_ref().and_then(|i| i.choice.as_ref()),
            Some(item_x::Choice::Reference(_))
        ));
        assert_eq!(
            proto
                .batch
                .as_ref()
                .and_then(|b| b.expiration_date.as_ref())
                .map(|d| d.precision()),
            Some(proto::date_time::Precision::Month)
        );

        assert_eq!(proto.to_hapi(&config).expect("to hapi"), medication);
    }
}
