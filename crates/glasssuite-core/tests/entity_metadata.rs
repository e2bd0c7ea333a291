use glasssuite_core::{CellValue, EntityKind, Error, FieldType, entity_fields, lookup_field};

#[test]
fn every_entity_has_five_fields_with_leading_id() {
    for kind in EntityKind::ALL {
        let fields = entity_fields(kind);
        assert_eq!(fields.len(), 5, "{kind} field count");
        assert_eq!(fields[0].id, "id");
    }
}

#[test]
fn field_lookup_is_total_over_the_catalog() {
    for kind in EntityKind::ALL {
        for def in entity_fields(kind) {
            let found = lookup_field(kind, def.id).expect("catalog field resolves");
            assert_eq!(found.label, def.label);
        }
    }
    assert!(lookup_field(EntityKind::Orders, "country").is_none());
}

#[test]
fn table_names_are_lowercased_labels() {
    assert_eq!(EntityKind::Customers.table_name(), "customers");
    assert_eq!(EntityKind::Invoices.table_name(), "invoices");
    assert_eq!(EntityKind::Customers.label(), "Customers");
}

#[test]
fn entity_parses_case_insensitively() {
    let parsed: EntityKind = "orders".parse().expect("parse entity");
    assert_eq!(parsed, EntityKind::Orders);
    let parsed: EntityKind = "Users".parse().expect("parse entity");
    assert_eq!(parsed, EntityKind::Users);
    let err = "accounts".parse::<EntityKind>().unwrap_err();
    assert!(matches!(err, Error::UnknownEntity(_)));
}

#[test]
fn entity_and_field_type_serialize_as_catalog_strings() {
    assert_eq!(
        serde_json::to_string(&EntityKind::Invoices).expect("serialize entity"),
        "\"Invoices\""
    );
    assert_eq!(
        serde_json::to_string(&FieldType::Boolean).expect("serialize field type"),
        "\"boolean\""
    );
}

#[test]
fn cell_values_order_within_their_type() {
    let a = CellValue::Float(12.5);
    let b = CellValue::Int(13);
    assert!(a.compare(&b).is_lt());
    assert!(
        CellValue::Text("alpha".into())
            .compare(&CellValue::Text("beta".into()))
            .is_lt()
    );
    assert_eq!(CellValue::Float(9800.5).to_csv(), "9800.50");
    assert!(CellValue::Text("Ava Chen".into()).matches_filter("chen"));
}
