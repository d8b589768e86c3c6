// FICHIER : dtoforge/tests/generator_suite/catalog_tests.rs

use crate::common::init_env;
use dtoforge::{Catalog, DtoItem};

#[test]
fn test_catalog_table_is_closed_and_ordered() {
    init_env();

    let items = DtoItem::all();
    assert_eq!(items.len(), 15, "La table compte quinze rubriques");

    for (expected_code, item) in items.iter().enumerate() {
        assert_eq!(
            item.code(),
            expected_code as i32,
            "Les codes doivent être denses et ordonnés"
        );
    }
}

#[test]
fn test_catalog_lookup_roundtrip_and_rejection() {
    init_env();

    assert_eq!(DtoItem::from_code(8), Some(DtoItem::VariableName));
    assert_eq!(DtoItem::from_code(0), Some(DtoItem::PhysicalName));
    assert_eq!(DtoItem::from_code(15), None, "15 n'appartient pas à la table");

    let err = DtoItem::require_code(42).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("42"), "Le message doit citer le code fautif");
    assert!(message.contains("dto_item"), "Le message doit citer la table");
}

#[test]
fn test_catalog_names_follow_exchange_format() {
    init_env();

    assert_eq!(DtoItem::PhysicalName.as_str(), "physical_name");
    assert_eq!(DtoItem::InitialValue.as_str(), "initial_value");

    // La forme sérialisée et le nom technique ne doivent jamais diverger
    let json = serde_json::to_string(&DtoItem::CreatedAt).unwrap();
    assert_eq!(json, "\"created_at\"");
}
