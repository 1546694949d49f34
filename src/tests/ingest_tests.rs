use crate::domain::record::CellValue;
use crate::errors::ServerError;
use crate::ingest::dataset_from_json;
use crate::tests::utils::{number, text};

#[test]
fn rows_and_observed_columns_come_back() {
    let payload = br#"[
        {"Piloto": "GOMEZ", "Vencimiento": 45000, "Estado": null},
        {"Piloto": "RUIZ", "Vencimiento": "05/03/2025", "Base": "EZE"}
    ]"#;

    let dataset = dataset_from_json(payload).unwrap();
    assert_eq!(dataset.rows.len(), 2);

    // Every header seen across the rows is observed exactly once.
    let mut cols = dataset.columns.clone();
    cols.sort();
    assert_eq!(cols, vec!["Base", "Estado", "Piloto", "Vencimiento"]);

    assert_eq!(dataset.rows[0].get("Piloto"), &text("GOMEZ"));
    assert_eq!(dataset.rows[0].get("Vencimiento"), &number(45000.0));
    assert_eq!(dataset.rows[0].get("Estado"), &CellValue::Empty);
    // Absent key reads the same as an explicit null.
    assert_eq!(dataset.rows[0].get("Base"), &CellValue::Empty);
}

#[test]
fn booleans_and_nested_values_coerce_to_text() {
    let payload = br#"[{"Activo": true, "Extra": {"a": 1}}]"#;
    let dataset = dataset_from_json(payload).unwrap();
    assert_eq!(dataset.rows[0].get("Activo"), &text("true"));
    assert!(matches!(
        dataset.rows[0].get("Extra"),
        CellValue::Text(_)
    ));
}

#[test]
fn empty_array_is_a_valid_empty_roster() {
    let dataset = dataset_from_json(b"[]").unwrap();
    assert!(dataset.rows.is_empty());
    assert!(dataset.columns.is_empty());
}

#[test]
fn non_array_payloads_are_rejected() {
    assert!(matches!(
        dataset_from_json(b"{\"Piloto\": \"X\"}"),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        dataset_from_json(b"not json"),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        dataset_from_json(b"[1, 2]"),
        Err(ServerError::BadRequest(_))
    ));
}
