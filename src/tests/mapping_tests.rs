use crate::domain::mapping::{selectable_columns, FieldMapping};
use crate::errors::ServerError;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn guess_binds_the_usual_roster_headers() {
    let cols = columns(&[
        "Nro Legajo",
        "Apellido y Nombre",
        "Vencimiento CMA",
        "Estado",
    ]);

    let guessed = FieldMapping::guess(&cols);
    assert_eq!(guessed.name, "Apellido y Nombre");
    assert_eq!(guessed.expiration, "Vencimiento CMA");
    assert_eq!(guessed.status.as_deref(), Some("Estado"));
    // "Nro Legajo" looks like a license-number column.
    assert_eq!(guessed.license.as_deref(), Some("Nro Legajo"));
}

#[test]
fn guess_leaves_unmatched_fields_unset() {
    let cols = columns(&["Col A", "Col B"]);
    let guessed = FieldMapping::guess(&cols);
    assert!(guessed.name.is_empty());
    assert!(guessed.expiration.is_empty());
    assert!(guessed.status.is_none());
    assert!(guessed.license.is_none());
}

#[test]
fn placeholder_headers_are_not_selectable() {
    let cols = columns(&["Piloto", "__EMPTY", "__EMPTY_1", "  ", "EMPTY"]);
    let visible: Vec<&str> = selectable_columns(&cols)
        .into_iter()
        .map(String::as_str)
        .collect();
    assert_eq!(visible, vec!["Piloto"]);
}

#[test]
fn validation_requires_both_mandatory_fields() {
    let mapping = FieldMapping {
        expiration: "Vencimiento".into(),
        ..FieldMapping::default()
    };
    assert!(matches!(
        mapping.require_complete(),
        Err(ServerError::MappingError(_))
    ));
}

#[test]
fn validation_rejects_columns_the_roster_does_not_have() {
    let cols = columns(&["Piloto", "Vencimiento"]);
    let mapping = FieldMapping {
        name: "Piloto".into(),
        expiration: "Fecha".into(),
        status: None,
        license: None,
    };
    assert!(matches!(
        mapping.validate_against(&cols),
        Err(ServerError::MappingError(_))
    ));
}

#[test]
fn empty_optional_columns_read_as_unmapped() {
    let mapping = FieldMapping {
        name: "Piloto".into(),
        expiration: "Vencimiento".into(),
        status: Some("".into()),
        license: Some("  ".into()),
    };
    assert_eq!(mapping.status_column(), None);
    assert_eq!(mapping.license_column(), None);

    let cols = columns(&["Piloto", "Vencimiento"]);
    assert!(mapping.validate_against(&cols).is_ok());
}
