// src/ingest.rs
//
// Adapter for the spreadsheet-parsing collaborator's output shape: a JSON
// array of row objects (string / number / null cells) becomes a Dataset of
// RawRecords plus the observed header names. Actual container parsing
// (xlsx, csv, ...) happens upstream and is not this service's concern.

use crate::domain::record::{CellValue, RawRecord};
use crate::errors::ServerError;
use serde_json::Value;
use std::sync::Arc;

/// An ingested roster: the raw rows plus the header names observed across
/// them, in first-seen order. Columns only feed the mapping step.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Arc<RawRecord>>,
    pub columns: Vec<String>,
}

fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        Value::Bool(b) => CellValue::Text(b.to_string()),
        // Nested values should not appear in sheet rows; keep their JSON
        // form as text rather than dropping the cell.
        other => CellValue::Text(other.to_string()),
    }
}

/// Parses an uploaded roster payload. Cell-level oddities are coerced to
/// text; only a payload that is not an array of objects is rejected.
pub fn dataset_from_json(raw: &[u8]) -> Result<Dataset, ServerError> {
    let parsed: Value = serde_json::from_slice(raw)
        .map_err(|e| ServerError::BadRequest(format!("Invalid roster payload: {e}")))?;

    let Value::Array(items) = parsed else {
        return Err(ServerError::BadRequest(
            "Roster payload must be a JSON array of row objects".into(),
        ));
    };

    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<Arc<RawRecord>> = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let Value::Object(cells) = item else {
            return Err(ServerError::BadRequest(format!(
                "Roster row {i} is not an object"
            )));
        };

        for key in cells.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }

        let record: RawRecord = cells
            .iter()
            .map(|(k, v)| (k.clone(), cell_from_json(v)))
            .collect();
        rows.push(Arc::new(record));
    }

    Ok(Dataset { rows, columns })
}
