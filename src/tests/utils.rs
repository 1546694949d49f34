use crate::db::connection::{init_db, Database};
use crate::domain::record::{CellValue, RawRecord};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh test database using the production schema
pub fn make_db(prefix: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn number(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// Builds one roster row from (column, cell) pairs.
pub fn row(cells: &[(&str, CellValue)]) -> Arc<RawRecord> {
    Arc::new(
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}
