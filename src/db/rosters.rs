// src/db/rosters.rs

use crate::db::connection::Database;
use crate::domain::mapping::FieldMapping;
use crate::domain::record::RawRecord;
use crate::errors::ServerError;
use crate::ingest::Dataset;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

/// The persisted roster: raw data plus whatever the operator has
/// confirmed so far. Classification is recomputed from this on demand.
#[derive(Debug)]
pub struct StoredRoster {
    pub id: i64,
    pub dataset: Dataset,
    pub mapping: Option<FieldMapping>,
    pub threshold_days: i64,
}

/// Stores a freshly ingested roster and returns its id. The new roster
/// becomes the active one; mapping and threshold start unset/default.
pub fn insert_roster(db: &Database, dataset: &Dataset) -> Result<i64, ServerError> {
    let rows: Vec<&RawRecord> = dataset.rows.iter().map(|r| r.as_ref()).collect();
    let rows_json = serde_json::to_string(&rows)
        .map_err(|e| ServerError::DbError(format!("Serialize rows failed: {e}")))?;
    let columns_json = serde_json::to_string(&dataset.columns)
        .map_err(|e| ServerError::DbError(format!("Serialize columns failed: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO rosters (uploaded_at, columns_json, rows_json, threshold_days)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                Utc::now().to_rfc3339(),
                columns_json,
                rows_json,
                crate::domain::classify::DEFAULT_THRESHOLD_DAYS,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("Insert roster failed: {e}")))?;
        Ok(conn.last_insert_rowid())
    })
}

/// Loads the active (most recently uploaded) roster, if any.
pub fn load_current(db: &Database) -> Result<Option<StoredRoster>, ServerError> {
    let row = db.with_conn(|conn| {
        conn.query_row(
            "SELECT id, columns_json, rows_json, mapping_json, threshold_days
             FROM rosters ORDER BY id DESC LIMIT 1",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("Load roster failed: {e}")))
    })?;

    let Some((id, columns_json, rows_json, mapping_json, threshold_days)) = row else {
        return Ok(None);
    };

    let columns: Vec<String> = serde_json::from_str(&columns_json)
        .map_err(|e| ServerError::DbError(format!("Corrupt columns blob: {e}")))?;
    let rows: Vec<RawRecord> = serde_json::from_str(&rows_json)
        .map_err(|e| ServerError::DbError(format!("Corrupt rows blob: {e}")))?;
    let mapping: Option<FieldMapping> = match mapping_json {
        Some(json) => Some(
            serde_json::from_str(&json)
                .map_err(|e| ServerError::DbError(format!("Corrupt mapping blob: {e}")))?,
        ),
        None => None,
    };

    Ok(Some(StoredRoster {
        id,
        dataset: Dataset {
            rows: rows.into_iter().map(Arc::new).collect(),
            columns,
        },
        mapping,
        threshold_days,
    }))
}

/// Saves the operator-confirmed mapping and alert threshold for a roster.
pub fn save_mapping(
    db: &Database,
    roster_id: i64,
    mapping: &FieldMapping,
    threshold_days: i64,
) -> Result<(), ServerError> {
    let mapping_json = serde_json::to_string(mapping)
        .map_err(|e| ServerError::DbError(format!("Serialize mapping failed: {e}")))?;

    db.with_conn(|conn| {
        let updated = conn
            .execute(
                "UPDATE rosters SET mapping_json = ?1, threshold_days = ?2 WHERE id = ?3",
                params![mapping_json, threshold_days, roster_id],
            )
            .map_err(|e| ServerError::DbError(format!("Save mapping failed: {e}")))?;
        if updated == 0 {
            return Err(ServerError::DbError(format!(
                "Roster {roster_id} does not exist"
            )));
        }
        Ok(())
    })
}
