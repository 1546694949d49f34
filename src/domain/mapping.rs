// src/domain/mapping.rs

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

/// Binds the four logical roster fields to raw column names. `name` and
/// `expiration` are required; `status` and `license` are optional and
/// `None` (or empty) simply disables their lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub name: String,
    pub expiration: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl FieldMapping {
    /// Status column name, if one is mapped and non-empty.
    pub fn status_column(&self) -> Option<&str> {
        self.status.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// License column name, if one is mapped and non-empty.
    pub fn license_column(&self) -> Option<&str> {
        self.license.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Precondition for classification: both required fields must be set.
    pub fn require_complete(&self) -> Result<(), ServerError> {
        if self.name.trim().is_empty() {
            return Err(ServerError::MappingError(
                "name column is not mapped".into(),
            ));
        }
        if self.expiration.trim().is_empty() {
            return Err(ServerError::MappingError(
                "expiration column is not mapped".into(),
            ));
        }
        Ok(())
    }

    /// Checks completeness and that every mapped name is an observed
    /// column of the roster.
    pub fn validate_against(&self, columns: &[String]) -> Result<(), ServerError> {
        self.require_complete()?;

        let known = |col: &str| columns.iter().any(|c| c == col);
        for col in [Some(self.name.as_str()), Some(self.expiration.as_str())]
            .into_iter()
            .flatten()
            .chain(self.status_column())
            .chain(self.license_column())
        {
            if !known(col) {
                return Err(ServerError::MappingError(format!(
                    "mapped column '{col}' does not exist in the roster"
                )));
            }
        }
        Ok(())
    }

    /// Best-effort auto-binding from header names, mirroring what an
    /// operator would pick for the usual Spanish-language rosters.
    pub fn guess(columns: &[String]) -> FieldMapping {
        let mut mapping = FieldMapping::default();
        for col in selectable_columns(columns) {
            let lower = col.to_lowercase();
            if mapping.name.is_empty()
                && (lower.contains("nombre") || lower.contains("piloto") || lower.contains("apellido"))
            {
                mapping.name = col.clone();
            }
            if mapping.expiration.is_empty()
                && (lower.contains("venc") || lower.contains("fecha") || lower.contains("cma"))
            {
                mapping.expiration = col.clone();
            }
            if mapping.status.is_none()
                && (lower.contains("estado") || lower.contains("status") || lower.contains("condicion"))
            {
                mapping.status = Some(col.clone());
            }
            if mapping.license.is_none() && (lower.contains("licencia") || lower.contains("nro")) {
                mapping.license = Some(col.clone());
            }
        }
        mapping
    }
}

/// Columns worth offering to the operator: drops blank headers and the
/// `__EMPTY` placeholders spreadsheet parsers emit for headerless columns.
pub fn selectable_columns(columns: &[String]) -> Vec<&String> {
    columns
        .iter()
        .filter(|c| {
            let upper = c.trim().to_uppercase();
            !upper.is_empty() && !upper.starts_with("__EMPTY") && upper != "EMPTY"
        })
        .collect()
}
