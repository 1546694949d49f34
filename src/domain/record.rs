// src/domain/record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A single spreadsheet cell as the ingestion collaborator hands it over.
///
/// Untagged serde representation maps straight onto the JSON payload:
/// null -> Empty, "..." -> Text, 45000 -> Number. Variant order matters
/// for deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// True when the cell carries no usable content (absent or blank text).
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Verbatim display form of the cell. Whole-number serials render
    /// without the trailing `.0` so raw spreadsheet values read naturally.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One spreadsheet row: column name -> cell value. All rows of a roster
/// share the sheet's header row as key set. Immutable once ingested;
/// classified entries keep a shared reference back to their row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    cells: HashMap<String, CellValue>,
}

impl RawRecord {
    /// Cell under `column`; a missing key reads as an empty cell.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

impl FromIterator<(String, CellValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// License vigency of a crew member. The order of the variants is the
/// severity order used for ranking the classified roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseStatus {
    Expired,
    Warning,
    Valid,
}

impl LicenseStatus {
    /// Sort rank: expired entries surface first, then warnings, then valid.
    pub fn rank(self) -> u8 {
        match self {
            LicenseStatus::Expired => 0,
            LicenseStatus::Warning => 1,
            LicenseStatus::Valid => 2,
        }
    }

    /// Human label for reports, in the source data's own wording.
    pub fn report_label(self) -> &'static str {
        match self {
            LicenseStatus::Expired => "NO VIGENTE",
            LicenseStatus::Warning => "PRÓXIMO A VENCER",
            LicenseStatus::Valid => "VIGENTE",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LicenseStatus::Expired => "EXPIRED",
            LicenseStatus::Warning => "WARNING",
            LicenseStatus::Valid => "VALID",
        };
        write!(f, "{s}")
    }
}

/// A classified crew member. Built once per row during a classification
/// pass and immutable afterwards; re-runs replace the whole roster.
#[derive(Debug, Clone)]
pub struct CrewMember {
    /// Ordinal assigned by input position. Only used to key otherwise
    /// identical entries downstream; meaningless after the sort.
    pub id: usize,
    pub name: String,
    pub license_number: Option<String>,
    /// Normalized expiration, when the cell could be parsed.
    pub expiration_date: Option<NaiveDate>,
    /// Original raw form of the expiration cell, kept for display when
    /// no normalized date exists.
    pub expiration_display: String,
    pub status: LicenseStatus,
    /// Originating row, for audit and export. Shared, never mutated.
    pub source: Arc<RawRecord>,
}

/// Per-status counts over a classified roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub expired: usize,
    pub warning: usize,
    pub valid: usize,
    pub total: usize,
}
