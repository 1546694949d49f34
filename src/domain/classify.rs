// src/domain/classify.rs

use crate::domain::dates;
use crate::domain::mapping::FieldMapping;
use crate::domain::record::{CrewMember, LicenseStatus, RawRecord, RosterSummary};
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::sync::Arc;

pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

/// Name shown when the mapped name cell is blank; a classified entry
/// never carries an empty name.
pub const UNKNOWN_NAME: &str = "Desconocido";

/// The dataset's explicit marker for an expired license. Matched
/// case-insensitively anywhere in the status cell.
const EXPIRED_MARKER: &str = "NO VIGENTE";

/// Determines the status of one entry based on the business rules.
/// The order of checks determines precedence: an explicit vigency marker
/// always overrides whatever the expiration date says, and a record with
/// neither a marker nor a parseable date stays `Valid`.
fn derive_status(
    status_text: &str,
    expiration: Option<NaiveDate>,
    threshold_days: i64,
    today: NaiveDate,
) -> LicenseStatus {
    if !status_text.trim().is_empty() && status_text.to_uppercase().contains(EXPIRED_MARKER) {
        return LicenseStatus::Expired;
    }
    if let Some(date) = expiration {
        let remaining = dates::days_until(date, today);
        if remaining < 0 {
            return LicenseStatus::Expired;
        }
        if remaining <= threshold_days {
            return LicenseStatus::Warning;
        }
        return LicenseStatus::Valid;
    }
    LicenseStatus::Valid
}

fn classify_row(
    id: usize,
    row: &Arc<RawRecord>,
    mapping: &FieldMapping,
    threshold_days: i64,
    today: NaiveDate,
) -> CrewMember {
    let name_cell = row.get(&mapping.name);
    let name = if name_cell.is_blank() {
        UNKNOWN_NAME.to_string()
    } else {
        name_cell.display()
    };

    let license_number = mapping
        .license_column()
        .map(|col| row.get(col))
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.display());

    let expiration_cell = row.get(&mapping.expiration);
    let expiration_date = dates::normalize(expiration_cell);
    let expiration_display = expiration_cell.display();

    let status_text = mapping
        .status_column()
        .map(|col| row.get(col).display())
        .unwrap_or_default();

    let status = derive_status(&status_text, expiration_date, threshold_days, today);

    CrewMember {
        id,
        name,
        license_number,
        expiration_date,
        expiration_display,
        status,
        source: Arc::clone(row),
    }
}

/// Classifies a whole roster in one pass and ranks it by severity.
///
/// Total over its input: every row yields exactly one entry, and a
/// malformed row degrades to safe defaults rather than failing the batch.
/// The only rejection is an incomplete mapping, checked before the pass.
/// `today` is caller-supplied so day-boundary behavior is reproducible.
pub fn classify_roster(
    rows: &[Arc<RawRecord>],
    mapping: &FieldMapping,
    threshold_days: i64,
    today: NaiveDate,
) -> Result<Vec<CrewMember>, ServerError> {
    mapping.require_complete()?;

    let mut roster: Vec<CrewMember> = rows
        .iter()
        .enumerate()
        .map(|(id, row)| classify_row(id, row, mapping, threshold_days, today))
        .collect();

    // Expired first, then warnings, then valid. sort_by_key is stable,
    // so ties keep their input order.
    roster.sort_by_key(|member| member.status.rank());

    Ok(roster)
}

/// Pure reduction over the classified roster's statuses.
pub fn summarize(roster: &[CrewMember]) -> RosterSummary {
    let mut summary = RosterSummary {
        total: roster.len(),
        ..RosterSummary::default()
    };
    for member in roster {
        match member.status {
            LicenseStatus::Expired => summary.expired += 1,
            LicenseStatus::Warning => summary.warning += 1,
            LicenseStatus::Valid => summary.valid += 1,
        }
    }
    summary
}
