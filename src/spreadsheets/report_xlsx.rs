use crate::domain::dates::format_date;
use crate::domain::record::{CrewMember, LicenseStatus};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

/// Builds the expirations report workbook: only the non-valid entries,
/// in ranked order, one row each.
pub fn build_report_workbook(roster: &[CrewMember]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = ["Piloto", "Licencia", "Vencimiento", "Estado"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    let report_rows = roster.iter().filter(|m| m.status != LicenseStatus::Valid);

    for (i, member) in report_rows.enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &member.name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write name: {}", e)))?;

        let license = member.license_number.as_deref().unwrap_or("-");
        worksheet
            .write_string(r, 1, license)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write license: {}", e)))?;

        // Normalized date when we have one, otherwise the sheet's own text.
        let expiration = member
            .expiration_date
            .map(format_date)
            .unwrap_or_else(|| member.expiration_display.clone());
        worksheet
            .write_string(r, 2, &expiration)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write expiration: {}", e)))?;

        worksheet
            .write_string(r, 3, member.status.report_label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_report_xlsx(roster: &[CrewMember], generated_on: NaiveDate) -> ResultResp {
    let buffer = build_report_workbook(roster)?;
    let stamp = generated_on.format("%Y-%m-%d");
    xlsx_response(buffer, &format!("reporte-psicofisicos-{stamp}.xlsx"))
}
