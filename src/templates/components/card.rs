use crate::domain::dates::format_date;
use crate::domain::record::{CrewMember, LicenseStatus};
use maud::{html, Markup};

pub fn kpi_card(label: &str, value: usize) -> Markup {
    html! {
        div class="card" {
            p { (label) }
            p class="kpi-value" { (value) }
        }
    }
}

fn status_class(status: LicenseStatus) -> &'static str {
    match status {
        LicenseStatus::Expired => "status-expired",
        LicenseStatus::Warning => "status-warning",
        LicenseStatus::Valid => "status-valid",
    }
}

/// One crew member entry on the dashboard. Shows the normalized date when
/// there is one, otherwise whatever text the sheet held.
pub fn crew_card(member: &CrewMember) -> Markup {
    let expiration = member
        .expiration_date
        .map(format_date)
        .unwrap_or_else(|| member.expiration_display.clone());

    html! {
        div class="card" {
            h3 { (member.name) }
            @if let Some(license) = &member.license_number {
                p { "Licencia: " (license) }
            }
            p { "Vencimiento: " (expiration) }
            p class=(status_class(member.status)) { (member.status.report_label()) }
        }
    }
}
