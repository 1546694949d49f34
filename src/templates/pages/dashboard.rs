use crate::domain::record::{CrewMember, LicenseStatus, RosterSummary};
use crate::templates::components::{crew_card, kpi_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub summary: RosterSummary,
    pub threshold_days: i64,
    pub roster: &'a [CrewMember],
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    // Valid entries stay off the dashboard; only the issues are listed.
    let issues: Vec<&CrewMember> = vm
        .roster
        .iter()
        .filter(|m| m.status != LicenseStatus::Valid)
        .collect();

    desktop_layout(
        "Panel",
        html! {
            h1 { "Listado de Novedades" }
            p { "Criterio de alerta: " strong { (vm.threshold_days) } " días" }

            section class="kpis" {
                (kpi_card("Total Analizados", vm.summary.total))
                (kpi_card("No Vigentes", vm.summary.expired))
                (kpi_card("Próximos a Vencer", vm.summary.warning))
            }

            section class="card" {
                a href="/report.xlsx" { "Descargar reporte XLSX" }
                " · "
                a href="/briefing" { "Resumen ejecutivo (texto para IA)" }
            }

            @if issues.is_empty() {
                section class="card" {
                    h3 { "Todo en orden" }
                    p { "No se encontraron pilotos con vencimientos próximos o licencias no vigentes." }
                }
            } @else {
                @for member in issues {
                    (crew_card(member))
                }
            }
        },
    )
}
