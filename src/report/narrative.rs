// src/report/narrative.rs
//
// Builds the executive-briefing prompt that an external generative-text
// collaborator consumes. Only the text is produced here; this service
// never talks to the model itself.

use crate::domain::record::{CrewMember, LicenseStatus};
use crate::errors::ServerError;
use serde::Serialize;

/// Message served when there is nothing to brief.
pub const ALL_CLEAR: &str = "No hay novedades ni vencimientos próximos para reportar. \
     Toda la tripulación se encuentra operativa.";

/// One line of the briefing's data section. The expiration is the raw
/// display string so the reader sees exactly what the sheet said.
#[derive(Debug, Serialize)]
pub struct BriefingEntry {
    pub name: String,
    pub expiration: String,
    pub status: &'static str,
}

/// The non-valid subset of the roster, in ranked order. Valid entries are
/// filtered out to keep the briefing focused.
pub fn critical_entries(roster: &[CrewMember]) -> Vec<BriefingEntry> {
    roster
        .iter()
        .filter(|m| m.status != LicenseStatus::Valid)
        .map(|m| BriefingEntry {
            name: m.name.clone(),
            expiration: m.expiration_display.clone(),
            status: match m.status {
                LicenseStatus::Expired => "VENCIDO/NO VIGENTE",
                _ => "PRÓXIMO A VENCER",
            },
        })
        .collect()
}

/// Builds the full briefing prompt, or the all-clear message when the
/// roster has no expired or near-expiry entries.
pub fn build_briefing(roster: &[CrewMember], threshold_days: i64) -> Result<String, ServerError> {
    let entries = critical_entries(roster);
    if entries.is_empty() {
        return Ok(ALL_CLEAR.to_string());
    }

    let summary = serde_json::to_string_pretty(&entries).map_err(|_| ServerError::InternalError)?;

    Ok(format!(
        "Actúa como un Jefe de Operaciones Aéreas experto. Analiza la siguiente lista \
de pilotos con problemas en su vencimiento psicofísico.
El criterio de alerta temprana es de {threshold_days} días.

Datos de pilotos (JSON):
{summary}

Por favor genera un \"Resumen Ejecutivo de Novedades\" breve y profesional.
1. Un párrafo resumiendo la gravedad de la situación (total vencidos vs próximos).
2. Una lista de acciones recomendadas inmediatas (ej: contactar, suspender programación de vuelo).
3. Un borrador de correo electrónico genérico, formal pero firme, que se pueda enviar \
a los pilotos afectados recordándoles la renovación urgente.

Formato: Markdown. Mantén el tono serio y aeronáutico.
"
    ))
}
