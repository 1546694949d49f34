// templates/pages/mapping.rs

use crate::domain::mapping::{selectable_columns, FieldMapping};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn column_select(name: &str, columns: &[&String], current: Option<&str>, none_label: &str) -> Markup {
    html! {
        select name=(name) {
            option value="" { (none_label) }
            @for col in columns {
                option value=(col) selected[current == Some(col.as_str())] { (col) }
            }
        }
    }
}

/// Column-binding form. Selects arrive pre-filled with the auto-guessed
/// mapping; the operator confirms or corrects before classification runs.
pub fn mapping_page(columns: &[String], preset: &FieldMapping, threshold_days: i64) -> Markup {
    let options = selectable_columns(columns);

    desktop_layout(
        "Configuración de columnas",
        html! {
            h1 { "Configuración de Columnas" }
            p { "Asocie las columnas de su planilla para que podamos analizar los datos." }

            div class="card" {
                form method="post" action="/mapping" {
                    label { "Nombre del Piloto *" }
                    (column_select("name", &options, Some(preset.name.as_str()).filter(|s| !s.is_empty()), "Seleccionar columna..."))

                    label { "F. Vencimiento Psicofísico *" }
                    (column_select("expiration", &options, Some(preset.expiration.as_str()).filter(|s| !s.is_empty()), "Seleccionar columna..."))

                    label { "Estado / Vigencia (opcional)" }
                    (column_select("status", &options, preset.status_column(), "Sin columna de estado (usar fecha)"))

                    label { "Nro. de Licencia (opcional)" }
                    (column_select("license", &options, preset.license_column(), "Sin columna de licencia"))

                    label { "Criterio de alerta (días)" }
                    input type="number" name="threshold" min="1" value=(threshold_days);

                    button type="submit" { "Analizar nómina" }
                }
            }
        },
    )
}
