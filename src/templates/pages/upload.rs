// templates/pages/upload.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn upload_page() -> Markup {
    desktop_layout(
        "Nueva carga",
        html! {
            h1 { "Control de Vencimientos" }
            p {
                "Suba su nómina y detecte automáticamente licencias no vigentes. "
                "El archivo debe llegar ya convertido a filas JSON (una fila por tripulante)."
            }

            div class="card" {
                form method="post" action="/roster" {
                    label for="rows" { "Filas de la nómina (JSON)" }
                    textarea id="rows" name="rows" rows="12"
                        placeholder=(r#"[{"Piloto": "...", "Vencimiento CMA": "05/03/2025"}]"#) {}
                    button type="submit" { "Cargar nómina" }
                }
            }
        },
    )
}
