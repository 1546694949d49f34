use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " – AeroControl" }
                style { (STYLE) }
            }
            body {
                header class="topbar" {
                    h3 { "AeroControl" }
                    nav {
                        ul {
                            li { a href="/" { "Nueva carga" } }
                            li { a href="/dashboard" { "Panel" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer { "Control de vencimientos psicofísicos" }
            }
        }
    }
}

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; color: #1e293b; background: #f8fafc; }
.topbar { display: flex; align-items: center; justify-content: space-between;
          padding: 0.5rem 1.5rem; background: #fff; border-bottom: 1px solid #e2e8f0; }
.topbar nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.container { max-width: 60rem; margin: 0 auto; padding: 1.5rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.5rem;
        padding: 1rem 1.25rem; margin-bottom: 1rem; }
.kpis { display: flex; gap: 1rem; }
.kpis .card { flex: 1; text-align: center; }
.kpi-value { font-size: 2rem; font-weight: bold; margin: 0; }
.status-expired { color: #dc2626; font-weight: bold; }
.status-warning { color: #d97706; font-weight: bold; }
.status-valid { color: #059669; }
label { display: block; margin-top: 0.75rem; font-size: 0.9rem; }
select, input, textarea { width: 100%; padding: 0.4rem; margin-top: 0.25rem; }
button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
footer { text-align: center; color: #94a3b8; padding: 1.5rem; font-size: 0.85rem; }
";
