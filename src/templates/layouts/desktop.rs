use maud::{html, Markup, PreEscaped, DOCTYPE};

// Styling is embedded; the demo ships no static asset pipeline.
const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between;
         padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
header a { color: #524ed2; text-decoration: none; }
main.container { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.card img { max-width: 100%; border-radius: 6px; }
.grid { display: flex; flex-wrap: wrap; gap: 1rem; }
.grid > .card { flex: 1 1 260px; margin: 0; }
form label { display: block; margin-top: 0.5rem; font-weight: 600; }
form input, form select { padding: 6px; font-size: 1rem; margin-top: 0.25rem; }
form button { margin-top: 1rem; padding: 8px 16px; font-size: 1rem; cursor: pointer; }
.notice { color: #92400e; background: #fef3c7; padding: 0.75rem; border-radius: 6px; }
footer { text-align: center; color: #6b7280; padding: 2rem 0; font-size: 0.9rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Homeview" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/search" { "Search" } }
                            li { a href="/installment" { "Installment" } }
                            li { a href="/compare" { "Compare" } }
                        }
                    }
                }
                (content)
                footer { "Demo catalog, regenerated every start." }
            }
        }
    }
}
