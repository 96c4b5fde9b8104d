//! HTML page hosting Swagger UI.

use serde_json::Value;

const SWAGGER_UI_VERSION: &str = "5";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the viewer page. In a browser the declared server becomes the page's own origin.
pub fn render_page(title: &str, description: &Value) -> String {
    // `</` must not appear inside the inline script.
    let spec = description.to_string().replace("</", "<\\/");
    let title = escape_html(title);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
</head>
<body style="margin: 0">
  <div id="swagger-ui" style="height: 100vh; width: 100%"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js" crossorigin></script>
  <script>
    const spec = {spec};
    if (typeof window !== "undefined" && spec.servers && spec.servers.length > 0) {{
      spec.servers[0].url = window.location.origin;
    }}
    window.ui = SwaggerUIBundle({{ spec: spec, dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##,
        title = title,
        version = SWAGGER_UI_VERSION,
        spec = spec,
    )
}
