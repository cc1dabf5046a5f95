//! Output generation for the taglight CLI application

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::{debug, info};

use crate::language::ColorGroup;
use crate::rendering::{render_document, Html, Render};

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body \{ background: #ffffff; color: #1e1e1e; margin: 2em; }
pre \{ font-family: "Inconsolata", monospace; line-height: 1.4; }
</style>
</head>
<body>
<pre>{body}</pre>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    body: String,
}

/// Render the scanned document to a standalone HTML page, written to the
/// given target file, or to standard out when the target is absent or "-".
pub fn via_html(filename: &Path, text: &str, groups: &[ColorGroup], target: Option<&Path>) {
    info!("Exporting file: {}", filename.display());

    // the body is already entity-escaped span markup, so the template must
    // not escape it a second time
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("page", TEMPLATE)
        .expect("Register page template");

    let context = Context {
        title: Html.plain(&filename.to_string_lossy()),
        body: render_document(&Html, text, groups),
    };

    let page = tt
        .render("page", &context)
        .expect("Render page template");

    match target {
        Some(target) if target.to_str() != Some("-") => {
            debug!("Writing to {}", target.display());
            std::fs::write(target, &page).expect("Write HTML output file");
        }
        _ => {
            std::io::stdout()
                .write_all(page.as_bytes())
                .expect("Write HTML to standard out");
        }
    }
}
