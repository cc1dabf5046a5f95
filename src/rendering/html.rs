//! HTML span renderer used by the export output

use crate::rendering::{Render, StyleSpec};

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Wrap matched names in spans carrying the rule's colours as inline CSS.
/// All document text is entity-escaped on the way through.
pub struct Html;

fn escape(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Only pass colour specs that are safe inside a style attribute; the rest
/// are dropped, matching the Terminal backend's tolerance of unknown specs.
fn css_color(spec: &str) -> Option<&str> {
    let trimmed = spec.trim();
    if regex!(r"^#?[A-Za-z0-9]+$").is_match(trimmed) {
        Some(trimmed)
    } else {
        None
    }
}

impl Render for Html {
    fn style(&self, spec: StyleSpec, content: &str) -> String {
        let mut css = String::new();
        if let Some(color) = spec
            .foreground
            .and_then(css_color)
        {
            css.push_str("color: ");
            css.push_str(color);
            css.push(';');
        }
        if let Some(color) = spec
            .background
            .and_then(css_color)
        {
            css.push_str("background-color: ");
            css.push_str(color);
            css.push(';');
        }

        if css.is_empty() {
            escape(content)
        } else {
            format!("<span style=\"{}\">{}</span>", css, escape(content))
        }
    }

    fn plain(&self, content: &str) -> String {
        escape(content)
    }
}
