//! Host-side wiring: the document slot, rule configuration, and the render
//! sink that owns the styling resources of the most recent scan

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::highlighting;
use crate::language::{ColorGroup, LoadingError, Rule};
use crate::rendering::{render_document, Render};

/// The host's document-type classification. Only documents identified as
/// XML are ever scanned; everything else is left alone.
#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub enum DocumentKind {
    Xml,
    Other,
}

impl DocumentKind {
    pub fn classify(filename: &Path) -> DocumentKind {
        let extension = filename
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("xml" | "svg" | "xsd" | "xsl" | "xslt" | "xhtml" | "plist") => DocumentKind::Xml,
            _ => DocumentKind::Other,
        }
    }
}

#[derive(Eq, Debug, Clone, PartialEq)]
pub struct Document {
    pub kind: DocumentKind,
    pub text: String,
}

/// Where grouped ranges get realized. Style resources created by an apply
/// belong to that apply alone: the session always releases the previous
/// batch before installing the next, so implementations must not let
/// resources accumulate across refreshes.
pub trait RenderSink {
    fn release(&mut self);
    fn apply(&mut self, text: &str, groups: &[ColorGroup<'_>]);
}

/// One document's highlighting session. Each trigger re-reads the current
/// rules, rescans, and swaps the sink's resources. The host delivers
/// triggers sequentially, so there is never more than one scan in flight.
pub struct Session<S: RenderSink> {
    document: Option<Document>,
    rules: Vec<Rule>,
    sink: S,
}

impl<S: RenderSink> Session<S> {
    pub fn new(sink: S) -> Session<S> {
        Session {
            document: None,
            rules: vec![],
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The active document switched (or went away).
    pub fn document_changed(&mut self, document: Option<Document>) {
        self.document = document;
        self.refresh();
    }

    /// The active document's text was edited.
    pub fn text_changed(&mut self, text: String) {
        if let Some(document) = &mut self.document {
            document.text = text;
        }
        self.refresh();
    }

    /// The rule configuration changed.
    pub fn rules_changed(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
        self.refresh();
    }

    /// Manual reload command.
    pub fn reload(&mut self) {
        self.refresh();
    }

    /// Shut the session down, releasing whatever the last scan applied.
    pub fn close(&mut self) {
        self.document = None;
        self.sink
            .release();
    }

    fn refresh(&mut self) {
        let document = match &self.document {
            Some(document) if document.kind == DocumentKind::Xml => document,
            Some(_) => {
                debug!("document is not XML; skipping");
                return;
            }
            None => {
                debug!("no document open; skipping");
                return;
            }
        };

        let groups = highlighting::scan(&document.text, &self.rules);

        // release the previous scan's resources before applying this one
        self.sink
            .release();
        self.sink
            .apply(&document.text, &groups);
    }
}

/// A sink that renders each refresh through a backend and writes the result
/// out, replacing whatever the previous refresh produced.
pub struct RenderedOutput<R: Render, W: Write> {
    renderer: R,
    out: W,
    active: usize,
}

impl<R: Render, W: Write> RenderedOutput<R, W> {
    pub fn new(renderer: R, out: W) -> RenderedOutput<R, W> {
        RenderedOutput {
            renderer,
            out,
            active: 0,
        }
    }

    /// Style groups currently applied.
    pub fn active(&self) -> usize {
        self.active
    }
}

impl<R: Render, W: Write> RenderSink for RenderedOutput<R, W> {
    fn release(&mut self) {
        self.active = 0;
    }

    fn apply(&mut self, text: &str, groups: &[ColorGroup<'_>]) {
        let rendered = render_document(&self.renderer, text, groups);
        self.out
            .write_all(rendered.as_bytes())
            .expect("Write highlighted output");
        self.active = groups.len();
    }
}

/// Read a rule configuration file. The file is either a bare JSON array of
/// rule objects or an object carrying them under a "rules" key, matching
/// the editor-settings shape the rules originally live in.
pub fn load_rules(filename: &Path) -> Result<Vec<Rule>, LoadingError<'_>> {
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Failed reading rules".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            });
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(error) => {
            return Err(LoadingError {
                problem: "Malformed rules file".to_string(),
                details: error.to_string(),
                filename,
            });
        }
    };

    let list = match value {
        serde_json::Value::Object(mut map) => map
            .remove("rules")
            .unwrap_or(serde_json::Value::Null),
        other => other,
    };

    Ok(rules_from_value(list))
}

/// Convert the raw configuration value into rules, silently dropping any
/// entry that is not an object with a string "path".
pub fn rules_from_value(value: serde_json::Value) -> Vec<Rule> {
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return vec![],
    };

    let mut rules = Vec::new();
    for entry in entries {
        let map = match entry {
            serde_json::Value::Object(map) => map,
            _ => continue,
        };
        let path = match map.get("path") {
            Some(serde_json::Value::String(path)) => path.clone(),
            _ => continue,
        };
        let foreground = match map.get("foreground") {
            Some(serde_json::Value::String(color)) => Some(color.clone()),
            _ => None,
        };
        let background = match map.get("background") {
            Some(serde_json::Value::String(color)) => Some(color.clone()),
            _ => None,
        };
        rules.push(Rule {
            path,
            foreground,
            background,
        });
    }

    rules
}

#[cfg(test)]
mod check {
    use super::*;
    use serde_json::json;

    #[test]
    fn classification_by_extension() {
        assert_eq!(
            DocumentKind::classify(Path::new("pom.xml")),
            DocumentKind::Xml
        );
        assert_eq!(
            DocumentKind::classify(Path::new("logo.SVG")),
            DocumentKind::Xml
        );
        assert_eq!(
            DocumentKind::classify(Path::new("notes.txt")),
            DocumentKind::Other
        );
        assert_eq!(
            DocumentKind::classify(Path::new("Makefile")),
            DocumentKind::Other
        );
    }

    #[test]
    fn malformed_entries_dropped() {
        let value = json!([
            { "path": "a/b", "foreground": "red" },
            { "foreground": "red" },
            { "path": 17 },
            "not an object",
            { "path": "c/*", "background": "#001122", "foreground": 3 }
        ]);

        let rules = rules_from_value(value);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].path, "a/b");
        assert_eq!(rules[0].foreground, Some("red".to_string()));
        assert_eq!(rules[1].path, "c/*");
        assert_eq!(rules[1].foreground, None);
        assert_eq!(rules[1].background, Some("#001122".to_string()));
    }

    #[test]
    fn non_array_value_yields_no_rules() {
        assert_eq!(rules_from_value(json!(null)), vec![]);
        assert_eq!(rules_from_value(json!({ "path": "a" })), vec![]);
    }
}
