//! Render backends for marking up matched element names

use crate::language::{ColorGroup, NameRange};

mod html;
mod terminal;

pub use html::Html;
pub use terminal::Terminal;

/// The foreground/background colour pair a rule asked for, as given. A
/// backend is free to ignore values it cannot interpret.
#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec<'r> {
    pub foreground: Option<&'r str>,
    pub background: Option<&'r str>,
}

impl<'r> StyleSpec<'r> {
    pub fn of(group: &ColorGroup<'r>) -> StyleSpec<'r> {
        StyleSpec {
            foreground: group.foreground,
            background: group.background,
        }
    }
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring, HTML spans for export)
pub trait Render {
    /// Apply styling to a matched element name
    fn style(&self, spec: StyleSpec, content: &str) -> String;

    /// Pass through the text between matches. Backends that need to encode
    /// plain text (HTML, say) override this.
    fn plain(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _spec: StyleSpec, content: &str) -> String {
        content.to_string()
    }
}

/// Reassemble the whole document, embellishing each grouped name range via
/// the chosen backend. Ranges from a single scan never overlap, so this is
/// one ordered splice.
pub fn render_document(renderer: &impl Render, text: &str, groups: &[ColorGroup]) -> String {
    let mut spans: Vec<(NameRange, StyleSpec)> = Vec::new();
    for group in groups {
        let spec = StyleSpec::of(group);
        for range in &group.ranges {
            spans.push((*range, spec));
        }
    }
    spans.sort_by_key(|(range, _)| range.start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for (range, spec) in spans {
        output.push_str(&renderer.plain(&text[cursor..range.start]));
        output.push_str(&renderer.style(spec, &text[range.start..range.end]));
        cursor = range.end;
    }
    output.push_str(&renderer.plain(&text[cursor..]));

    output
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn identity_splice() {
        let text = "<a><b/></a>";
        let groups = vec![ColorGroup {
            key: "red|".to_string(),
            foreground: Some("red"),
            background: None,
            ranges: vec![NameRange { start: 1, end: 2 }, NameRange { start: 4, end: 5 }],
        }];

        let result = render_document(&Identity, text, &groups);
        assert_eq!(result, text);
    }

    #[test]
    fn empty_groups_reproduce_text() {
        let text = "plain old text";
        let result = render_document(&Identity, text, &[]);
        assert_eq!(result, text);
    }
}
