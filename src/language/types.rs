//! Types describing path rules and the styled ranges a scan produces

use serde::Deserialize;

/// A single user-supplied highlight rule. The path is a slash-joined chain
/// of element names from the outermost ancestor down to the element itself,
/// so `a/b/c` means element `c` nested under `b` under `a`. A trailing `*`
/// turns the rule into a prefix match. Colour values are opaque here; only
/// the render backends interpret them.
#[derive(Eq, Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    pub path: String,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

/// A rule readied for matching: the trailing wildcard marker, if any, has
/// been stripped off into the `prefix` flag.
#[derive(Eq, Debug, PartialEq)]
pub struct CompiledRule<'r> {
    pub rule: &'r Rule,
    pub prefix: bool,
    pub literal: &'r str,
}

/// Byte offsets delimiting exactly the tag-name characters of an element,
/// excluding the angle brackets, attributes, and any slash.
#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub struct NameRange {
    pub start: usize,
    pub end: usize,
}

impl NameRange {
    /// Line and column of the start of this range, both zero-origin; add 1
    /// to each when presenting to humans.
    pub fn position_in(&self, content: &str) -> (usize, usize) {
        let line = content[..self.start]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();

        let before = &content[..self.start];
        let column = match before.rfind('\n') {
            Some(i) => self.start - i - 1,
            None => self.start,
        };

        (line, column)
    }
}

/// A name range together with the colours of the rule that claimed it. At
/// most one of these exists per scanned opening tag.
#[derive(Eq, Debug, PartialEq)]
pub struct Styled<'r> {
    pub range: NameRange,
    pub foreground: Option<&'r str>,
    pub background: Option<&'r str>,
}

/// All the ranges sharing one exact foreground/background pair, so that the
/// host only has to realize each distinct style once.
#[derive(Eq, Debug, PartialEq)]
pub struct ColorGroup<'r> {
    pub key: String,
    pub foreground: Option<&'r str>,
    pub background: Option<&'r str>,
    pub ranges: Vec<NameRange>,
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn counting_positions() {
        let content = "This is a test";

        let range = NameRange { start: 5, end: 7 };
        let (line, column) = range.position_in(content);
        assert_eq!(line + 1, 1);
        assert_eq!(column + 1, 6);

        let content = r#"
This
is
a
test
            "#
        .trim_ascii();

        let range = NameRange { start: 10, end: 14 };
        let (line, column) = range.position_in(content);
        assert_eq!(line + 1, 4);
        assert_eq!(column + 1, 1);

        let after = content
            .lines()
            .nth(line)
            .unwrap();
        assert_eq!(after, "test");
    }
}
