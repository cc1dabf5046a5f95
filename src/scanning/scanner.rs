//! Single forward pass over XML text, emitting an event for every opening
//! tag name together with its ancestor path

use crate::language::NameRange;
use crate::scanning::stack::AncestorStack;

/// One opening tag encountered by the scanner: where its name sits in the
/// source, and the slash-joined path of open elements down to and including
/// the name itself.
#[derive(Eq, Debug, Clone, PartialEq)]
pub struct TagEvent {
    pub range: NameRange,
    pub path: String,
}

/// The characters permitted in an element name.
fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b':' | b'.' | b'-')
}

/// Lazy scanner over a document. Comments, CDATA sections, markup
/// declarations, and processing instructions are skipped wholesale; closing
/// tags adjust the ancestor stack; opening tags are yielded one at a time.
/// The scan never fails: every unterminated construct simply jumps to the
/// end of the text.
#[derive(Debug)]
pub struct Scanner<'i> {
    source: &'i str,
    offset: usize,
    stack: AncestorStack<'i>,
}

impl<'i> Scanner<'i> {
    pub fn new(source: &'i str) -> Scanner<'i> {
        Scanner {
            source,
            offset: 0,
            stack: AncestorStack::new(),
        }
    }

    /// Number of elements currently open. Mostly useful in tests; after a
    /// well-formed document has been fully scanned this returns 0.
    pub fn depth(&self) -> usize {
        self.stack
            .depth()
    }

    /// Advance just past the next occurrence of `terminator`, searching from
    /// `from`, or to the end of the text when it never appears.
    fn skip_past(&mut self, from: usize, terminator: &str) {
        match self.source[from..].find(terminator) {
            Some(i) => self.offset = from + i + terminator.len(),
            None => {
                self.offset = self
                    .source
                    .len()
            }
        }
    }
}

impl<'i> Iterator for Scanner<'i> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        let bytes = self
            .source
            .as_bytes();
        let len = bytes.len();

        while self.offset < len {
            if bytes[self.offset] != b'<' {
                self.offset += 1;
                continue;
            }

            let rest = &self.source[self.offset..];

            if rest.starts_with("<!--") {
                self.skip_past(self.offset + 4, "-->");
                continue;
            }
            if rest.starts_with("<![CDATA[") {
                self.skip_past(self.offset + 9, "]]>");
                continue;
            }
            if rest.starts_with("<!") {
                // DOCTYPE or any other markup declaration
                self.skip_past(self.offset + 2, ">");
                continue;
            }
            if rest.starts_with("<?") {
                self.skip_past(self.offset + 2, "?>");
                continue;
            }

            if bytes.get(self.offset + 1) == Some(&b'/') {
                let mut k = self.offset + 2;
                while k < len && is_name_char(bytes[k]) {
                    k += 1;
                }
                let name = &self.source[self.offset + 2..k];
                self.stack
                    .pop_if_top(name);
                self.skip_past(k, ">");
                continue;
            }

            let start = self.offset + 1;
            if start < len && bytes[start].is_ascii_whitespace() {
                // deliberate leniency: '<' followed by whitespace is taken
                // as literal text, and the whitespace is re-examined on the
                // next iteration
                self.offset += 1;
                continue;
            }

            let mut k = start;
            while k < len && is_name_char(bytes[k]) {
                k += 1;
            }
            let end = k;
            let name = &self.source[start..end];
            let path = self
                .stack
                .path_for(name);

            // Skip past the attributes to the end of the tag. Quoted values
            // are not honoured: a '>' inside one terminates the tag here.
            let mut selfclosing = false;
            while k < len {
                if bytes[k] == b'>' {
                    k += 1;
                    break;
                }
                if bytes[k] == b'/' && bytes.get(k + 1) == Some(&b'>') {
                    selfclosing = true;
                    k += 2;
                    break;
                }
                k += 1;
            }
            if !selfclosing {
                self.stack
                    .push(name);
            }
            self.offset = k;

            return Some(TagEvent {
                range: NameRange { start, end },
                path,
            });
        }

        None
    }
}
