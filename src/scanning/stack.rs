//! Stack of open element names at the scanner's current position

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AncestorStack<'i> {
    stack: Vec<&'i str>,
}

impl<'i> AncestorStack<'i> {
    pub(crate) fn new() -> AncestorStack<'i> {
        AncestorStack { stack: vec![] }
    }

    pub(crate) fn push(&mut self, name: &'i str) {
        self.stack
            .push(name);
    }

    /// Pop only when the supplied name matches the top of the stack.
    /// Mismatched closing tags are tolerated silently so that a scan can
    /// survive malformed input without popping the wrong element.
    pub(crate) fn pop_if_top(&mut self, name: &str) -> bool {
        match self
            .stack
            .last()
        {
            Some(top) if *top == name => {
                self.stack
                    .pop();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack
            .len()
    }

    /// The slash-joined ancestor chain for an element named `name` opening
    /// at the current position, including the element itself.
    pub(crate) fn path_for(&self, name: &str) -> String {
        if self
            .stack
            .is_empty()
        {
            name.to_string()
        } else {
            let mut path = self
                .stack
                .join("/");
            path.push('/');
            path.push_str(name);
            path
        }
    }
}
