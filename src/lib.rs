//! Path-driven highlighting of XML element names. A single-pass scanner
//! tracks the chain of open elements, an ordered rule list decides which
//! names get coloured (first match wins), and the resulting ranges are
//! grouped by colour pair so each distinct style is realized exactly once.

pub mod highlighting;
pub mod host;
pub mod language;
pub mod matching;
pub mod output;
pub mod rendering;
pub mod scanning;
