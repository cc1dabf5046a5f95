//! ANSI escape renderer for colourizing matches in terminal output

use owo_colors::{OwoColorize, Rgb};

use crate::rendering::{Render, StyleSpec};

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Embellish matched names with ANSI escapes. Colour specs are either
/// `#rrggbb` hex or one of a small set of names; anything else renders
/// unstyled rather than erroring, since a scan must never fail on input.
pub struct Terminal;

fn parse_color(spec: &str) -> Option<Rgb> {
    let trimmed = spec.trim();

    if regex!(r"^#[0-9a-fA-F]{6}$").is_match(trimmed) {
        let r = u8::from_str_radix(&trimmed[1..3], 16).ok()?;
        let g = u8::from_str_radix(&trimmed[3..5], 16).ok()?;
        let b = u8::from_str_radix(&trimmed[5..7], 16).ok()?;
        return Some(Rgb(r, g, b));
    }

    match trimmed
        .to_ascii_lowercase()
        .as_str()
    {
        "black" => Some(Rgb(0x00, 0x00, 0x00)),
        "red" => Some(Rgb(0xcc, 0x00, 0x00)),
        "green" => Some(Rgb(0x4e, 0x9a, 0x06)),
        "yellow" => Some(Rgb(0xc4, 0xa0, 0x00)),
        "blue" => Some(Rgb(0x34, 0x65, 0xa4)),
        "magenta" | "purple" => Some(Rgb(0x75, 0x50, 0x7b)),
        "cyan" => Some(Rgb(0x06, 0x98, 0x9a)),
        "white" => Some(Rgb(0xd3, 0xd7, 0xcf)),
        "orange" => Some(Rgb(0xf5, 0x79, 0x00)),
        "grey" | "gray" => Some(Rgb(0x99, 0x99, 0x99)),
        _ => None,
    }
}

impl Render for Terminal {
    fn style(&self, spec: StyleSpec, content: &str) -> String {
        let mut result = content.to_string();
        if let Some(color) = spec
            .foreground
            .and_then(parse_color)
        {
            result = result
                .color(color)
                .to_string();
        }
        if let Some(color) = spec
            .background
            .and_then(parse_color)
        {
            result = result
                .on_color(color)
                .to_string();
        }
        result
    }
}
