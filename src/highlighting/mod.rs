//! The scan entry point: match every opening tag against the rule list,
//! then group the claimed ranges by colour pair

use tracing::debug;

use crate::language::{ColorGroup, Rule, Styled};
use crate::matching;
use crate::scanning::Scanner;

/// Scan a document against an ordered rule list. Pure: the same text and
/// rules always produce the same groups. Rules are consulted fresh on every
/// call; nothing is cached between scans.
pub fn scan<'r>(text: &str, rules: &'r [Rule]) -> Vec<ColorGroup<'r>> {
    let compiled = matching::compile(rules);

    // Pass 1: attach colours to each element name the rules claim
    let mut styled = Vec::new();
    for event in Scanner::new(text) {
        if let Some(hit) = matching::first_match(&compiled, &event.path) {
            styled.push(Styled {
                range: event.range,
                foreground: hit
                    .rule
                    .foreground
                    .as_deref(),
                background: hit
                    .rule
                    .background
                    .as_deref(),
            });
        }
    }
    debug!("{} element names matched", styled.len());

    // Pass 2: deduplicate by colour pair so each distinct style only has to
    // be realized once at the rendering boundary
    let groups = group_by_style(styled);
    debug!("{} style groups", groups.len());

    groups
}

/// The identity key for a foreground/background pair, absence spelled as
/// the empty string.
pub fn color_key(foreground: Option<&str>, background: Option<&str>) -> String {
    format!(
        "{}|{}",
        foreground.unwrap_or(""),
        background.unwrap_or("")
    )
}

fn group_by_style(styled: Vec<Styled<'_>>) -> Vec<ColorGroup<'_>> {
    let mut groups: Vec<ColorGroup> = Vec::new();

    for item in styled {
        let key = color_key(item.foreground, item.background);
        match groups
            .iter_mut()
            .find(|group| group.key == key)
        {
            Some(group) => group
                .ranges
                .push(item.range),
            None => groups.push(ColorGroup {
                key,
                foreground: item.foreground,
                background: item.background,
                ranges: vec![item.range],
            }),
        }
    }

    groups
}
