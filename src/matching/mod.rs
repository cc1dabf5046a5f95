//! Compilation and evaluation of path rules

use crate::language::{CompiledRule, Rule};

/// Ready a rule list for matching. Paths are trimmed of surrounding
/// whitespace and a trailing `*` is stripped into the prefix flag. Order is
/// preserved: declaration order is match priority.
pub fn compile(rules: &[Rule]) -> Vec<CompiledRule<'_>> {
    rules
        .iter()
        .map(|rule| {
            let trimmed = rule
                .path
                .trim();
            match trimmed.strip_suffix('*') {
                Some(literal) => CompiledRule {
                    rule,
                    prefix: true,
                    literal,
                },
                None => CompiledRule {
                    rule,
                    prefix: false,
                    literal: trimmed,
                },
            }
        })
        .collect()
}

impl<'r> CompiledRule<'r> {
    pub fn matches(&self, path: &str) -> bool {
        if self.prefix {
            path.starts_with(self.literal)
        } else {
            path == self.literal
        }
    }
}

/// The first rule, in declaration order, that claims the given path. Later
/// rules are never consulted once one has matched.
pub fn first_match<'c, 'r>(
    compiled: &'c [CompiledRule<'r>],
    path: &str,
) -> Option<&'c CompiledRule<'r>> {
    compiled
        .iter()
        .find(|candidate| candidate.matches(path))
}

#[cfg(test)]
mod check {
    use super::*;

    fn rule(path: &str) -> Rule {
        Rule {
            path: path.to_string(),
            foreground: None,
            background: None,
        }
    }

    #[test]
    fn compilation_strips_wildcard() {
        let rules = vec![rule("a/b/c"), rule("root/*"), rule("  spaced  ")];
        let compiled = compile(&rules);

        assert!(!compiled[0].prefix);
        assert_eq!(compiled[0].literal, "a/b/c");

        assert!(compiled[1].prefix);
        assert_eq!(compiled[1].literal, "root/");

        assert!(!compiled[2].prefix);
        assert_eq!(compiled[2].literal, "spaced");
    }

    #[test]
    fn exact_versus_prefix() {
        let rules = vec![rule("root/*")];
        let compiled = compile(&rules);

        assert!(compiled[0].matches("root/child"));
        assert!(compiled[0].matches("root/a/b"));
        // the literal is "root/" so the bare root path does not match
        assert!(!compiled[0].matches("root"));

        let rules = vec![rule("root")];
        let compiled = compile(&rules);
        assert!(compiled[0].matches("root"));
        assert!(!compiled[0].matches("root/child"));
    }

    #[test]
    fn declaration_order_wins() {
        let rules = vec![rule("a/b"), rule("a/*")];
        let compiled = compile(&rules);

        let hit = first_match(&compiled, "a/b").unwrap();
        assert_eq!(hit.rule, &rules[0]);

        let hit = first_match(&compiled, "a/c").unwrap();
        assert_eq!(hit.rule, &rules[1]);

        assert_eq!(first_match(&compiled, "z"), None);
    }

    #[test]
    fn bare_wildcard_matches_everything() {
        let rules = vec![rule("*")];
        let compiled = compile(&rules);
        assert!(compiled[0].matches("anything"));
        assert!(compiled[0].matches(""));
    }
}
