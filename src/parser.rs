//! Stanza parser — line-by-line scan of `.conf.spec` content.
//!
//! The grammar is permissive: a line either starts a new stanza or belongs
//! to the current one. Nothing is ever rejected, so there is no error type.

use crate::model::Stanza;
use regex::Regex;
use std::sync::LazyLock;

// A header is a whole trimmed line of the form "[...]". Anchored on both
// ends so lines merely containing brackets are not headers.
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[.*\]$").unwrap());

/// Parse spec content into stanzas, in first-appearance order.
///
/// Blank lines are dropped. Lines before the first header are dropped.
/// Two headers with the same name produce two distinct stanzas.
pub fn parse(input: &str) -> Vec<Stanza> {
    let mut stanzas: Vec<Stanza> = Vec::new();

    for raw in input.lines() {
        let line = raw.trim();

        if RE_HEADER.is_match(line) {
            stanzas.push(Stanza {
                name: line[1..line.len() - 1].to_string(),
                lines: Vec::new(),
            });
            continue;
        }

        if line.is_empty() {
            continue;
        }

        // Body line — kept only once a header has been seen.
        if let Some(current) = stanzas.last_mut() {
            current.lines.push(line.to_string());
        }
    }

    stanzas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_stanzas() {
        let input = "[general]\nkey1 = value1\n# a comment\n\n[auth]\nsecret = true\n";
        let stanzas = parse(input);
        assert_eq!(stanzas.len(), 2);
        assert_eq!(stanzas[0].name, "general");
        assert_eq!(stanzas[0].lines, vec!["key1 = value1", "# a comment"]);
        assert_eq!(stanzas[1].name, "auth");
        assert_eq!(stanzas[1].lines, vec!["secret = true"]);
    }

    #[test]
    fn lines_before_first_header_are_dropped() {
        let input = "# Version 9.0\nloose = line\n[general]\nkey = value\n";
        let stanzas = parse(input);
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].lines, vec!["key = value"]);
    }

    #[test]
    fn input_without_headers_yields_nothing() {
        let stanzas = parse("just some\nfree text\n");
        assert!(stanzas.is_empty());
    }

    #[test]
    fn blank_lines_never_appear_in_bodies() {
        let input = "[general]\na = 1\n\n   \nb = 2\n";
        let stanzas = parse(input);
        assert_eq!(stanzas[0].lines, vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn header_and_body_are_trimmed() {
        let input = "  [general]  \n   key = value   \n";
        let stanzas = parse(input);
        assert_eq!(stanzas[0].name, "general");
        assert_eq!(stanzas[0].lines, vec!["key = value"]);
    }

    #[test]
    fn empty_header_is_valid() {
        let stanzas = parse("[]\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].name, "");
        assert!(stanzas[0].lines.is_empty());
    }

    #[test]
    fn consecutive_headers_produce_empty_stanzas() {
        let stanzas = parse("[a]\n[b]\n[c]\nbody\n");
        assert_eq!(stanzas.len(), 3);
        assert!(stanzas[0].lines.is_empty());
        assert!(stanzas[1].lines.is_empty());
        assert_eq!(stanzas[2].lines, vec!["body"]);
    }

    #[test]
    fn duplicate_headers_stay_distinct() {
        let stanzas = parse("[general]\na = 1\n[general]\nb = 2\n");
        assert_eq!(stanzas.len(), 2);
        assert_eq!(stanzas[0].lines, vec!["a = 1"]);
        assert_eq!(stanzas[1].lines, vec!["b = 2"]);
    }

    #[test]
    fn brackets_inside_a_line_are_not_a_header() {
        let input = "[general]\nvalues = [a, b, c]\nsee [docs] for details\n";
        let stanzas = parse(input);
        assert_eq!(stanzas.len(), 1);
        assert_eq!(
            stanzas[0].lines,
            vec!["values = [a, b, c]", "see [docs] for details"]
        );
    }

    #[test]
    fn only_outer_brackets_are_stripped() {
        let stanzas = parse("[source::...]\n[[nested]]\n");
        assert_eq!(stanzas[0].name, "source::...");
        assert_eq!(stanzas[1].name, "[nested]");
    }

    #[test]
    fn bracketed_line_with_inner_brackets_is_one_header() {
        // The whole trimmed line starts with [ and ends with ], so it is a
        // header even with brackets in the middle.
        let stanzas = parse("[a]b[c]\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].name, "a]b[c");
    }
}
