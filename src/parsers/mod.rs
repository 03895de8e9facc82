use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Round;
use crate::error::{ParseError, Result};
use crate::normalize::{clean_name, normalize_text};

pub(crate) mod dom;
pub(crate) mod text;

pub use dom::parse_verify_document;
pub use text::parse_from_text;

/// The round heading marker as it appears on verify pages, e.g.
/// "Result of Round #3". Matched against normalized text.
pub(crate) static ROUND_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)result of round\s*#\s*(\d+)").unwrap());

// "rank. count. Name" lines, the unambiguous participant format.
static DOUBLE_NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(\d+)\.\s*(.+)$").unwrap());

// "rank. Name" lines; only trusted inside a DOM-delimited chunk.
static SINGLE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());

const NOISE_MARKERS: [&str; 3] = ["result of round", "round #", "verification"];

/// One line-matching rule. Rules are tried top-down per line; the first
/// pattern that matches consumes the line, whether or not a name is emitted.
pub(crate) struct LineRule {
    pattern: &'static Lazy<Regex>,
    name_group: usize,
    reject_headings: bool,
}

/// Rules for chunks delimited by DOM headings: the double-numbered form wins,
/// with a single-numbered fallback that filters heading noise.
pub(crate) static DOM_RULES: &[LineRule] = &[
    LineRule {
        pattern: &DOUBLE_NUMBERED,
        name_group: 3,
        reject_headings: false,
    },
    LineRule {
        pattern: &SINGLE_NUMBERED,
        name_group: 2,
        reject_headings: true,
    },
];

/// Rules for chunks sliced out of flat text, where heading lines are still
/// part of the chunk: only the strict double-numbered form is trusted.
pub(crate) static STRICT_RULES: &[LineRule] = &[LineRule {
    pattern: &DOUBLE_NUMBERED,
    name_group: 3,
    reject_headings: false,
}];

fn is_heading_noise(name: &str) -> bool {
    let lower = name.to_lowercase();
    NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Extracts participant names from one round's chunk of text, line by line.
/// Lines matching no rule are skipped; this never fails.
pub(crate) fn extract_names_from_chunk(chunk: &str, rules: &[LineRule]) -> Vec<String> {
    let mut names = Vec::new();

    for raw_line in chunk.lines() {
        let line = normalize_text(raw_line);
        if line.is_empty() {
            continue;
        }

        for rule in rules {
            let Some(captures) = rule.pattern.captures(&line) else {
                continue;
            };

            if let Some(raw_name) = captures.get(rule.name_group) {
                let name = clean_name(raw_name.as_str());
                if !name.is_empty() && !(rule.reject_headings && is_heading_noise(&name)) {
                    names.push(name);
                }
            }
            break;
        }
    }

    names
}

/// Applies the round-list invariants shared by both parsers: at least one
/// round with names, unique round numbers (the last-seen heading replaces an
/// earlier duplicate), ascending order.
pub(crate) fn finalize_rounds(rounds: Vec<Round>) -> Result<Vec<Round>> {
    if rounds.is_empty() {
        return Err(ParseError::RoundsWithoutNames);
    }

    let mut unique: Vec<Round> = Vec::with_capacity(rounds.len());
    for round in rounds {
        if let Some(existing) = unique.iter_mut().find(|r| r.round == round.round) {
            *existing = round;
        } else {
            unique.push(round);
        }
    }

    unique.sort_by_key(|round| round.round);
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_numbered_lines_win() {
        let chunk = "1. 1. Alice\n1. 2. Bob Jones\n2. 3. 56";
        let names = extract_names_from_chunk(chunk, DOM_RULES);
        assert_eq!(names, vec!["Alice", "Bob Jones", "56"]);
    }

    #[test]
    fn single_numbered_lines_pass_in_dom_chunks_only() {
        let chunk = "1. Alice\n2. Bob";
        assert_eq!(
            extract_names_from_chunk(chunk, DOM_RULES),
            vec!["Alice", "Bob"]
        );
        assert!(extract_names_from_chunk(chunk, STRICT_RULES).is_empty());
    }

    #[test]
    fn heading_noise_is_never_a_name() {
        let chunk = "1. Result of Round #2\n2. Round #3\n3. Verification details\n4. Carol";
        assert_eq!(extract_names_from_chunk(chunk, DOM_RULES), vec!["Carol"]);
    }

    #[test]
    fn unmatched_lines_are_skipped() {
        let chunk = "Winners below\n\n1. 1. Alice\ndrawn at 12:00";
        assert_eq!(extract_names_from_chunk(chunk, DOM_RULES), vec!["Alice"]);
    }

    #[test]
    fn rank_prefix_stripped_from_captured_name() {
        // "1. 2. 5 Joe" carries a stray rank inside the name capture.
        let names = extract_names_from_chunk("1. 2. 5 Joe", STRICT_RULES);
        assert_eq!(names, vec!["Joe"]);
    }

    #[test]
    fn finalize_sorts_and_dedupes() {
        let rounds = vec![
            Round {
                round: 3,
                names: vec!["C".into()],
            },
            Round {
                round: 1,
                names: vec!["A".into()],
            },
            Round {
                round: 3,
                names: vec!["C2".into()],
            },
            Round {
                round: 2,
                names: vec!["B".into()],
            },
        ];
        let finalized = finalize_rounds(rounds).unwrap();
        let numbers: Vec<u32> = finalized.iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(finalized[2].names, vec!["C2"]);
    }

    #[test]
    fn finalize_rejects_empty_round_list() {
        assert_eq!(
            finalize_rounds(Vec::new()),
            Err(ParseError::RoundsWithoutNames)
        );
    }
}
