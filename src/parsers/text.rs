use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{extract_names_from_chunk, finalize_rounds, STRICT_RULES};
use crate::domain::Round;
use crate::error::{ParseError, Result};
use crate::normalize::normalize_text;

// Marker with the optional "– FINAL" suffix the last round sometimes carries.
static ROUND_MARKER_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)result of round\s*#\s*(\d+)(?:\s*[–—-]\s*final)?").unwrap());

/// Parses rounds out of flattened text by slicing it at round markers. This
/// path has no heading boundaries to lean on, so it only trusts the strict
/// "rank. count. Name" line format.
pub fn parse_from_text(text: &str) -> Result<Vec<Round>> {
    let text = normalize_text(text);

    let markers: Vec<(usize, Option<u32>)> = ROUND_MARKER_FULL
        .captures_iter(&text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            Some((whole.start(), captures[1].parse().ok()))
        })
        .collect();

    if markers.is_empty() {
        return Err(ParseError::NoRoundsFound);
    }
    debug!("found {} round marker(s) in flat text", markers.len());

    let mut rounds = Vec::new();
    for (position, &(start, number)) in markers.iter().enumerate() {
        let end = markers
            .get(position + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(text.len());

        let chunk = normalize_text(&text[start..end]);
        let names = extract_names_from_chunk(&chunk, STRICT_RULES);
        if !names.is_empty() {
            rounds.push(Round {
                round: number.unwrap_or(position as u32 + 1),
                names,
            });
        }
    }

    finalize_rounds(rounds)
}
