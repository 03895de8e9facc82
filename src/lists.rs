use serde::Serialize;
use std::collections::HashMap;

use crate::domain::Round;
use crate::error::{ParseError, Result};
use crate::normalize::normalize_text;

/// The two derived lists, one entry per round with names: the top pick
/// (first drawn name) and the comma-joined bottom picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundLists {
    pub top_list: Vec<String>,
    pub bottom_list: Vec<String>,
}

pub fn build_two_lists(rounds: &[Round], bottom_count: i64) -> Result<RoundLists> {
    if bottom_count < 1 {
        return Err(ParseError::InvalidBottomCount(bottom_count));
    }
    let bottom_count = bottom_count as usize;

    let mut top_list = Vec::new();
    let mut bottom_list = Vec::new();

    for round in rounds {
        if round.names.is_empty() {
            continue;
        }
        top_list.push(format!("{}. {}", round.round, round.names[0]));

        let take = bottom_count.min(round.names.len());
        let tail = &round.names[round.names.len() - take..];
        bottom_list.push(format!("{}. {}", round.round, tail.join(", ")));
    }

    Ok(RoundLists {
        top_list,
        bottom_list,
    })
}

/// Picks the final round's name list: the highest-numbered round that still
/// has names wins, and rounds without names are ignored, so a name-less
/// trailing round falls back to the last round that has any. Empty when
/// nothing qualifies.
pub fn build_final_round_list(rounds: &[Round]) -> Vec<String> {
    let mut finalist: Option<&Round> = None;

    for round in rounds {
        if round.names.is_empty() {
            continue;
        }
        if finalist.map_or(true, |best| round.round > best.round) {
            finalist = Some(round);
        }
    }

    finalist.map(|round| round.names.clone()).unwrap_or_default()
}

/// Tallies how many spots each name holds in round 1 (the paid-entry round,
/// where the same name legitimately appears once per purchased spot). Falls
/// back to the first round when none is literally numbered 1.
pub fn build_spot_counts_from_round1(rounds: &[Round]) -> HashMap<String, u64> {
    let round_one = rounds
        .iter()
        .find(|round| round.round == 1)
        .or_else(|| rounds.first());

    let mut counts = HashMap::new();
    let Some(round_one) = round_one else {
        return counts;
    };

    for name in &round_one.names {
        let name = normalize_text(name);
        if !name.is_empty() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    counts
}
