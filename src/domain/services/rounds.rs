use crate::domain::model::{Match, Round};
use std::collections::HashMap;

/// Drops placeholder rows (empty home team). Scores are not looked at here.
pub fn clean_matches(matches: &[Match]) -> Vec<Match> {
    matches.iter().filter(|m| m.is_complete()).cloned().collect()
}

/// Groups matches by round id, rounds in first-seen order.
pub fn group_by_round(matches: &[Match]) -> Vec<Round> {
    let mut rounds: Vec<Round> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in matches {
        let slot = *index.entry(m.round_id.as_str()).or_insert_with(|| {
            rounds.push(Round::new(m.round_id.as_str()));
            rounds.len() - 1
        });
        rounds[slot].matches.push(m.clone());
    }

    rounds
}

pub fn flatten_rounds(rounds: &[Round]) -> Vec<&Match> {
    rounds.iter().flat_map(|r| r.matches.iter()).collect()
}
