use crate::domain::model::Round;

/// Keeps, round by round, the matches where either team name contains
/// `query` (case-sensitive). Rounds left without matches are still returned
/// so the output lines up with the input.
pub fn filter_by_team(rounds: &[Round], query: &str) -> Vec<Round> {
    rounds
        .iter()
        .map(|round| Round {
            id: round.id.clone(),
            matches: round
                .matches
                .iter()
                .filter(|m| m.home_team.contains(query) || m.away_team.contains(query))
                .cloned()
                .collect(),
        })
        .collect()
}
