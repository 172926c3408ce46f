use crate::domain::model::{Match, Round, TeamStanding};
use crate::domain::services::filter::filter_by_team;
use crate::domain::services::rounds::{clean_matches, group_by_round};
use crate::domain::services::standings::{aggregate_standings, sort_standings};
use crate::utils::error::Result;

/// Rounds and sorted table computed from one match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub rounds: Vec<Round>,
    pub standings: Vec<TeamStanding>,
}

impl League {
    /// Matches of `query`'s team, round by round. Can be called any number
    /// of times; the league itself is never modified.
    pub fn filter(&self, query: &str) -> Vec<Round> {
        filter_by_team(&self.rounds, query)
    }
}

/// clean → group → aggregate → sort
pub fn build_league(matches: &[Match]) -> Result<League> {
    let cleaned = clean_matches(matches);
    tracing::debug!(
        "Cleaned matches: kept {} of {}",
        cleaned.len(),
        matches.len()
    );

    let rounds = group_by_round(&cleaned);
    tracing::debug!("Grouped into {} rounds", rounds.len());

    let standings = aggregate_standings(&rounds)?;
    tracing::debug!("Aggregated standings for {} teams", standings.len());

    Ok(League {
        standings: sort_standings(&standings),
        rounds,
    })
}
