use crate::domain::model::{Round, TeamStanding};
use crate::domain::services::rounds::flatten_rounds;
use crate::domain::services::scoring::{goals_for, points_for};
use crate::utils::error::{EtlError, Result};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Teams eligible for the table: everyone who plays in the first round,
/// home before away, in match order.
///
/// The schedule is assumed to be a full round-robin where every team plays
/// every round. A team that only shows up from round 2 on gets no entry.
pub fn team_universe(rounds: &[Round]) -> Vec<String> {
    let Some(first) = rounds.first() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    first
        .matches
        .iter()
        .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
        .filter(|team| seen.insert(*team))
        .map(str::to_string)
        .collect()
}

/// One standing per team of the universe, in universe order (unsorted).
pub fn aggregate_standings(rounds: &[Round]) -> Result<Vec<TeamStanding>> {
    let matches = flatten_rounds(rounds);

    team_universe(rounds)
        .into_iter()
        .map(|team| {
            matches
                .iter()
                .filter(|m| m.involves(&team))
                .try_fold(TeamStanding::new(team.as_str()), |mut standing, m| -> Result<_> {
                    let goals = goals_for(&team, m)?;
                    standing.points = add_total(standing.points, points_for(&team, m)?, &m.score)?;
                    standing.goals_for = add_total(standing.goals_for, goals.goals_for, &m.score)?;
                    standing.goals_against =
                        add_total(standing.goals_against, goals.goals_against, &m.score)?;
                    Ok(standing)
                })
        })
        .collect()
}

// 累計超出 u32 時視為比分異常
fn add_total(total: u32, value: u32, score: &str) -> Result<u32> {
    total
        .checked_add(value)
        .ok_or_else(|| EtlError::malformed_score(score, "goal total overflow"))
}

/// Points, goal difference and goals for descending, then name ascending.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

pub fn sort_standings(standings: &[TeamStanding]) -> Vec<TeamStanding> {
    let mut sorted = standings.to_vec();
    sorted.sort_by(compare_standings);
    sorted
}
