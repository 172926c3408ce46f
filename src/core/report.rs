use crate::domain::model::{Round, TeamStanding};
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    position: usize,
    team: &'a str,
    points: u32,
    goals_for: u32,
    goals_against: u32,
    goal_difference: i64,
}

/// The table as delimited text, header included, one row per team in the
/// given order.
pub fn standings_delimited(standings: &[TeamStanding], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for (i, s) in standings.iter().enumerate() {
        writer.serialize(StandingRow {
            position: i + 1,
            team: &s.team,
            points: s.points,
            goals_for: s.goals_for,
            goals_against: s.goals_against,
            goal_difference: s.goal_difference(),
        })?;
    }

    if standings.is_empty() {
        writer.write_record([
            "position",
            "team",
            "points",
            "goals_for",
            "goals_against",
            "goal_difference",
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("standings are not valid UTF-8: {}", e),
    })
}

#[derive(Debug, Serialize)]
pub struct RoundsDocument<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_filter: Option<&'a str>,
    pub rounds: &'a [Round],
}

impl<'a> RoundsDocument<'a> {
    pub fn new(rounds: &'a [Round], team_filter: Option<&'a str>) -> Self {
        Self {
            generated_at: Utc::now(),
            team_filter,
            rounds,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fixed-width table for the terminal.
pub fn render_standings(standings: &[TeamStanding]) -> String {
    let width = standings
        .iter()
        .map(|s| s.team.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = format!(
        "{:>3}  {:<width$}  {:>3}  {:>3}  {:>3}  {:>4}\n",
        "#",
        "Team",
        "Pts",
        "GF",
        "GA",
        "GD",
        width = width
    );
    for (i, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>3}  {:>3}  {:>3}  {:>+4}\n",
            i + 1,
            s.team,
            s.points,
            s.goals_for,
            s.goals_against,
            s.goal_difference(),
            width = width
        ));
    }
    out
}

pub fn render_rounds(rounds: &[Round]) -> String {
    let mut out = String::new();
    for round in rounds {
        out.push_str(&format!("Round {}\n", round.id));
        if round.is_empty() {
            out.push_str("  (no matches)\n");
        }
        for m in &round.matches {
            out.push_str(&format!("  {} {} {}\n", m.home_team, m.score, m.away_team));
        }
    }
    out
}
