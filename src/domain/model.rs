use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between home and away goals in a score ("2–1").
pub const SCORE_SEPARATOR: char = '–';

/// A raw object as delivered by the source, before field mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub round_id: String,
}

impl Match {
    pub fn new(home_team: &str, away_team: &str, score: &str, round_id: &str) -> Self {
        Self {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            score: score.to_string(),
            round_id: round_id.to_string(),
        }
    }

    /// Placeholder rows (byes, unscheduled slots) come without a home team.
    pub fn is_complete(&self) -> bool {
        !self.home_team.is_empty()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub goals_for: u32,
    pub goals_against: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            points: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// Everything `transform` hands over to `load`.
#[derive(Debug, Clone)]
pub struct LeagueReport {
    pub rounds: Vec<Round>,
    pub standings: Vec<TeamStanding>,
    pub team_filter: Option<String>,
    pub filtered_rounds: Option<Vec<Round>>,
    pub csv_output: String,
    pub tsv_output: String,
}
