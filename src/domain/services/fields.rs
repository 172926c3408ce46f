use crate::domain::model::{Match, Record};
use serde::{Deserialize, Serialize};

/// Source keys for each match field. The first key present in a record wins,
/// so one mapping can cover several feed layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default = "default_home_team")]
    pub home_team: Vec<String>,
    #[serde(default = "default_away_team")]
    pub away_team: Vec<String>,
    #[serde(default = "default_score")]
    pub score: Vec<String>,
    #[serde(default = "default_round_id")]
    pub round_id: Vec<String>,
}

fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn default_home_team() -> Vec<String> {
    keys(&["homeTeam", "Local"])
}

fn default_away_team() -> Vec<String> {
    keys(&["awayTeam", "Visitante"])
}

fn default_score() -> Vec<String> {
    keys(&["score", "Marcador"])
}

fn default_round_id() -> Vec<String> {
    keys(&["roundId", "Sem."])
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            home_team: default_home_team(),
            away_team: default_away_team(),
            score: default_score(),
            round_id: default_round_id(),
        }
    }
}

impl FieldMapping {
    pub fn to_match(&self, record: &Record) -> Match {
        Match {
            home_team: lookup(record, &self.home_team),
            away_team: lookup(record, &self.away_team),
            score: lookup(record, &self.score),
            round_id: lookup(record, &self.round_id),
        }
    }

    pub fn to_matches(&self, records: &[Record]) -> Vec<Match> {
        records.iter().map(|r| self.to_match(r)).collect()
    }
}

/// Strings are taken as is, numbers as their decimal text. Anything else
/// (missing, null, booleans, arrays, objects) reads as an empty string.
fn lookup(record: &Record, keys: &[String]) -> String {
    keys.iter()
        .find_map(|key| record.data.get(key))
        .map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}
