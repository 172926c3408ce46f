use crate::domain::model::{Match, Outcome, SCORE_SEPARATOR};
use crate::utils::error::{EtlError, Result};
use std::cmp::Ordering;

/// Splits "2–1" into ("2", "1"). The tokens are not checked for digits.
pub fn split_score(score: &str) -> Result<(&str, &str)> {
    let (home, away) = score
        .split_once(SCORE_SEPARATOR)
        .ok_or_else(|| EtlError::malformed_score(score, "missing en-dash separator"))?;

    if away.contains(SCORE_SEPARATOR) {
        return Err(EtlError::malformed_score(score, "more than two score tokens"));
    }

    Ok((home, away))
}

/// Parses both tokens of a score as decimal goal counts.
pub fn parse_score(score: &str) -> Result<(u32, u32)> {
    let (home, away) = split_score(score)?;
    Ok((parse_goals(score, home)?, parse_goals(score, away)?))
}

fn parse_goals(score: &str, token: &str) -> Result<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EtlError::malformed_score(
            score,
            format!("'{}' is not a goal count", token),
        ));
    }

    token
        .parse()
        .map_err(|e| EtlError::malformed_score(score, format!("'{}': {}", token, e)))
}

pub fn resolve_outcome(home_goals: u32, away_goals: u32) -> Outcome {
    match home_goals.cmp(&away_goals) {
        Ordering::Greater => Outcome::HomeWin,
        Ordering::Less => Outcome::AwayWin,
        Ordering::Equal => Outcome::Draw,
    }
}

impl Outcome {
    pub fn of(m: &Match) -> Result<Self> {
        let (home, away) = parse_score(&m.score)?;
        Ok(resolve_outcome(home, away))
    }
}
