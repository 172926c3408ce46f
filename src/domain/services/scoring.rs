use crate::domain::model::{Goals, Match, Outcome};
use crate::domain::services::score::parse_score;
use crate::utils::error::{EtlError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

fn side_of(team: &str, m: &Match) -> Result<Side> {
    if team == m.home_team {
        Ok(Side::Home)
    } else if team == m.away_team {
        Ok(Side::Away)
    } else {
        Err(EtlError::TeamNotInMatch {
            team: team.to_string(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
        })
    }
}

/// League points earned by `team` in `m`: 3 for a win, 1 for a draw.
pub fn points_for(team: &str, m: &Match) -> Result<u32> {
    let side = side_of(team, m)?;

    let points = match (side, Outcome::of(m)?) {
        (_, Outcome::Draw) => 1,
        (Side::Home, Outcome::HomeWin) | (Side::Away, Outcome::AwayWin) => 3,
        (Side::Home, Outcome::AwayWin) | (Side::Away, Outcome::HomeWin) => 0,
    };
    Ok(points)
}

pub fn goals_for(team: &str, m: &Match) -> Result<Goals> {
    let side = side_of(team, m)?;
    let (home, away) = parse_score(&m.score)?;

    Ok(match side {
        Side::Home => Goals {
            goals_for: home,
            goals_against: away,
        },
        Side::Away => Goals {
            goals_for: away,
            goals_against: home,
        },
    })
}
