//! Pure league computations: score parsing, cleaning, round grouping,
//! per-match scoring, standings and team filtering.

pub mod fields;
pub mod filter;
pub mod league;
pub mod rounds;
pub mod score;
pub mod scoring;
pub mod standings;

pub use filter::filter_by_team;
pub use league::{build_league, League};
pub use rounds::{clean_matches, flatten_rounds, group_by_round};
pub use score::{parse_score, resolve_outcome, split_score};
pub use scoring::{goals_for, points_for};
pub use standings::{aggregate_standings, compare_standings, sort_standings, team_universe};
