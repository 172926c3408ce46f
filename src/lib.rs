pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::EtlEngine, pipeline::LeaguePipeline};
pub use domain::model::{Match, Outcome, Round, TeamStanding};
pub use domain::services::{build_league, League};
pub use utils::error::{EtlError, Result};
