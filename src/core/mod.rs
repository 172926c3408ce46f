pub mod etl;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{LeagueReport, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
