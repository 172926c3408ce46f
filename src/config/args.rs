use crate::core::ConfigProvider;
use crate::domain::services::fields::FieldMapping;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_source, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "league-etl")]
#[command(about = "Builds league rounds and standings from a list of match results")]
pub struct CliConfig {
    /// http(s) URL or path of the JSON match list
    #[arg(long, default_value = "liga.json")]
    pub source: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Only keep matches whose home or away team contains this text
    #[arg(long)]
    pub team: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per ETL phase")]
    pub monitor: bool,

    #[arg(long, help = "Read team filters from stdin after the run")]
    pub interactive: bool,
}

impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn field_mapping(&self) -> FieldMapping {
        FieldMapping::default()
    }

    fn team_filter(&self) -> Option<&str> {
        self.team.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_source("source", &self.source)?;
        validate_path("output_path", &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["league-etl"]);

        assert_eq!(config.source(), "liga.json");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.team_filter(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_team_filter() {
        let config = CliConfig::parse_from([
            "league-etl",
            "--source",
            "https://example.com/liga.json",
            "--team",
            "Betis",
        ]);

        assert_eq!(config.team_filter(), Some("Betis"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_source() {
        let config = CliConfig::parse_from(["league-etl", "--source", "ftp://example.com/x"]);
        assert!(config.validate().is_err());
    }
}
