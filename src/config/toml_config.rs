use crate::core::ConfigProvider;
use crate::domain::services::fields::FieldMapping;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_source, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// http(s) URL or local path
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub field_mapping: FieldMapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub team: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEAGUE_SOURCE})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn field_mapping(&self) -> FieldMapping {
        self.extract.field_mapping.clone()
    }

    fn team_filter(&self) -> Option<&str> {
        self.filter.team.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_source("source.endpoint", &self.source.endpoint)?;
        validate_path("load.output_path", &self.load.output_path)?;

        let mapping = &self.extract.field_mapping;
        for (field, keys) in [
            ("extract.field_mapping.home_team", &mapping.home_team),
            ("extract.field_mapping.away_team", &mapping.away_team),
            ("extract.field_mapping.score", &mapping.score),
            ("extract.field_mapping.round_id", &mapping.round_id),
        ] {
            if keys.is_empty() {
                return Err(EtlError::MissingConfigError {
                    field: field.to_string(),
                });
            }
            for key in keys {
                validate_non_empty_string(field, key)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "liga"

[source]
endpoint = "https://example.com/liga.json"

[load]
output_path = "./test-output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "liga");
        assert_eq!(config.source(), "https://example.com/liga.json");
        assert_eq!(config.field_mapping(), FieldMapping::default());
        assert_eq!(config.team_filter(), None);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_field_mapping_and_filter() {
        let toml_content = r#"
[pipeline]
name = "liga"

[source]
endpoint = "data/liga.json"

[extract.field_mapping]
home_team = ["home"]
round_id = ["matchday", "week"]

[filter]
team = "Betis"

[load]
output_path = "./out"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mapping = config.field_mapping();

        assert_eq!(mapping.home_team, vec!["home"]);
        assert_eq!(mapping.round_id, vec!["matchday", "week"]);
        assert_eq!(mapping.score, FieldMapping::default().score);
        assert_eq!(config.team_filter(), Some("Betis"));
        assert!(config.monitoring_enabled());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LEAGUE_ETL_TEST_SOURCE", "https://test.api.com/liga.json");

        let toml_content = r#"
[pipeline]
name = "liga"

[source]
endpoint = "${LEAGUE_ETL_TEST_SOURCE}"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://test.api.com/liga.json");

        std::env::remove_var("LEAGUE_ETL_TEST_SOURCE");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[pipeline]
name = "liga"

[source]
endpoint = "ftp://example.com/liga.json"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_field_mapping_is_rejected() {
        let toml_content = r#"
[pipeline]
name = "liga"

[source]
endpoint = "liga.json"

[extract.field_mapping]
score = []

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(EtlError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[pipeline\nname = ").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"

[source]
endpoint = "liga.json"

[load]
output_path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
    }
}
