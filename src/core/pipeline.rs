use crate::core::report::{standings_delimited, RoundsDocument};
use crate::core::{ConfigProvider, LeagueReport, Pipeline, Record, Storage};
use crate::domain::services::build_league;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::is_remote_source;
use reqwest::Client;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const OUTPUT_FILE: &str = "league_output.zip";

pub struct LeaguePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> LeaguePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_source(&self) -> Result<serde_json::Value> {
        let source = self.config.source();

        if is_remote_source(source) {
            tracing::debug!("Making API request to: {}", source);
            let response = self.client.get(source).send().await?;
            tracing::debug!("API response status: {}", response.status());
            Ok(response.error_for_status()?.json().await?)
        } else {
            tracing::debug!("Reading match list from file: {}", source);
            let bytes = tokio::fs::read(source).await.map_err(|e| {
                EtlError::InvalidSourceError {
                    message: format!("cannot read '{}': {}", source, e),
                }
            })?;
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}

/// Turns the source document into records. Only an array of objects is
/// accepted; other array items are skipped.
pub fn records_from_json(json_data: serde_json::Value) -> Result<Vec<Record>> {
    let serde_json::Value::Array(items) = json_data else {
        return Err(EtlError::InvalidSourceError {
            message: "expected a JSON array of matches".to_string(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            serde_json::Value::Object(obj) => records.push(Record {
                data: obj.into_iter().collect(),
            }),
            other => tracing::warn!("Skipping item {}: not an object ({})", i, other),
        }
    }
    Ok(records)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeaguePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let json_data = self.fetch_source().await?;
        records_from_json(json_data)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<LeagueReport> {
        let matches = self.config.field_mapping().to_matches(&data);
        let league = build_league(&matches)?;

        let team_filter = self.config.team_filter().map(str::to_string);
        let filtered_rounds = team_filter.as_deref().map(|query| {
            let rounds = league.filter(query);
            tracing::debug!(
                "Team filter '{}' kept {} matches",
                query,
                rounds.iter().map(|r| r.matches.len()).sum::<usize>()
            );
            rounds
        });

        Ok(LeagueReport {
            csv_output: standings_delimited(&league.standings, b',')?,
            tsv_output: standings_delimited(&league.standings, b'\t')?,
            rounds: league.rounds,
            standings: league.standings,
            team_filter,
            filtered_rounds,
        })
    }

    async fn load(&self, report: LeagueReport) -> Result<String> {
        let output_path = format!("{}/{}", self.config.output_path(), OUTPUT_FILE);

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("standings.csv", FileOptions::default())?;
            zip.write_all(report.csv_output.as_bytes())?;

            zip.start_file::<_, ()>("standings.tsv", FileOptions::default())?;
            zip.write_all(report.tsv_output.as_bytes())?;

            zip.start_file::<_, ()>("rounds.json", FileOptions::default())?;
            let rounds_json = RoundsDocument::new(&report.rounds, None).to_json()?;
            zip.write_all(rounds_json.as_bytes())?;

            if let Some(filtered) = &report.filtered_rounds {
                zip.start_file::<_, ()>("filtered_rounds.json", FileOptions::default())?;
                let filtered_json =
                    RoundsDocument::new(filtered, report.team_filter.as_deref()).to_json()?;
                zip.write_all(filtered_json.as_bytes())?;
            }

            // 完成並取回底層 Vec<u8>
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(OUTPUT_FILE, &zip_data).await?;

        Ok(output_path)
    }
}
