use httpmock::prelude::*;
use league_etl::config::toml_config::TomlConfig;
use league_etl::{CliConfig, EtlEngine, EtlError, LeaguePipeline, LocalStorage};
use tempfile::TempDir;

fn liga_json() -> serde_json::Value {
    serde_json::json!([
        {"Sem.": 1, "Local": "Betis", "Visitante": "Sevilla", "Marcador": "2–1"},
        {"Sem.": 1, "Local": "Getafe", "Visitante": "Osasuna", "Marcador": "0–0"},
        {"Sem.": 1, "Local": "", "Visitante": "", "Marcador": ""},
        {"Sem.": 2, "Local": "Sevilla", "Visitante": "Getafe", "Marcador": "10–2"},
        {"Sem.": 2, "Local": "Osasuna", "Visitante": "Betis", "Marcador": "1–1"},
        {"Sem.": 3, "Local": "Betis", "Visitante": "Getafe", "Marcador": "0–1"},
        {"Sem.": 3, "Local": "Sevilla", "Visitante": "Osasuna", "Marcador": "3–3"}
    ])
}

fn cli_config(source: String, output_path: &str, team: Option<&str>) -> CliConfig {
    CliConfig {
        source,
        output_path: output_path.to_string(),
        team: team.map(str::to_string),
        verbose: false,
        monitor: false,
        interactive: false,
    }
}

fn read_zip_entry(archive: &mut zip::ZipArchive<std::io::Cursor<Vec<u8>>>, name: &str) -> String {
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    std::io::Read::read_to_string(&mut file, &mut content).unwrap();
    content
}

#[tokio::test]
async fn test_end_to_end_league_from_api() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/liga.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(liga_json());
    });

    let config = cli_config(server.url("/liga.json"), &output_path, Some("Sevilla"));
    let storage = LocalStorage::new(output_path.clone());
    let engine = EtlEngine::new(LeaguePipeline::new(storage, config));

    let run = engine.run().await.unwrap();
    api_mock.assert();

    assert!(run.output_path.ends_with("league_output.zip"));
    assert_eq!(run.report.rounds.len(), 3);

    let table: Vec<(&str, u32)> = run
        .report
        .standings
        .iter()
        .map(|s| (s.team.as_str(), s.points))
        .collect();
    // three teams on 4 points, split by goal difference
    assert_eq!(
        table,
        vec![("Sevilla", 4), ("Betis", 4), ("Getafe", 4), ("Osasuna", 3)]
    );

    let full_path = std::path::Path::new(&output_path).join("league_output.zip");
    let zip_data = std::fs::read(&full_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 4);

    let csv = read_zip_entry(&mut archive, "standings.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "position,team,points,goals_for,goals_against,goal_difference"
    );
    assert_eq!(lines[1], "1,Sevilla,4,14,7,7");

    let filtered = read_zip_entry(&mut archive, "filtered_rounds.json");
    let value: serde_json::Value = serde_json::from_str(&filtered).unwrap();
    let rounds = value["rounds"].as_array().unwrap();
    assert_eq!(rounds.len(), 3);
    for round in rounds {
        let matches = round["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert!(m["homeTeam"] == "Sevilla" || m["awayTeam"] == "Sevilla");
    }
}

#[tokio::test]
async fn test_end_to_end_with_api_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let config = cli_config(server.url("/failed"), &output_path, None);
    let storage = LocalStorage::new(output_path.clone());
    let engine = EtlEngine::new(LeaguePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, EtlError::ApiError(_)));
    assert!(!std::path::Path::new(&output_path)
        .join("league_output.zip")
        .exists());
}

#[tokio::test]
async fn test_malformed_score_stops_before_load() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let source_path = temp_dir.path().join("liga.json");

    let data = serde_json::json!([
        {"homeTeam": "A", "awayTeam": "B", "score": "2–1", "roundId": "1"},
        {"homeTeam": "B", "awayTeam": "A", "score": "2 - 1", "roundId": "2"}
    ]);
    std::fs::write(&source_path, data.to_string()).unwrap();

    let config = cli_config(
        source_path.to_str().unwrap().to_string(),
        output_path.to_str().unwrap(),
        None,
    );
    let storage = LocalStorage::new(output_path.clone());
    let engine = EtlEngine::new(LeaguePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, EtlError::MalformedScore { ref score, .. } if score == "2 - 1"));
    assert!(!output_path.join("league_output.zip").exists());
}

#[tokio::test]
async fn test_toml_config_with_file_source() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let source_path = temp_dir.path().join("matches.json");
    let output_path = temp_dir.path().join("output");

    let data = serde_json::json!([
        {"week": 1, "home": "A", "away": "B", "result": "2–1"},
        {"week": 1, "home": "C", "away": "D", "result": "0–0"}
    ]);
    tokio::fs::write(&source_path, data.to_string()).await?;

    let toml_content = format!(
        r#"
[pipeline]
name = "file-league"

[source]
endpoint = "{}"

[extract.field_mapping]
home_team = ["home"]
away_team = ["away"]
score = ["result"]
round_id = ["week"]

[filter]
team = "A"

[load]
output_path = "{}"
"#,
        source_path.to_str().unwrap().replace('\\', "/"),
        output_path.to_str().unwrap().replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    let storage = LocalStorage::new(output_path.clone());
    let engine = EtlEngine::new(LeaguePipeline::new(storage, config));
    let run = engine.run().await?;

    let standings: Vec<(&str, u32, u32, u32)> = run
        .report
        .standings
        .iter()
        .map(|s| (s.team.as_str(), s.points, s.goals_for, s.goals_against))
        .collect();
    assert_eq!(
        standings,
        vec![("A", 3, 2, 1), ("C", 1, 0, 0), ("D", 1, 0, 0), ("B", 0, 1, 2)]
    );

    let filtered = run.report.filtered_rounds.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].matches.len(), 1);
    assert_eq!(filtered[0].matches[0].away_team, "B");

    assert!(output_path.join("league_output.zip").exists());
    Ok(())
}
