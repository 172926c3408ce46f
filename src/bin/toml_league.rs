use clap::Parser;
use league_etl::config::toml_config::TomlConfig;
use league_etl::core::report::render_standings;
use league_etl::core::ConfigProvider;
use league_etl::utils::{logger, validation::Validate};
use league_etl::{EtlEngine, LeaguePipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-league")]
#[command(about = "League ETL driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "league-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the team filter from config
    #[arg(long)]
    team: Option<String>,

    /// Dry run - read and check the source without writing any output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based league ETL");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(team) = args.team.clone() {
        tracing::info!("🔧 Team filter overridden to: {}", team);
        config.filter.team = Some(team);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = LeaguePipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        return match perform_dry_run(&pipeline).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code().max(1));
            }
        };
    }

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(run) => {
            tracing::info!("✅ League ETL completed successfully!");
            print!("{}", render_standings(&run.report.standings));
            println!("📁 Output saved to: {}", run.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ League ETL failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("🌐 Source: {}", config.source());
    tracing::info!("💾 Output: {}", config.output_path());
    if let Some(team) = config.team_filter() {
        tracing::info!("🔎 Team filter: {}", team);
    }
}

/// Extracts and transforms, reporting what a full run would produce.
async fn perform_dry_run(
    pipeline: &LeaguePipeline<LocalStorage, TomlConfig>,
) -> league_etl::Result<()> {
    use league_etl::core::Pipeline;

    let records = pipeline.extract().await?;
    tracing::info!("📥 {} records would be processed", records.len());

    let report = pipeline.transform(records).await?;
    tracing::info!(
        "🧮 {} rounds, {} teams in the table",
        report.rounds.len(),
        report.standings.len()
    );
    print!("{}", render_standings(&report.standings));
    Ok(())
}
