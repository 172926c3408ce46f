use clap::Parser;
use league_etl::core::report::{render_rounds, render_standings};
use league_etl::domain::services::filter_by_team;
use league_etl::utils::error::EtlError;
use league_etl::utils::{logger, validation::Validate};
use league_etl::{CliConfig, EtlEngine, LeaguePipeline, LocalStorage, Round};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting league-etl CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    let interactive = config.interactive;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = LeaguePipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(run) => {
            print!("{}", render_standings(&run.report.standings));
            if let (Some(query), Some(rounds)) =
                (&run.report.team_filter, &run.report.filtered_rounds)
            {
                println!("\nMatches for '{}':", query);
                print!("{}", render_rounds(rounds));
            }
            println!("📁 Output saved to: {}", run.output_path);

            if interactive {
                filter_loop(&run.report.rounds).await?;
            }
        }
        Err(e) => fail(e),
    }

    Ok(())
}

/// Re-filters the same rounds for every line typed until EOF.
async fn filter_loop(rounds: &[Round]) -> std::io::Result<()> {
    println!("Type a team name to filter matches (Ctrl-D to quit):");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(query) = lines.next_line().await? {
        print!("{}", render_rounds(&filter_by_team(rounds, &query)));
    }
    Ok(())
}

fn fail(e: EtlError) {
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
