use crate::core::{LeagueReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// What a run produced: where the bundle went and what was in it.
#[derive(Debug, Clone)]
pub struct EtlRun {
    pub output_path: String,
    pub report: LeagueReport,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<EtlRun> {
        tracing::info!("Starting league ETL process...");
        self.monitor.log_stats("Start");

        // Extract
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} match records", raw_data.len());
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Built {} rounds and standings for {} teams",
            report.rounds.len(),
            report.standings.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(report.clone()).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(EtlRun {
            output_path,
            report,
        })
    }
}
