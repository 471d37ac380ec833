//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, run the batch.
//! No business logic here; formulas and dispatch live in the domain.

use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workout_calc::adapters::report::WriterReportSink;
use workout_calc::adapters::sensors::StaticPackageSource;
use workout_calc::adapters::ui::BatchInputPort;
use workout_calc::ports::{InputPort, PackageSource, ReportSink};
use workout_calc::shared::config::AppConfig;
use workout_calc::usecases::WorkoutService;

#[tokio::main]
async fn main() {
    let env_loaded = dotenv();
    // Logs go to stderr; stdout carries only report lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    if let Err(e) = run().await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });
    let locale = cfg.locale_or_default();
    let format = cfg.report_format_or_default();
    info!(?locale, ?format, "report settings");

    let source: Arc<dyn PackageSource> = Arc::new(StaticPackageSource::sample());
    let sink: Arc<dyn ReportSink> = Arc::new(WriterReportSink::stdout(format, locale));
    let service = Arc::new(WorkoutService::new(source, sink));

    let input_port: Arc<dyn InputPort> = Arc::new(BatchInputPort::new(service));
    input_port
        .run()
        .await
        .context("workout batch failed")?;

    Ok(())
}
