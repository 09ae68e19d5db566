use std::sync::Arc;

use case_config::application::case_config_routine::CaseConfigRoutine;
use case_config::config::app_config::CONFIG;
use case_config::infrastructure::sheets::spreadsheet_manager::SpreadsheetManager;
use case_config::prettyprint::prettyprint::PrettyFormatter;
use tracing::instrument;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry};

const LOG_FILE: &str = "case_config.log";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing()?;
    setup_panic_hook();

    tracing::info!("Starting case-config");

    let spreadsheet_manager = SpreadsheetManager::new(CONFIG.sheets.clone())
        .await
        .map_err(|report| {
            tracing::error!("❌ Could not connect to Google Sheets: {:?}", report);
            format!("{report}")
        })?;

    let routine = CaseConfigRoutine::new(Arc::new(spreadsheet_manager), CONFIG.export.clone());

    match routine.run().await {
        Ok(()) => {
            tracing::info!("✅ {}: OK", CaseConfigRoutine::NAME);
            Ok(())
        }
        Err(report) => {
            tracing::error!("❌ {}: {:?}", CaseConfigRoutine::NAME, report);
            Err(format!("{} failed: {}", CaseConfigRoutine::NAME, report).into())
        }
    }
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let indicatif_layer = IndicatifLayer::new();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(indicatif_layer.get_stderr_writer());

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(std::fs::File::create(LOG_FILE)?)
        .with_ansi(false);

    // e.g. CASE_CONFIG_LOG=case_config=info
    let targets = match std::env::var("CASE_CONFIG_LOG") {
        Ok(directives) => directives.parse::<Targets>()?,
        Err(_) => Targets::new().with_target("case_config", tracing::Level::TRACE),
    };

    Registry::default()
        .with(targets)
        .with(indicatif_layer)
        .with(log_file_layer)
        .with(stdout_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
