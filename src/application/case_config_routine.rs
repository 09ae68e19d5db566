use std::{path::Path, sync::Arc};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

use crate::config::export_config::ExportConfig;
use crate::domain::cases::{
    case_parser::parse_cases,
    diagnostics::{DiagnosticSink, TracingDiagnostics},
    entities::CaseConfigMap,
    rewards_table::{RewardsTable, RewardsTableError},
};
use crate::domain::sheets::{grid::Grid, grid_source::GridSource};
use crate::infrastructure::output::json_file::{render_json, write_json};

#[derive(Error, Debug)]
pub enum CaseConfigRoutineError {
    #[error("Failed to fetch the cases and rewards sheets")]
    FetchSheets,
    #[error("The rewards sheet is malformed")]
    InvalidSheetData,
    #[error("Failed to export the case config")]
    ExportOutput,
}

/// Normalizes both sheets, builds the rewards table and parses the case.
pub fn compile_case_config(
    cases: Grid,
    rewards: Grid,
    diagnostics: &mut impl DiagnosticSink,
) -> error_stack::Result<CaseConfigMap, RewardsTableError> {
    let cases = cases.normalize();
    let rewards = rewards.normalize();
    tracing::debug!("cases_values: {:?}", cases);
    tracing::debug!("rewards_values: {:?}", rewards);

    let rewards_table = RewardsTable::from_grid(&rewards)?;
    Ok(parse_cases(&cases, &rewards_table, diagnostics))
}

pub struct CaseConfigRoutine {
    source: Arc<dyn GridSource>,
    export: ExportConfig,
}

impl std::fmt::Debug for CaseConfigRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseConfigRoutine")
            .field("export", &self.export)
            .finish()
    }
}

impl CaseConfigRoutine {
    pub const NAME: &'static str = "CaseConfigRoutine";

    pub fn new(source: Arc<dyn GridSource>, export: ExportConfig) -> Self {
        Self { source, export }
    }

    #[instrument]
    async fn fetch_grids(&self) -> error_stack::Result<(Grid, Grid), CaseConfigRoutineError> {
        futures::try_join!(
            self.source.read_grid(&self.export.cases_range),
            self.source.read_grid(&self.export.rewards_range),
        )
        .change_context(CaseConfigRoutineError::FetchSheets)
    }

    /// Fetches both ranges, compiles them and writes the JSON file. Nothing is written on failure.
    #[instrument(skip(self), name = "CaseConfigRoutine::run")]
    pub async fn run(&self) -> error_stack::Result<(), CaseConfigRoutineError> {
        tracing::info!("Cases: ☁️  Reading the cases and rewards sheets");
        let (cases, rewards) = self.fetch_grids().await?;

        tracing::info!("Cases: 📋 Compiling the case config");
        let case_configs = compile_case_config(cases, rewards, &mut TracingDiagnostics)
            .change_context(CaseConfigRoutineError::InvalidSheetData)?;

        let json = render_json(&case_configs).change_context(CaseConfigRoutineError::ExportOutput)?;
        tracing::info!("{}", json);

        tracing::info!("Cases: 📝 Writing {}", self.export.output_path);
        write_json(Path::new(&self.export.output_path), &json)
            .await
            .change_context(CaseConfigRoutineError::ExportOutput)?;

        tracing::info!("Cases: ✅ Case config exported");
        Ok(())
    }
}
