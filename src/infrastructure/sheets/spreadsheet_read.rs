use error_stack::ResultExt;
use tracing::instrument;

use super::{
    into_grid::IntoGrid,
    spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError},
};
use crate::domain::sheets::{
    grid::Grid,
    grid_source::{GridSource, GridSourceError},
};

pub trait SpreadsheetRead {
    fn read_range(
        &self,
        range: &str,
    ) -> impl std::future::Future<Output = error_stack::Result<Grid, SpreadsheetManagerError>>
           + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_range(&self, range: &str) -> error_stack::Result<Grid, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        // A range without any filled cell comes back without `values`
        Ok(response.1.values.into_grid())
    }
}

#[async_trait::async_trait]
impl GridSource for SpreadsheetManager {
    async fn read_grid(&self, range: &str) -> error_stack::Result<Grid, GridSourceError> {
        self.read_range(range)
            .await
            .change_context(GridSourceError::FailedToFetchRange)
    }
}
