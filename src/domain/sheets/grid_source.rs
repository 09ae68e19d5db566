use thiserror::Error;

use super::grid::Grid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridSourceError {
    #[error("Failed to fetch range")]
    FailedToFetchRange,
}

/// Anything able to hand out a spreadsheet range as a [`Grid`].
#[async_trait::async_trait]
pub trait GridSource: Send + Sync {
    /// Reads the cells of `range` (A1 notation, e.g. `Sheet!A:N`) as they are displayed.
    async fn read_grid(&self, range: &str) -> error_stack::Result<Grid, GridSourceError>;
}
