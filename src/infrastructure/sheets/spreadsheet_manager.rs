use std::fmt::Debug;

use error_stack::ResultExt;
use google_sheets4::Sheets;
use thiserror::Error;
use tracing::instrument;

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
};
use crate::config::sheets_config::SpreadsheetConfig;

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to authenticate against Google Sheets")]
    FailedToAuthenticate,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(
        config: SpreadsheetConfig,
    ) -> error_stack::Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone())
            .await
            .change_context(SpreadsheetManagerError::FailedToAuthenticate)?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }
}
