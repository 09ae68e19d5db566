use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use thiserror::Error;

use super::http_client::HttpsConnector;
use crate::config::sheets_config::{SheetsAuthConfig, SpreadsheetConfig};

#[derive(Error, Debug)]
pub enum SheetsAuthError {
    #[error("Could not read credentials file '{0}'")]
    ReadCredentials(String),
    #[error("Could not create an authenticator")]
    BuildAuthenticator,
}

pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SheetsAuthError> {
    match &config.auth {
        SheetsAuthConfig::ServiceAccount { priv_key } => {
            let priv_key: &str = priv_key;
            let secret: oauth2::ServiceAccountKey =
                oauth2::read_service_account_key(priv_key)
                    .await
                    .change_context_lazy(|| SheetsAuthError::ReadCredentials(priv_key.to_string()))
                    .attach_printable(
                        "Please provide a valid service account private key to enable Google Sheets integration",
                    )?;

            oauth2::ServiceAccountAuthenticator::with_client(secret, client)
                .build()
                .await
                .change_context(SheetsAuthError::BuildAuthenticator)
        }
        SheetsAuthConfig::InstalledFlow {
            client_secret,
            token_cache,
        } => {
            let client_secret: &str = client_secret;
            let token_cache: &str = token_cache;
            let secret = oauth2::read_application_secret(client_secret)
                .await
                .change_context_lazy(|| {
                    SheetsAuthError::ReadCredentials(client_secret.to_string())
                })?;

            oauth2::InstalledFlowAuthenticator::with_client(
                secret,
                oauth2::InstalledFlowReturnMethod::HTTPRedirect,
                client,
            )
            .persist_tokens_to_disk(token_cache)
            .build()
            .await
            .change_context(SheetsAuthError::BuildAuthenticator)
            .attach_printable_lazy(|| format!("Token cache: {}", token_cache))
        }
    }
}
