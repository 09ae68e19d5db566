#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub auth: SheetsAuthConfig,
}

/// How to obtain credentials for the Sheets API
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SheetsAuthConfig {
    /// Service account key file downloaded from the Google Cloud console
    ServiceAccount { priv_key: Box<str> },
    /// OAuth client secret of a desktop app. The browser consent happens once, tokens are then
    /// kept in `token_cache` and refreshed from there.
    InstalledFlow {
        client_secret: Box<str>,
        token_cache: Box<str>,
    },
}
