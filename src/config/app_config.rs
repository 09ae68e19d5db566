use std::sync::LazyLock;

use config::Config;
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub sheets: super::sheets_config::SpreadsheetConfig,
    #[serde(default)]
    pub export: super::export_config::ExportConfig,
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Error reading config file '{0}'")]
    Read(String),
    #[error("Failed to deserialize config file '{config_path}' at field '{field_path}'")]
    Deserialize {
        config_path: String,
        field_path: String,
    },
}

impl AppConfig {
    /// Reads the config file at `config_path`; the extension may be left out
    /// (`Config` finds `Config.toml`, `Config.yaml`, ...).
    pub fn load(config_path: &str) -> error_stack::Result<Self, ConfigLoadError> {
        let value = Config::builder()
            .add_source(config::File::with_name(config_path))
            .build()
            .and_then(|config| config.try_deserialize::<serde_json::Value>())
            .change_context_lazy(|| ConfigLoadError::Read(config_path.to_string()))?;

        use serde::de::IntoDeserializer;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        AppConfig::deserialize(path_de).map_err(|e| {
            let field_path = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(ConfigLoadError::Deserialize {
                config_path: config_path.to_string(),
                field_path: field_path.trim_start_matches('.').to_string(),
            })
            .attach_printable(e.to_string())
        })
    }
}

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
    match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(report) => panic!(
            "[CONFIG ERROR] {:?}\nMake sure all required fields are present in the configuration file.",
            report
        ),
    }
});

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::sheets_config::SheetsAuthConfig;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_defaults() {
        let file = write_config(
            r#"
            [sheets]
            spreadsheet_id = "sheet-id"

            [sheets.auth]
            method = "service_account"
            priv_key = "key.json"
            "#,
        );

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.sheets.spreadsheet_id.as_ref(), "sheet-id");
        assert_eq!(
            config.sheets.auth,
            SheetsAuthConfig::ServiceAccount {
                priv_key: "key.json".into()
            }
        );
        assert_eq!(config.export.cases_range, "Кейсы!A:N");
        assert_eq!(config.export.rewards_range, "Таблица Наград!A:I");
        assert_eq!(config.export.output_path, "case_config.json");
    }

    #[test]
    fn test_load_installed_flow_and_export_overrides() {
        let file = write_config(
            r#"
            [sheets]
            spreadsheet_id = "sheet-id"

            [sheets.auth]
            method = "installed_flow"
            client_secret = "credentials.json"
            token_cache = "tokens.json"

            [export]
            cases_range = "Cases!A:N"
            output_path = "out/cases.json"
            "#,
        );

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            config.sheets.auth,
            SheetsAuthConfig::InstalledFlow {
                client_secret: "credentials.json".into(),
                token_cache: "tokens.json".into(),
            }
        );
        assert_eq!(config.export.cases_range, "Cases!A:N");
        assert_eq!(config.export.rewards_range, "Таблица Наград!A:I");
        assert_eq!(config.export.output_path, "out/cases.json");
    }

    #[test]
    fn test_missing_field_reports_path() {
        let file = write_config(
            r#"
            [sheets]
            spreadsheet_id = "sheet-id"

            [sheets.auth]
            method = "service_account"
            "#,
        );

        let report = AppConfig::load(file.path().to_str().unwrap()).unwrap_err();
        match report.current_context() {
            ConfigLoadError::Deserialize { field_path, .. } => {
                assert!(field_path.starts_with("sheets"), "{field_path}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let report = AppConfig::load("/nonexistent/Config").unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigLoadError::Read(_)
        ));
    }
}
