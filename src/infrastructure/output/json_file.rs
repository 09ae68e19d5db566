use std::path::Path;

use error_stack::ResultExt;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::domain::cases::entities::CaseConfigMap;

#[derive(Error, Debug)]
pub enum CaseConfigExportError {
    #[error("Failed to serialize case config")]
    Serialize,
    #[error("Failed to write case config file")]
    WriteOutput,
}

/// Renders the compiled cases as JSON indented by four spaces. Non-ASCII text is kept as is.
pub fn render_json(
    case_configs: &CaseConfigMap,
) -> error_stack::Result<String, CaseConfigExportError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    case_configs
        .serialize(&mut serializer)
        .change_context(CaseConfigExportError::Serialize)?;

    String::from_utf8(buffer).change_context(CaseConfigExportError::Serialize)
}

#[instrument(skip(json))]
pub async fn write_json(path: &Path, json: &str) -> error_stack::Result<(), CaseConfigExportError> {
    tokio::fs::write(path, json)
        .await
        .change_context(CaseConfigExportError::WriteOutput)
        .attach_printable_lazy(|| format!("Output path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::cases::entities::{
        CaseConfig, Group, GroupName, RewardParameters, RewardRef,
    };

    fn sample() -> CaseConfigMap {
        let mut groups = BTreeMap::new();
        groups.insert(
            GroupName::from_number(1),
            Group {
                group_chance: 1.0,
                rewards: vec![RewardRef {
                    item_tech_name: "Меч".to_string(),
                    kind: "weapon".to_string(),
                    parameters: RewardParameters {
                        count: 1,
                        item_id: "42".to_string(),
                        chance: 0.8,
                    },
                }],
            },
        );
        let mut configs = CaseConfigMap::new();
        configs.insert(
            "Обычный кейс".to_string(),
            CaseConfig {
                case_tech_name: "CommonCrate_v1".to_string(),
                groups,
            },
        );
        configs
    }

    #[test]
    fn test_render_json_layout() {
        let json = render_json(&sample()).unwrap();
        let expected = r#"{
    "Обычный кейс": {
        "case_tech_name": "CommonCrate_v1",
        "groups": {
            "group_1": {
                "group_chance": 1.0,
                "rewards": [
                    {
                        "item_tech_name": "Меч",
                        "type": "weapon",
                        "parameters": {
                            "count": 1,
                            "item_id": "42",
                            "chance": 0.8
                        }
                    }
                ]
            }
        }
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_json(&CaseConfigMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_render_json_parses_back() {
        let configs = sample();
        let json = render_json(&configs).unwrap();
        let parsed: CaseConfigMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, configs);
    }

    #[tokio::test]
    async fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case_config.json");
        write_json(&path, "{}").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_write_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("case_config.json");
        let report = write_json(&path, "{}").await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            CaseConfigExportError::WriteOutput
        ));
    }
}
