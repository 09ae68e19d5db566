use crate::domain::sheets::ranges;

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_cases_range")]
    pub cases_range: String,
    #[serde(default = "default_rewards_range")]
    pub rewards_range: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cases_range: default_cases_range(),
            rewards_range: default_rewards_range(),
            output_path: default_output_path(),
        }
    }
}

fn default_cases_range() -> String {
    ranges::cases::RO_CASES.to_string()
}

fn default_rewards_range() -> String {
    ranges::rewards::RO_REWARDS.to_string()
}

fn default_output_path() -> String {
    "case_config.json".to_string()
}
