use std::{collections::BTreeMap, fmt::Formatter, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Metadata of a reward as listed in the rewards sheet, keyed there by its tech name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub item_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardParameters {
    pub count: i64,
    pub item_id: String,
    pub chance: f64,
}

/// A reward of a group, resolved against the rewards table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRef {
    pub item_tech_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub parameters: RewardParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub group_chance: f64,
    pub rewards: Vec<RewardRef>,
}

/// `group_<n>` key of a group. `n` counts group slots of the sheet, so skipped slots leave gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupName(u32);

impl GroupName {
    const PREFIX: &'static str = "group_";

    pub fn from_number(number: u32) -> Self {
        GroupName(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GroupNameParseError {
    #[error("Group name must start with 'group_': {0}")]
    MissingPrefix(String),
    #[error("Invalid group number: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

impl FromStr for GroupName {
    type Err = GroupNameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| GroupNameParseError::MissingPrefix(s.to_string()))?;
        Ok(GroupName(number.parse()?))
    }
}

impl Serialize for GroupName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GroupName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    pub case_tech_name: String,
    pub groups: BTreeMap<GroupName, Group>,
}

/// Compiled cases keyed by their display name. This is the shape written to the output file.
pub type CaseConfigMap = BTreeMap<String, CaseConfig>;
