use std::fmt::Formatter;

use super::entities::GroupName;

/// Something in the case sheet was skipped. None of these abort the run.
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CaseDiagnostic {
    NotEnoughRows {
        rows: usize,
    },
    InvalidGroupChance {
        group: GroupName,
        value: String,
    },
    InvalidRewardValues {
        group: GroupName,
        reward: String,
        count: String,
        chance: String,
    },
    RewardNotFound {
        group: GroupName,
        reward: String,
    },
    /// `group_chance` is the parsed fraction, rendered as text.
    EmptyGroup {
        group: GroupName,
        group_chance: String,
    },
}

impl CaseDiagnostic {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for CaseDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseDiagnostic::NotEnoughRows { rows } => {
                write!(f, "Not enough rows in the cases sheet: {rows}")
            }
            CaseDiagnostic::InvalidGroupChance { group, value } => {
                write!(f, "Invalid group chance for {group}: {value}")
            }
            CaseDiagnostic::InvalidRewardValues {
                group,
                reward,
                count,
                chance,
            } => write!(
                f,
                "Invalid count or chance value for reward {reward} in {group}: count={count}, chance={chance}"
            ),
            CaseDiagnostic::RewardNotFound { group, reward } => {
                write!(f, "No data found for reward {reward} of {group}")
            }
            CaseDiagnostic::EmptyGroup {
                group,
                group_chance,
            } => write!(f, "No rewards for {group} (group chance {group_chance})"),
        }
    }
}

/// Receives the diagnostics produced while parsing a case sheet.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: CaseDiagnostic);
}

/// Forwards every diagnostic to `tracing` as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&mut self, diagnostic: CaseDiagnostic) {
        tracing::warn!(kind = diagnostic.kind(), "⚠️  {}", diagnostic);
    }
}

impl DiagnosticSink for Vec<CaseDiagnostic> {
    fn emit(&mut self, diagnostic: CaseDiagnostic) {
        self.push(diagnostic);
    }
}
