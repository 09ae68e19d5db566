use std::collections::BTreeMap;

use super::{
    diagnostics::{CaseDiagnostic, DiagnosticSink},
    entities::{CaseConfig, CaseConfigMap, Group, GroupName, RewardParameters, RewardRef},
    layout::cases as layout,
    percentage::{parse_percentage, strip_percentage},
    rewards_table::RewardsTable,
};
use crate::domain::sheets::grid::Grid;

/// Reads the case laid out in a normalized cases grid.
///
/// Group blocks are scanned every [`layout::GROUP_STRIDE`] columns from
/// [`layout::FIRST_GROUP_COLUMN`], and every block consumes a group number whether it turns out
/// to be a group or not. Bad cells only drop what they belong to; the result is empty only when
/// the grid has fewer than [`layout::MIN_ROWS`] rows.
pub fn parse_cases(
    grid: &Grid,
    rewards_table: &RewardsTable,
    diagnostics: &mut impl DiagnosticSink,
) -> CaseConfigMap {
    let mut case_configs = CaseConfigMap::new();

    if grid.len() < layout::MIN_ROWS {
        diagnostics.emit(CaseDiagnostic::NotEnoughRows { rows: grid.len() });
        return case_configs;
    }

    let case_name = grid.cell_or_empty(layout::CASE_NAME.0, layout::CASE_NAME.1);
    let case_tech_name = grid.cell_or_empty(layout::CASE_TECH_NAME.0, layout::CASE_TECH_NAME.1);

    let header_width = grid
        .row(layout::GROUP_HEADER_ROW)
        .map(<[String]>::len)
        .unwrap_or(0);

    let mut groups = BTreeMap::new();
    let slots = (layout::FIRST_GROUP_COLUMN..header_width).step_by(layout::GROUP_STRIDE);
    for (group_number, column) in (1..).zip(slots) {
        let group_name = GroupName::from_number(group_number);
        if let Some(group) = parse_group(grid, column, group_name, rewards_table, diagnostics) {
            groups.insert(group_name, group);
        }
    }

    case_configs.insert(
        case_name.to_string(),
        CaseConfig {
            case_tech_name: case_tech_name.to_string(),
            groups,
        },
    );

    case_configs
}

fn parse_group(
    grid: &Grid,
    column: usize,
    group_name: GroupName,
    rewards_table: &RewardsTable,
    diagnostics: &mut impl DiagnosticSink,
) -> Option<Group> {
    if !grid
        .cell_or_empty(layout::GROUP_HEADER_ROW, column)
        .contains(layout::GROUP_MARKER)
    {
        return None;
    }

    let chance_cell = grid.cell_or_empty(
        layout::GROUP_CHANCE_ROW,
        column + layout::GROUP_CHANCE_OFFSET,
    );
    let group_chance = match parse_percentage(chance_cell)? {
        Ok(chance) => chance,
        Err(_) => {
            diagnostics.emit(CaseDiagnostic::InvalidGroupChance {
                group: group_name,
                value: chance_cell.trim().to_string(),
            });
            return None;
        }
    };

    tracing::debug!("Processing {} with chance {}", group_name, group_chance);

    let rewards = (layout::FIRST_REWARD_ROW..grid.len())
        .filter_map(|row| parse_reward(grid, row, column, group_name, rewards_table, diagnostics))
        .collect::<Vec<_>>();

    if rewards.is_empty() {
        diagnostics.emit(CaseDiagnostic::EmptyGroup {
            group: group_name,
            group_chance: group_chance.to_string(),
        });
        return None;
    }

    Some(Group {
        group_chance,
        rewards,
    })
}

fn parse_reward(
    grid: &Grid,
    row: usize,
    column: usize,
    group_name: GroupName,
    rewards_table: &RewardsTable,
    diagnostics: &mut impl DiagnosticSink,
) -> Option<RewardRef> {
    let reward_name = grid
        .cell(row, column + layout::REWARD_NAME_OFFSET)
        .filter(|name| !name.is_empty())?;
    let count_str = grid
        .cell(row, column + layout::REWARD_COUNT_OFFSET)
        .map(str::trim)
        .filter(|count| !count.is_empty())?;
    let chance_str = grid
        .cell(row, column + layout::REWARD_CHANCE_OFFSET)
        .and_then(strip_percentage)?;

    tracing::trace!(
        "Reward: {}, Count: {}, Chance: {}",
        reward_name,
        count_str,
        chance_str
    );

    let (Ok(count), Some(Ok(chance))) = (count_str.parse::<i64>(), parse_percentage(chance_str))
    else {
        diagnostics.emit(CaseDiagnostic::InvalidRewardValues {
            group: group_name,
            reward: reward_name.to_string(),
            count: count_str.to_string(),
            chance: chance_str.to_string(),
        });
        return None;
    };

    let Some(reward_entry) = rewards_table.find(reward_name) else {
        diagnostics.emit(CaseDiagnostic::RewardNotFound {
            group: group_name,
            reward: reward_name.to_string(),
        });
        return None;
    };

    Some(RewardRef {
        item_tech_name: reward_name.to_string(),
        kind: reward_entry.kind.clone(),
        parameters: RewardParameters {
            count,
            item_id: reward_entry.item_id.clone(),
            chance,
        },
    })
}
