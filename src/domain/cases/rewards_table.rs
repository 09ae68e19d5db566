use std::collections::HashMap;

use error_stack::report;
use thiserror::Error;

use super::{entities::RewardEntry, layout::rewards};
use crate::domain::sheets::grid::Grid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardsTableError {
    #[error("Malformed rewards sheet: {columns} columns, at least {required} required")]
    MalformedInput { columns: usize, required: usize },
}

/// Reward metadata by tech name, built once per run from the rewards sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsTable {
    entries: HashMap<String, RewardEntry>,
}

impl RewardsTable {
    /// Builds the table from a normalized rewards grid.
    ///
    /// The first [`rewards::HEADER_ROWS`] rows are captions. Every following row may hold a
    /// reward in each of the [`rewards::BLOCKS`]; a later row wins over an earlier one with the
    /// same name.
    pub fn from_grid(grid: &Grid) -> error_stack::Result<Self, RewardsTableError> {
        let data_rows = rewards::HEADER_ROWS..grid.len();

        if !data_rows.is_empty() && grid.width() < rewards::MIN_COLUMNS {
            return Err(report!(RewardsTableError::MalformedInput {
                columns: grid.width(),
                required: rewards::MIN_COLUMNS,
            }));
        }

        let mut entries = HashMap::new();
        for row in data_rows {
            for block in rewards::BLOCKS {
                let name = grid.cell_or_empty(row, block.name);
                if name.is_empty() {
                    continue;
                }

                entries.insert(
                    name.to_string(),
                    RewardEntry {
                        item_id: grid.cell_or_empty(row, block.item_id).trim().to_string(),
                        kind: grid.cell_or_empty(row, block.kind).trim().to_string(),
                    },
                );
            }
        }

        tracing::debug!(rewards = entries.len(), "Built rewards table");

        Ok(Self { entries })
    }

    /// Exact-match lookup, no trimming or case folding.
    pub fn find(&self, reward_name: &str) -> Option<&RewardEntry> {
        self.entries.get(reward_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewards_grid(rows: Vec<Vec<&str>>) -> Grid {
        let mut all_rows = vec![
            vec!["Rewards table"],
            vec!["Name", "", "Item ID", "Type", "", "Name", "", "Item ID", "Type"],
        ];
        all_rows.extend(rows);
        Grid::from(all_rows).normalize()
    }

    fn entry(item_id: &str, kind: &str) -> RewardEntry {
        RewardEntry {
            item_id: item_id.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_single_left_entry() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![vec!["A", "", "1", "weapon"]]))
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.find("A"), Some(&entry("1", "weapon")));
    }

    #[test]
    fn test_row_with_both_blocks() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![vec![
            "Sword", "", " 42 ", "weapon ", "", "Gold", "", "7", "currency",
        ]]))
        .unwrap();
        assert_eq!(table.find("Sword"), Some(&entry("42", "weapon")));
        assert_eq!(table.find("Gold"), Some(&entry("7", "currency")));
    }

    #[test]
    fn test_right_block_only() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![vec![
            "", "", "", "", "", "Gold", "", "7", "currency",
        ]]))
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.find("Gold"), Some(&entry("7", "currency")));
    }

    #[test]
    fn test_header_rows_are_skipped() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.find("Name"), None);
    }

    #[test]
    fn test_last_row_wins() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![
            vec!["A", "", "1", "weapon"],
            vec!["", "", "", "", "", "A", "", "2", "armor"],
        ]))
        .unwrap();
        assert_eq!(table.find("A"), Some(&entry("2", "armor")));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = RewardsTable::from_grid(&rewards_grid(vec![vec!["Sword", "", "1", "weapon"]]))
            .unwrap();
        assert_eq!(table.find("sword"), None);
        assert_eq!(table.find("Sword "), None);
        assert_eq!(table.find("Swor"), None);
    }

    #[test]
    fn test_narrow_grid_is_malformed() {
        let grid = Grid::from(vec![vec!["Title"], vec!["Name"], vec!["A", "", "1", "weapon"]])
            .normalize();
        let error = RewardsTable::from_grid(&grid).unwrap_err();
        assert_eq!(
            error.current_context(),
            &RewardsTableError::MalformedInput {
                columns: 4,
                required: 9
            }
        );
    }

    #[test]
    fn test_empty_grid() {
        let table = RewardsTable::from_grid(&Grid::default()).unwrap();
        assert!(table.is_empty());
    }
}
