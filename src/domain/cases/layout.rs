//! Fixed cell positions of the case and reward sheets. All indices are zero-based.

pub mod rewards {
    /// Title and column caption rows at the top of the rewards sheet
    pub const HEADER_ROWS: usize = 2;

    /// Columns of one `name | _ | item_id | type` block
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RewardColumns {
        pub name: usize,
        pub item_id: usize,
        pub kind: usize,
    }

    /// The sheet lists rewards in two side-by-side blocks, left one first.
    pub const BLOCKS: [RewardColumns; 2] = [
        RewardColumns {
            name: 0,
            item_id: 2,
            kind: 3,
        },
        RewardColumns {
            name: 5,
            item_id: 7,
            kind: 8,
        },
    ];

    /// Width needed to address every column of [`BLOCKS`]
    pub const MIN_COLUMNS: usize = 9;
}

pub mod cases {
    /// Rows 0 (case name), 1 (group headers), 2 (tech name), 3 (group chances) and
    /// 4 (captions). Reward rows from [`FIRST_REWARD_ROW`] on may be absent
    pub const MIN_ROWS: usize = 5;

    /// `(row, col)` of the case display name
    pub const CASE_NAME: (usize, usize) = (0, 0);
    /// `(row, col)` of the case tech name
    pub const CASE_TECH_NAME: (usize, usize) = (2, 1);

    pub const GROUP_HEADER_ROW: usize = 1;
    pub const GROUP_CHANCE_ROW: usize = 3;
    pub const FIRST_REWARD_ROW: usize = 5;

    /// A header cell containing this marks the first column of a group block
    pub const GROUP_MARKER: &str = "Group";
    pub const FIRST_GROUP_COLUMN: usize = 3;
    /// Width of a group block; the scan advances by this much whether or not a group was found
    pub const GROUP_STRIDE: usize = 4;

    /// Offsets inside a group block
    pub const GROUP_CHANCE_OFFSET: usize = 1;
    pub const REWARD_NAME_OFFSET: usize = 0;
    pub const REWARD_COUNT_OFFSET: usize = 1;
    pub const REWARD_CHANCE_OFFSET: usize = 2;
}
