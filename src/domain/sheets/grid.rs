use std::ops::Deref;

/// A fetched spreadsheet range as rows of text cells.
///
/// Missing cells and empty strings are the same thing: the Sheets API drops trailing empty
/// cells, so rows coming from a range usually differ in length until [`Grid::normalize`] is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Drops every row whose cells are all empty and right-pads the remaining rows with empty
    /// cells up to the widest one. Row order is preserved.
    /// # Examples
    /// ```
    /// use case_config::domain::sheets::grid::Grid;
    /// let grid = Grid::from(vec![vec!["a"], vec!["", ""], vec!["b", "c"]]).normalize();
    /// assert_eq!(grid.len(), 2);
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.cell(0, 1), Some(""));
    /// ```
    pub fn normalize(self) -> Self {
        let mut rows = self
            .rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect::<Vec<_>>();

        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in rows.iter_mut() {
            row.resize(num_cols, String::new());
        }

        Self { rows }
    }

    /// Number of columns of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Cell at a zero-based position, `None` when the position is outside the row
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Same as [`Grid::cell`], but an absent cell reads as empty
    pub fn cell_or_empty(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).unwrap_or_default()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl Deref for Grid {
    type Target = [Vec<String>];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl<S: Into<String>> From<Vec<Vec<S>>> for Grid {
    fn from(rows: Vec<Vec<S>>) -> Self {
        Grid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
