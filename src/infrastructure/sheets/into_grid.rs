use serde_json::Value;

use crate::domain::sheets::grid::Grid;

/// Converts the `values` of a Sheets API `ValueRange` into a [`Grid`]
pub trait IntoGrid {
    fn into_grid(self) -> Grid;
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl IntoGrid for Vec<Vec<Value>> {
    fn into_grid(self) -> Grid {
        Grid::new(
            self.into_iter()
                .map(|row| row.into_iter().map(cell_text).collect())
                .collect(),
        )
    }
}

impl IntoGrid for Option<Vec<Vec<Value>>> {
    fn into_grid(self) -> Grid {
        self.map(IntoGrid::into_grid).unwrap_or_default()
    }
}
