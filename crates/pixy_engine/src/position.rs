/// A cell address in the grid: `row` counts down, `column` counts right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: i32,
    pub column: i32,
}

impl std::fmt::Display for CellPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl CellPosition {
    pub fn new(row: i32, column: i32) -> Self {
        CellPosition { row, column }
    }
}

impl From<(i32, i32)> for CellPosition {
    fn from(value: (i32, i32)) -> Self {
        CellPosition::new(value.0, value.1)
    }
}

impl From<CellPosition> for (i32, i32) {
    fn from(value: CellPosition) -> (i32, i32) {
        (value.row, value.column)
    }
}
