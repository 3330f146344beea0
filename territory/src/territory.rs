use itertools::Itertools;

use crate::coord::{Coord, MAX_COLS};
use crate::error::TerritoryError;

/// Value held at one grid intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Mountain,
}

impl Cell {
    fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Free),
            1 => Some(Cell::Mountain),
            _ => None,
        }
    }

    pub fn is_mountain(self) -> bool {
        self == Cell::Mountain
    }

    pub fn is_free(self) -> bool {
        self == Cell::Free
    }
}

/// The immutable rectangular grid under analysis.
///
/// Stored column-major: `cols[c][r - 1]` is the cell at column index `c`,
/// row number `r`. A `Territory` that exists is structurally valid; there is
/// no mutating API, so no operation ever needs to re-validate the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    cols: Vec<Vec<Cell>>,
}

impl Territory {
    /// Builds a territory from raw column data (0 = free, 1 = mountain).
    ///
    /// # Errors
    /// `InvalidShape` when the grid is empty, ragged, wider than 26 columns,
    /// or holds any value other than 0 or 1.
    pub fn new(raw: Vec<Vec<u8>>) -> Result<Self, TerritoryError> {
        let mut cols = Vec::with_capacity(raw.len());
        for column in raw {
            let cells = column
                .iter()
                .map(|&value| {
                    Cell::from_raw(value).ok_or_else(|| {
                        TerritoryError::InvalidShape(format!(
                            "cell value {value} is neither 0 nor 1"
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cols.push(cells);
        }
        Self::from_columns(cols)
    }

    pub(crate) fn from_columns(cols: Vec<Vec<Cell>>) -> Result<Self, TerritoryError> {
        if cols.is_empty() {
            return Err(TerritoryError::InvalidShape(
                "territory has no columns".to_string(),
            ));
        }
        if cols.len() > MAX_COLS {
            return Err(TerritoryError::InvalidShape(format!(
                "territory has {} columns, more than the {MAX_COLS} the alphabet allows",
                cols.len()
            )));
        }
        let height = cols[0].len();
        if height == 0 {
            return Err(TerritoryError::InvalidShape(
                "territory columns are empty".to_string(),
            ));
        }
        if cols.iter().any(|col| col.len() != height) {
            return Err(TerritoryError::InvalidShape(
                "territory columns have unequal lengths".to_string(),
            ));
        }
        Ok(Self { cols })
    }

    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    pub fn row_count(&self) -> usize {
        self.cols[0].len()
    }

    /// True when the coordinate addresses a cell of this territory.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col() < self.col_count() && coord.row() >= 1 && coord.row() <= self.row_count()
    }

    /// The last addressable coordinate (top-right corner).
    pub fn top_right(&self) -> Coord {
        Coord::new(self.col_count() - 1, self.row_count())
    }

    /// Cell value at `coord`.
    ///
    /// # Errors
    /// `InvalidArgument` when `coord` is outside the territory.
    pub fn cell(&self, coord: Coord) -> Result<Cell, TerritoryError> {
        if !self.contains(coord) {
            return Err(TerritoryError::InvalidArgument(format!(
                "coordinate {coord} is outside the territory"
            )));
        }
        Ok(self.cols[coord.col()][coord.row() - 1])
    }

    /// Direct lookup for coordinates already known to be contained.
    pub(crate) fn value_at(&self, coord: Coord) -> Cell {
        self.cols[coord.col()][coord.row() - 1]
    }

    /// True when `coord` is inside the territory and free of mountains.
    /// Out-of-bounds coordinates are reported as not free, never as errors.
    pub fn is_free(&self, coord: Coord) -> bool {
        self.contains(coord) && self.cols[coord.col()][coord.row() - 1].is_free()
    }

    /// All coordinates of the territory in scan order: column-major,
    /// row ascending within each column.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.col_count())
            .cartesian_product(1..=self.row_count())
            .map(|(col, row)| Coord::new(col, row))
    }

    /// In-bounds axis-aligned neighbors of `coord`, in canonical reading
    /// order (ascending row, then column).
    ///
    /// Fail-soft by contract: a coordinate outside the territory (or beyond
    /// the A-Z/1-99 label space) simply contributes no neighbors, so
    /// traversal loops can call this without guarding.
    pub fn adjacent(&self, coord: Coord) -> Vec<Coord> {
        if !coord.is_well_formed() || !self.contains(coord) {
            return Vec::new();
        }

        let deltas = [(0, 1), (0, -1), (-1, 0), (1, 0)]; // North, south, west, east
        let mut neighbors = Vec::with_capacity(4);

        for (dc, dr) in deltas {
            let col = coord.col() as i32 + dc;
            let row = coord.row() as i32 + dr;
            if col < 0 || row < 1 {
                continue;
            }

            let candidate = Coord::new(col as usize, row as usize);
            if candidate.is_well_formed() && self.contains(candidate) {
                neighbors.push(candidate);
            }
        }

        neighbors.sort();
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn two_column() -> Territory {
        // A1=1, A2=1, B1=0, B2=0
        Territory::new(vec![vec![1, 1], vec![0, 0]]).unwrap()
    }

    #[test]
    fn test_construction() -> miette::Result<()> {
        let t = two_column();
        assert_eq!(2, t.col_count());
        assert_eq!(2, t.row_count());
        assert_eq!(Cell::Mountain, t.cell(Coord::new(0, 1))?);
        assert_eq!(Cell::Free, t.cell(Coord::new(1, 2))?);
        Ok(())
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::empty_column(vec![vec![]])]
    #[case::ragged(vec![vec![0, 1], vec![0]])]
    #[case::non_binary(vec![vec![0, 2]])]
    #[case::too_wide(vec![vec![0]; 27])]
    fn test_invalid_shape(#[case] raw: Vec<Vec<u8>>) {
        assert!(matches!(
            Territory::new(raw),
            Err(TerritoryError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_contains_and_top_right() {
        let t = two_column();
        assert!(t.contains(Coord::new(0, 1)));
        assert!(t.contains(Coord::new(1, 2)));
        assert!(!t.contains(Coord::new(2, 1)));
        assert!(!t.contains(Coord::new(0, 3)));
        assert!(!t.contains(Coord::new(0, 0)));
        assert_eq!(Coord::new(1, 2), t.top_right());
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let t = two_column();
        assert!(matches!(
            t.cell(Coord::new(5, 5)),
            Err(TerritoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cell_far_out_of_bounds_errors_cleanly() {
        // Error formatting must stay a hard failure, not a panic, even for
        // addresses far beyond the alphabet.
        let t = two_column();
        assert!(matches!(
            t.cell(Coord::new(200, 1)),
            Err(TerritoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_is_free() {
        let t = two_column();
        assert!(!t.is_free(Coord::new(0, 1))); // mountain
        assert!(t.is_free(Coord::new(1, 1)));
        assert!(!t.is_free(Coord::new(9, 9))); // out of bounds, not an error
    }

    #[test]
    fn test_adjacent_reading_order() -> miette::Result<()> {
        let t = Territory::new(vec![vec![0; 3], vec![0; 3], vec![0; 3]])?;
        // Neighbors of B2: B1 (row 1), then A2/C2 (row 2, column tiebreak), then B3.
        assert_eq!(
            vec![
                Coord::new(1, 1),
                Coord::new(0, 2),
                Coord::new(2, 2),
                Coord::new(1, 3),
            ],
            t.adjacent(Coord::new(1, 2))
        );
        Ok(())
    }

    #[test]
    fn test_adjacent_corner() {
        let t = two_column();
        assert_eq!(
            vec![Coord::new(1, 1), Coord::new(0, 2)],
            t.adjacent(Coord::new(0, 1))
        );
    }

    #[test]
    fn test_adjacent_fail_soft() {
        let t = two_column();
        assert!(t.adjacent(Coord::new(7, 1)).is_empty());
        assert!(t.adjacent(Coord::new(0, 0)).is_empty());
    }

    #[test]
    fn test_adjacent_respects_label_space() -> miette::Result<()> {
        // Rows past 99 exist in the grid but no label can address them, so
        // row 99 has no northern neighbor.
        let t = Territory::new(vec![vec![0; 120]])?;
        assert_eq!(vec![Coord::new(0, 98)], t.adjacent(Coord::new(0, 99)));
        Ok(())
    }

    #[test]
    fn test_adjacent_never_exceeds_four() -> miette::Result<()> {
        let t = Territory::new(vec![vec![0; 4]; 4])?;
        for coord in t.coords() {
            let adjacent = t.adjacent(coord);
            assert!(adjacent.len() <= 4);
            assert!(adjacent.iter().all(|&a| t.contains(a)));
        }
        Ok(())
    }

    #[test]
    fn test_scan_order_is_column_major() -> miette::Result<()> {
        let t = Territory::new(vec![vec![0, 0], vec![0, 0]])?;
        assert_eq!(
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ],
            t.coords().collect::<Vec<_>>()
        );
        Ok(())
    }
}
