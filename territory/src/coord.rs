use std::fmt;

/// Columns map 1:1 onto the letters A-Z.
pub const MAX_COLS: usize = 26;
/// Largest row number a coordinate label can carry.
pub const MAX_ROW: usize = 99;

/// A single grid address: zero-based column index plus one-based row number.
///
/// The column letter (`A` = column 0) exists only at the parse/format
/// boundary; everything internal works on the index.
// Field order matters: the derived `Ord` is ascending row, then ascending
// column, which is the canonical reading order used for all results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// One-based row number.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column letter. Only meaningful for well-formed coordinates; columns
    /// past `Z` yield `?` rather than overflowing.
    pub fn letter(&self) -> char {
        if self.col < MAX_COLS {
            (b'A' + self.col as u8) as char
        } else {
            '?'
        }
    }

    /// Syntactic bound check: the address fits a label, independent of any
    /// territory (letter A-Z, row number 1-99).
    pub fn is_well_formed(&self) -> bool {
        self.col < MAX_COLS && (1..=MAX_ROW).contains(&self.row)
    }
}

// Total rendering: ill-formed addresses show up in error messages, so they
// fall back to a numeric form instead of a bogus label.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_well_formed() {
            write!(f, "{}{}", self.letter(), self.row)
        } else {
            write!(f, "(col {}, row {})", self.col, self.row)
        }
    }
}
