use std::fmt;

use itertools::Itertools;

use crate::coord::Coord;
use crate::territory::Territory;

/// Draws the grid with row numbers down both sides and column letters above
/// and below, `X` for mountains and `.` for free ground. Rows print top
/// (highest number) to bottom; single-digit row numbers get a leading space
/// so the cells stay aligned up to row 99.
impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = (0..self.col_count())
            .map(|col| (b'A' + col as u8) as char)
            .join(" ");
        writeln!(f, "   {labels}")?;

        for row in (1..=self.row_count()).rev() {
            if row > 9 {
                write!(f, "{row} ")?;
            } else {
                write!(f, " {row} ")?;
            }
            for col in 0..self.col_count() {
                let mark = if self.is_free(Coord::new(col, row)) {
                    '.'
                } else {
                    'X'
                };
                write!(f, "{mark} ")?;
            }
            if row > 9 {
                writeln!(f, "{row}")?;
            } else {
                writeln!(f, " {row}")?;
            }
        }

        write!(f, "   {labels}")
    }
}
