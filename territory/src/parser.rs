use nom::{
    character::complete::{digit1, newline, satisfy},
    combinator::{all_consuming, map_res, verify},
    multi::{many1, separated_list1},
    sequence::pair,
    IResult, Parser,
};
use nom_locate::LocatedSpan;

use crate::coord::Coord;
use crate::error::TerritoryError;
use crate::territory::Territory;

// region: coordinate labels

fn parse_letter(input: &str) -> IResult<&str, usize> {
    satisfy(|c: char| c.is_ascii_uppercase())
        .map(|c| (c as u8 - b'A') as usize)
        .parse(input)
}

fn parse_row(input: &str) -> IResult<&str, usize> {
    map_res(verify(digit1, |s: &str| !s.starts_with('0')), |s: &str| {
        s.parse::<usize>()
    })(input)
}

fn parse_label(input: &str) -> IResult<&str, Coord> {
    pair(parse_letter, parse_row)
        .map(|(col, row)| Coord::new(col, row))
        .parse(input)
}

/// Converts a human-readable label such as `C7` into a [`Coord`].
///
/// A label is one uppercase letter A-Z followed by a number 1-99 without a
/// leading zero; anything else (including trailing text) is rejected.
///
/// # Errors
/// `InvalidArgument` when the label does not parse or the row is out of range.
pub fn parse_coord(label: &str) -> Result<Coord, TerritoryError> {
    let (_, coord) = all_consuming(parse_label)(label).map_err(|e| {
        TerritoryError::InvalidArgument(format!("{label:?} is not a coordinate label: {e}"))
    })?;

    if !coord.is_well_formed() {
        return Err(TerritoryError::InvalidArgument(format!(
            "{label:?} addresses row {}, outside 1-99",
            coord.row()
        )));
    }

    Ok(coord)
}

// endregion

// region: grid text

type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct LocatedCell<'a> {
    value: u8,
    position: Span<'a>,
}

fn parse_cell(input: Span) -> IResult<Span, LocatedCell> {
    satisfy(|c: char| matches!(c, '0' | '1' | '.' | 'X'))
        .map(|c| LocatedCell {
            value: u8::from(c == '1' || c == 'X'),
            position: input,
        })
        .parse(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<LocatedCell>>> {
    separated_list1(newline, many1(parse_cell))(input)
}

/// Parses grid text into a [`Territory`].
///
/// Each line is a run of `0`/`1` (or `.`/`X`) characters. The first line is
/// the highest-numbered row, matching the orientation the renderer prints.
///
/// # Errors
/// `InvalidShape` when the text does not parse as a rectangular binary grid
/// or violates the territory invariants.
#[tracing::instrument(skip(text))]
pub fn parse_territory(text: &str) -> Result<Territory, TerritoryError> {
    let text = text.trim_end();
    let (_, rows) = all_consuming(parse_rows)(Span::new(text))
        .map_err(|e| TerritoryError::InvalidShape(format!("grid text did not parse: {e}")))?;

    let height = rows.len();
    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return Err(TerritoryError::InvalidShape(
            "grid text lines have unequal lengths".to_string(),
        ));
    }

    // Text line 1 is the topmost (highest-numbered) row.
    let mut cols = vec![vec![0u8; height]; width];
    for cell in rows.iter().flatten() {
        let col = cell.position.get_column() - 1;
        let row_index = height - cell.position.location_line() as usize;
        cols[col][row_index] = cell.value;
    }

    Territory::new(cols)
}

// endregion
