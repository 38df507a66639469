use hospitals::core::models::cell::Cell;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid cell format for '{0}'. Expected 'ROW,COL' (e.g., '3,14').")]
    InvalidCellFormat(String),

    #[error("Invalid {component} '{value}' in cell '{cell}'. Expected a non-negative integer.")]
    InvalidCoordinate {
        component: &'static str,
        value: String,
        cell: String,
    },
}

/// Parses a `ROW,COL` pair such as `3,14` into a [`Cell`].
pub fn parse_cell(s: &str) -> Result<Cell, ParseError> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| ParseError::InvalidCellFormat(s.to_string()))?;

    let parse = |component: &'static str, value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidCoordinate {
                component,
                value: value.to_string(),
                cell: s.to_string(),
            })
    };

    Ok(Cell::new(parse("row", row)?, parse("column", col)?))
}
