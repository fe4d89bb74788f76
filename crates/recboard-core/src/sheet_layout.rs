//! Row/column conventions of the recommendations sheet.
//!
//! Pure functions and constants, no network dependency. Row 1 is a header;
//! data starts at row 2 and columns A..H hold, in order:
//! `id, category, recommended_by, title, link, notes, follow_regularly, created_at`.

use std::fmt;

pub const SHEET: &str = "Sheet1";

pub const COLUMNS: [&str; 8] = [
    "id",
    "category",
    "recommended_by",
    "title",
    "link",
    "notes",
    "follow_regularly",
    "created_at",
];

pub const ID: usize = 0;
pub const CATEGORY: usize = 1;
pub const RECOMMENDED_BY: usize = 2;
pub const TITLE: usize = 3;
pub const LINK: usize = 4;
pub const NOTES: usize = 5;
pub const FOLLOW_REGULARLY: usize = 6;
pub const CREATED_AT: usize = 7;

/// First sheet row (1-based) holding data.
pub const FIRST_DATA_ROW: usize = 2;

/// A rectangular A1 range on [`SHEET`]. Columns are 0-based, rows 1-based;
/// a `None` row bound leaves that side open (`A:A`, `A2:H`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_col: usize,
    pub last_col: usize,
    pub first_row: Option<usize>,
    pub last_row: Option<usize>,
}

impl CellRange {
    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.last_col - self.first_col + 1
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SHEET}!{}", column_letter(self.first_col))?;
        if let Some(row) = self.first_row {
            write!(f, "{row}")?;
        }
        write!(f, ":{}", column_letter(self.last_col))?;
        if let Some(row) = self.last_row {
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// `Sheet1!A2:H`: every data row, header skipped.
pub fn data_range() -> CellRange {
    CellRange {
        first_col: ID,
        last_col: CREATED_AT,
        first_row: Some(FIRST_DATA_ROW),
        last_row: None,
    }
}

/// `Sheet1!A:H`: the append target.
pub fn append_range() -> CellRange {
    CellRange {
        first_col: ID,
        last_col: CREATED_AT,
        first_row: None,
        last_row: None,
    }
}

/// `Sheet1!A:A`: the identity column, header included.
pub fn id_column() -> CellRange {
    CellRange {
        first_col: ID,
        last_col: ID,
        first_row: None,
        last_row: None,
    }
}

/// `Sheet1!B{row}:G{row}`: the mutable cells of one row; `id` and
/// `created_at` are outside it.
pub fn mutable_span(sheet_row: usize) -> CellRange {
    CellRange {
        first_col: CATEGORY,
        last_col: FOLLOW_REGULARLY,
        first_row: Some(sheet_row),
        last_row: Some(sheet_row),
    }
}

pub fn column_letter(col: usize) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

pub fn encode_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Only a literal `true` is truthy; blanks and anything else read as false.
pub fn decode_bool(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("true")
}
