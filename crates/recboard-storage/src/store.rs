use std::future::Future;
use std::pin::Pin;

use recboard_core::sheet_layout::CellRange;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Rows of cell values, outer = rows, inner = columns.
pub type Rows = Vec<Vec<String>>;

/// A spreadsheet-like backend addressed by A1 ranges.
///
/// Reads behave like the Sheets values API: trailing empty cells in a row and
/// trailing empty rows are omitted, so callers must tolerate short rows.
pub trait TabularStore: Send + Sync {
    /// Read the cells inside `range`.
    fn get_values<'a>(&'a self, range: &'a CellRange) -> BoxFuture<'a, Result<Rows, StorageError>>;

    /// Append `rows` after the last non-empty row of the table at `range`.
    fn append_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>>;

    /// Overwrite the cells starting at the top-left corner of `range`.
    fn update_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}
