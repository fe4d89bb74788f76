use std::sync::{Mutex, MutexGuard};

use recboard_core::models::recommendation::Recommendation;
use recboard_core::seed;
use recboard_core::sheet_layout::{self, CellRange};

use crate::error::StorageError;
use crate::store::{BoxFuture, Rows, TabularStore};

#[derive(Default)]
struct Inner {
    grid: Vec<Vec<String>>,
    failure: Option<String>,
}

/// A process-local sheet. Row `n` of the sheet is `grid[n - 1]`.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// A sheet holding only the header row.
    pub fn new() -> Self {
        Self::from_grid(vec![header_row()])
    }

    /// Header row followed by the seed collection.
    pub fn seeded() -> Self {
        let mut grid = vec![header_row()];
        grid.extend(seed::recommendations().iter().map(seed_row));
        Self::from_grid(grid)
    }

    pub fn from_grid(grid: Vec<Vec<String>>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                grid,
                failure: None,
            }),
        }
    }

    /// Every subsequent call fails with `StorageError::Unavailable(reason)`
    /// until [`MemoryStore::recover`] is called.
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.lock().failure = Some(reason.into());
    }

    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// A copy of the raw grid, header included.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.lock().grid.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn checked(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        let guard = self.lock();
        if let Some(reason) = guard.failure.clone() {
            return Err(StorageError::Unavailable(reason));
        }
        Ok(guard)
    }
}

fn header_row() -> Vec<String> {
    sheet_layout::COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn seed_row(r: &Recommendation) -> Vec<String> {
    vec![
        r.id.clone(),
        r.category.to_string(),
        r.recommended_by.clone(),
        r.title.clone(),
        r.link.clone(),
        r.notes.clone(),
        sheet_layout::encode_bool(r.follow_regularly),
    ]
}

fn trim_trailing_empty(mut row: Vec<String>) -> Vec<String> {
    while row.last().is_some_and(|c| c.is_empty()) {
        row.pop();
    }
    row
}

fn read_range(grid: &[Vec<String>], range: &CellRange) -> Rows {
    let first = range.first_row.unwrap_or(1).max(1);
    let last = range.last_row.unwrap_or(grid.len()).min(grid.len());

    let mut rows: Rows = (first..=last)
        .map(|n| {
            let row = &grid[n - 1];
            let cells = (range.first_col..=range.last_col)
                .map(|c| row.get(c).cloned().unwrap_or_default())
                .collect();
            trim_trailing_empty(cells)
        })
        .collect();

    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows
}

fn write_cells(grid: &mut Vec<Vec<String>>, row_number: usize, first_col: usize, cells: Vec<String>) {
    if grid.len() < row_number {
        grid.resize_with(row_number, Vec::new);
    }
    let row = &mut grid[row_number - 1];
    let needed = first_col + cells.len();
    if row.len() < needed {
        row.resize(needed, String::new());
    }
    for (offset, cell) in cells.into_iter().enumerate() {
        row[first_col + offset] = cell;
    }
}

impl TabularStore for MemoryStore {
    fn get_values<'a>(&'a self, range: &'a CellRange) -> BoxFuture<'a, Result<Rows, StorageError>> {
        Box::pin(async move {
            let inner = self.checked()?;
            Ok(read_range(&inner.grid, range))
        })
    }

    fn append_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut inner = self.checked()?;
            let last_used = inner
                .grid
                .iter()
                .rposition(|r| r.iter().any(|c| !c.is_empty()))
                .map_or(0, |i| i + 1);
            inner.grid.truncate(last_used);
            for (i, row) in rows.into_iter().enumerate() {
                write_cells(&mut inner.grid, last_used + i + 1, range.first_col, row);
            }
            Ok(())
        })
    }

    fn update_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut inner = self.checked()?;
            let top = range
                .first_row
                .filter(|row| *row >= 1)
                .ok_or_else(|| StorageError::InvalidRange(format!("{range} has no start row")))?;
            for (i, row) in rows.into_iter().enumerate() {
                if row.len() > range.width() {
                    return Err(StorageError::InvalidRange(format!(
                        "{} cells do not fit in {range}",
                        row.len()
                    )));
                }
                write_cells(&mut inner.grid, top + i, range.first_col, row);
            }
            Ok(())
        })
    }
}
