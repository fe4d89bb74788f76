use std::sync::Arc;

use recboard_core::error::CoreError;
use recboard_core::models::category::Category;
use recboard_core::models::recommendation::{Recommendation, RecommendationInput};
use recboard_core::sheet_layout::{self, FIRST_DATA_ROW};

use crate::error::StorageError;
use crate::store::TabularStore;

/// Translates between [`Recommendation`] values and rows of the
/// recommendations sheet.
///
/// The boolean and empty-list forms (`list`, `add`, `update`) never fail:
/// errors are logged and degrade to "nothing". The `try_` forms expose the
/// underlying [`StorageError`], with [`StorageError::NotFound`] kept apart
/// from transport failures.
///
/// There is no locking across calls. Two concurrent updates of the same id
/// are last-writer-wins.
#[derive(Clone)]
pub struct RecommendationRepository {
    store: Arc<dyn TabularStore>,
}

impl RecommendationRepository {
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self { store }
    }

    /// Every recommendation in sheet order; empty on any failure.
    pub async fn list(&self) -> Vec<Recommendation> {
        match self.try_list().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch recommendations");
                Vec::new()
            }
        }
    }

    pub async fn try_list(&self) -> Result<Vec<Recommendation>, StorageError> {
        let rows = self.store.get_values(&sheet_layout::data_range()).await?;

        let items = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| match decode_row(row) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(
                        sheet_row = i + FIRST_DATA_ROW,
                        error = %e,
                        "skipping undecodable recommendation row"
                    );
                    None
                }
            })
            .collect();
        Ok(items)
    }

    /// Append a new recommendation. `true` on success.
    pub async fn add(&self, input: &RecommendationInput) -> bool {
        match self.try_add(input).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to add recommendation");
                false
            }
        }
    }

    /// Append a new recommendation and return its generated id.
    pub async fn try_add(&self, input: &RecommendationInput) -> Result<String, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = jiff::Timestamp::now();
        let row = encode_row(&id, input, created_at);

        self.store
            .append_values(&sheet_layout::append_range(), vec![row])
            .await?;

        tracing::info!(id = %id, category = %input.category, "recommendation added");
        Ok(id)
    }

    /// Replace the mutable fields of the recommendation with `id`.
    /// `false` when it does not exist or the store fails.
    pub async fn update(&self, id: &str, input: &RecommendationInput) -> bool {
        match self.try_update(id, input).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to update recommendation");
                false
            }
        }
    }

    /// Locate the row by a scan of the id column, then overwrite columns
    /// `category..=follow_regularly` of that row. Two round-trips; a
    /// concurrent append or reorder between them is not detected.
    pub async fn try_update(&self, id: &str, input: &RecommendationInput) -> Result<(), StorageError> {
        let sheet_row = self
            .find_row(id)
            .await?
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })?;

        self.store
            .update_values(&sheet_layout::mutable_span(sheet_row), vec![encode_mutable(input)])
            .await?;

        tracing::info!(id = %id, sheet_row, "recommendation updated");
        Ok(())
    }

    /// 1-based sheet row holding `id`, header excluded.
    /// Cells are compared trimmed, the same way [`decode_row`] reads ids.
    async fn find_row(&self, id: &str) -> Result<Option<usize>, StorageError> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        let column = self.store.get_values(&sheet_layout::id_column()).await?;
        Ok(column
            .iter()
            .enumerate()
            .skip(FIRST_DATA_ROW - 1)
            .find(|(_, row)| row.first().map(|c| c.trim()) == Some(id))
            .map(|(i, _)| i + 1))
    }
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or_default()
}

/// Map one sheet row into a [`Recommendation`].
///
/// `Ok(None)` for rows without an id (blank spacer rows). Missing cells read
/// as empty; a category outside the four known tags is an error.
pub fn decode_row(row: &[String]) -> Result<Option<Recommendation>, CoreError> {
    let id = cell(row, sheet_layout::ID).trim();
    if id.is_empty() {
        return Ok(None);
    }

    let category: Category = cell(row, sheet_layout::CATEGORY).parse()?;
    let created_at = cell(row, sheet_layout::CREATED_AT).trim().parse().ok();

    Ok(Some(Recommendation {
        id: id.to_string(),
        category,
        recommended_by: cell(row, sheet_layout::RECOMMENDED_BY).to_string(),
        title: cell(row, sheet_layout::TITLE).to_string(),
        link: cell(row, sheet_layout::LINK).to_string(),
        notes: cell(row, sheet_layout::NOTES).to_string(),
        follow_regularly: sheet_layout::decode_bool(cell(row, sheet_layout::FOLLOW_REGULARLY)),
        created_at,
    }))
}

/// A full 8-column row for a freshly created recommendation.
pub fn encode_row(id: &str, input: &RecommendationInput, created_at: jiff::Timestamp) -> Vec<String> {
    let mut row = Vec::with_capacity(sheet_layout::COLUMNS.len());
    row.push(id.to_string());
    row.extend(encode_mutable(input));
    row.push(created_at.to_string());
    row
}

/// Columns `category..=follow_regularly`.
fn encode_mutable(input: &RecommendationInput) -> Vec<String> {
    vec![
        input.category.to_string(),
        input.recommended_by.clone(),
        input.title.clone(),
        input.link.clone(),
        input.notes.clone(),
        sheet_layout::encode_bool(input.follow_regularly),
    ]
}
