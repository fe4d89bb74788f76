use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::category::Category;

/// One submitted item (content or person) on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category: Category,
    pub recommended_by: String,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub follow_regularly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

impl Recommendation {
    /// The writable half of this recommendation, e.g. to prefill an edit.
    pub fn to_input(&self) -> RecommendationInput {
        RecommendationInput {
            category: self.category,
            recommended_by: self.recommended_by.clone(),
            title: self.title.clone(),
            link: self.link.clone(),
            notes: self.notes.clone(),
            follow_regularly: self.follow_regularly,
        }
    }
}

/// Every writable field. `id` and `created_at` are owned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    pub category: Category,
    pub recommended_by: String,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub follow_regularly: bool,
}

impl RecommendationInput {
    /// Name and title are the two required free-text fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.recommended_by.trim().is_empty() {
            return Err(CoreError::MissingField("recommendedBy".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingField("title".to_string()));
        }
        Ok(())
    }
}

/// The subset of `items` in `category`, in repository order.
pub fn filter_by_category(items: &[Recommendation], category: Category) -> Vec<&Recommendation> {
    items.iter().filter(|r| r.category == category).collect()
}
