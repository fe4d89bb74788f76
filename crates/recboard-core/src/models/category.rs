use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four fixed tabs of the board. Every recommendation belongs to exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Read,
    Watch,
    Listen,
    Follow,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 4] = [
        Category::Read,
        Category::Watch,
        Category::Listen,
        Category::Follow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Read => "read",
            Category::Watch => "watch",
            Category::Listen => "listen",
            Category::Follow => "follow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Read => "What to Read",
            Category::Watch => "What to Watch",
            Category::Listen => "What to Listen To",
            Category::Follow => "Who to Follow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes a raw cell value. Anything outside the four tags is rejected
/// rather than carried into the domain model.
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
