use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A book record as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Backend identifier, when the backend sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    /// Average rating on a 0-5 scale
    pub rating: f64,
    /// Publication year
    pub year: i32,
    /// Match strength in [0, 1], only present on recommendations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl Book {
    /// Checks the record against what the page can render
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidRecord(
                "book title cannot be empty".to_string(),
            ));
        }

        if !self.rating.is_finite() {
            return Err(AppError::InvalidRecord(format!(
                "rating for '{}' is not a number",
                self.title
            )));
        }

        if let Some(score) = self.similarity_score {
            if !(0.0..=1.0).contains(&score) {
                return Err(AppError::InvalidRecord(format!(
                    "similarity score {} for '{}' is outside [0, 1]",
                    score, self.title
                )));
            }
        }

        Ok(())
    }

    /// Similarity as a percentage, e.g. 0.873 -> 87.3
    pub fn match_percent(&self) -> Option<f64> {
        self.similarity_score.map(|score| score * 100.0)
    }
}

/// Validates every record of a backend response
pub fn validate_all(books: &[Book]) -> AppResult<()> {
    books.iter().try_for_each(Book::validate)
}
