use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::{AppError, AppResult};

/// Raw values of the three filter controls; an empty string means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub min_rating: String,
    #[serde(default)]
    pub year_range: String,
}

/// Inclusive publication-year window, written `START-END`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for YearRange {
    type Err = AppError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::Validation(format!("invalid year range '{}'", token));

        let (start, end) = token.trim().split_once('-').ok_or_else(invalid)?;
        let start: i32 = start.trim().parse().map_err(|_| invalid())?;
        let end: i32 = end.trim().parse().map_err(|_| invalid())?;

        if start > end {
            return Err(invalid());
        }

        Ok(YearRange { start, end })
    }
}

/// Minimum rating as chosen on the control; the original token goes on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct MinRating {
    value: f64,
    token: String,
}

impl MinRating {
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for MinRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

impl FromStr for MinRating {
    type Err = AppError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let value: f64 = token.parse().map_err(|_| {
            AppError::Validation(format!("invalid minimum rating '{}'", token))
        })?;
        if !(0.0..=5.0).contains(&value) {
            return Err(AppError::Validation(format!(
                "minimum rating {} is outside 0-5",
                token
            )));
        }
        Ok(MinRating {
            value,
            token: token.to_string(),
        })
    }
}

/// Typed catalog filter sent as query parameters to GET /api/books
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub genre: Option<String>,
    pub min_rating: Option<MinRating>,
    pub year_range: Option<YearRange>,
}

impl BookFilter {
    /// Parses the raw control values; empty controls impose no constraint
    pub fn parse(form: &FilterForm) -> AppResult<Self> {
        let genre = non_empty(&form.genre).map(str::to_string);

        let min_rating = non_empty(&form.min_rating)
            .map(MinRating::from_str)
            .transpose()?;

        let year_range = non_empty(&form.year_range)
            .map(YearRange::from_str)
            .transpose()?;

        Ok(Self {
            genre,
            min_rating,
            year_range,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.min_rating.is_none() && self.year_range.is_none()
    }

    /// Query parameters, in control order, for the constraints that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(genre) = &self.genre {
            pairs.push(("genre", genre.clone()));
        }
        if let Some(rating) = &self.min_rating {
            pairs.push(("min_rating", rating.to_string()));
        }
        if let Some(range) = self.year_range {
            pairs.push(("year_range", range.to_string()));
        }
        pairs
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
