use serde::{Deserialize, Serialize};

pub mod book;
pub mod filter;
pub mod theme;

pub use book::Book;
pub use filter::{BookFilter, FilterForm, MinRating, YearRange};
pub use theme::Theme;

// ============================================================================
// Backend API Types
// ============================================================================

/// Response from GET /api/genres
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

/// Response from GET /api/books
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Largest recommendation count the page asks for
pub const MAX_RECOMMENDATIONS: u32 = 20;

/// Body of POST /api/recommend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub preferences: String,
    pub num_recommendations: u32,
}

/// Successful response from POST /api/recommend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Book>,
}

/// Error payload returned alongside a non-success status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}
