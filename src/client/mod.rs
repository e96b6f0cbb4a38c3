//! Backend book API abstraction
//!
//! The presentation layer only consumes the backend: genres, the (optionally
//! filtered) catalog, and recommendations for a preference string. Every
//! implementation validates records before handing them to the page.

use crate::{
    error::AppResult,
    models::{Book, BookFilter, RecommendationRequest},
};

pub mod http;

pub use http::HttpBookApi;

/// Trait for book backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookApi: Send + Sync {
    /// Fetch all genres, in backend order
    async fn genres(&self) -> AppResult<Vec<String>>;

    /// Fetch the catalog; only the constraints set on `filter` are sent
    async fn books(&self, filter: &BookFilter) -> AppResult<Vec<Book>>;

    /// Fetch ranked recommendations carrying similarity scores
    ///
    /// A non-success status becomes `AppError::Api` with the payload's
    /// `error` message when the backend sent one.
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Book>>;
}
