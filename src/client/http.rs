//! reqwest implementation of [`BookApi`] against the backend's `/api/*` routes

use crate::{
    client::BookApi,
    error::{AppError, AppResult},
    models::{
        book, ApiErrorBody, Book, BookFilter, BooksResponse, GenresResponse,
        RecommendationRequest, RecommendationsResponse,
    },
};
use reqwest::{Client as HttpClient, Response, Url};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct HttpBookApi {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpBookApi {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Validation(format!("invalid backend URL '{}': {}", base_url, e)))?;

        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Internal(format!("cannot build URL for {}: {}", path, e)))
    }

    /// URL for GET /api/books; no `?` at all when the filter is empty
    pub fn books_url(&self, filter: &BookFilter) -> AppResult<Url> {
        let mut url = self.endpoint("/api/books")?;
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .map(|payload| payload.error);
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl BookApi for HttpBookApi {
    async fn genres(&self) -> AppResult<Vec<String>> {
        let url = self.endpoint("/api/genres")?;
        let response = self.http_client.get(url).send().await?;
        let payload: GenresResponse = Self::decode(response).await?;

        tracing::debug!(genres = payload.genres.len(), "Genres fetched");

        Ok(payload.genres)
    }

    async fn books(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let url = self.books_url(filter)?;
        let response = self.http_client.get(url.clone()).send().await?;
        let payload: BooksResponse = Self::decode(response).await?;
        book::validate_all(&payload.books)?;

        tracing::debug!(url = %url, books = payload.books.len(), "Books fetched");

        Ok(payload.books)
    }

    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Book>> {
        let url = self.endpoint("/api/recommend")?;
        let response = self.http_client.post(url).json(request).send().await?;
        let payload: RecommendationsResponse = Self::decode(response).await?;
        book::validate_all(&payload.recommendations)?;

        tracing::debug!(
            requested = request.num_recommendations,
            received = payload.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(payload.recommendations)
    }
}
