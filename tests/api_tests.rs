use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use bookmatch::{
    api::{create_router, AppState},
    client::BookApi,
    error::{AppError, AppResult},
    events::Dispatcher,
    frontend::{self, Frontend, EMPTY_PREFERENCES_ERROR},
    models::{Book, BookFilter, RecommendationRequest, Theme},
    settings::MemorySettings,
};

fn book(title: &str, genre: &str, rating: f64, year: i32) -> Book {
    Book {
        id: None,
        title: title.to_string(),
        author: "Test Author".to_string(),
        genre: genre.to_string(),
        description: format!("{title} description"),
        rating,
        year,
        similarity_score: None,
    }
}

/// In-memory backend mirroring the catalog semantics of the real one
#[derive(Default)]
struct FakeBackend {
    recommend_calls: AtomicUsize,
    filters: Mutex<Vec<BookFilter>>,
}

impl FakeBackend {
    fn catalog() -> Vec<Book> {
        vec![
            book("The Great Gatsby", "Fiction", 4.5, 1925),
            book("The Hobbit", "Fantasy", 4.7, 1937),
            book("The Da Vinci Code", "Mystery", 4.1, 2003),
        ]
    }
}

#[async_trait::async_trait]
impl BookApi for FakeBackend {
    async fn genres(&self) -> AppResult<Vec<String>> {
        Ok(vec![
            "Fiction".to_string(),
            "Fantasy".to_string(),
            "Mystery".to_string(),
        ])
    }

    async fn books(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        self.filters.lock().unwrap().push(filter.clone());
        Ok(Self::catalog()
            .into_iter()
            .filter(|b| filter.genre.as_deref().map_or(true, |g| b.genre == g))
            .filter(|b| {
                filter
                    .min_rating
                    .as_ref()
                    .map_or(true, |r| b.rating >= r.value())
            })
            .filter(|b| {
                filter
                    .year_range
                    .map_or(true, |y| y.start <= b.year && b.year <= y.end)
            })
            .collect())
    }

    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Book>> {
        self.recommend_calls.fetch_add(1, Ordering::SeqCst);
        if request.preferences.contains("nothing") {
            return Err(AppError::Api {
                status: 400,
                message: Some("No matches for those preferences".to_string()),
            });
        }
        let mut hobbit = book("The Hobbit", "Fantasy", 4.7, 1937);
        hobbit.similarity_score = Some(0.8123);
        Ok(vec![hobbit])
    }
}

async fn create_test_server() -> (TestServer, Arc<FakeBackend>, Arc<MemorySettings>) {
    let backend = Arc::new(FakeBackend::default());
    let settings = Arc::new(MemorySettings::new());
    let frontend = Arc::new(Frontend::new(backend.clone(), settings.clone(), 5));
    let dispatcher = Arc::new(Dispatcher::new());
    frontend::bootstrap(Arc::clone(&frontend), &dispatcher).await;

    let app = create_router(AppState::new(frontend, dispatcher));
    (TestServer::new(app).unwrap(), backend, settings)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _, _) = create_test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_index_renders_loaded_page() {
    let (server, _, _) = create_test_server().await;
    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r#"<option value="Fantasy">Fantasy</option>"#));
    assert!(html.contains("The Great Gatsby"));
    assert!(html.contains("The Da Vinci Code"));
    assert!(!html.contains("recommendationsContainer"));
}

#[tokio::test]
async fn test_linked_stylesheet_is_served() {
    let (server, _, _) = create_test_server().await;
    let html = server.get("/").await.text();
    assert!(html.contains(r#"<link href="/static/css/style.css" rel="stylesheet">"#));

    let response = server.get("/static/css/style.css").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "text/css; charset=utf-8"
    );
    let css = response.text();
    assert!(css.contains("@keyframes fadeInUp"));
    assert!(css.contains(".ripple {"));
    assert!(css.contains(".book-card {"));
}

#[tokio::test]
async fn test_recommend_flow() {
    let (server, backend, _) = create_test_server().await;

    let response = server
        .post("/recommend")
        .form(&json!({
            "preferences": "wizards and dragons",
            "num_recommendations": "3"
        }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(backend.recommend_calls.load(Ordering::SeqCst), 1);

    let html = server.get("/").await.text();
    assert!(html.contains("recommendationsContainer"));
    assert!(html.contains("Match: 81.2%"));
}

#[tokio::test]
async fn test_empty_preferences_do_not_reach_backend() {
    let (server, backend, _) = create_test_server().await;

    server
        .post("/recommend")
        .form(&json!({ "preferences": "   ", "num_recommendations": "5" }))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(backend.recommend_calls.load(Ordering::SeqCst), 0);
    let html = server.get("/").await.text();
    assert!(html.contains(EMPTY_PREFERENCES_ERROR));
}

#[tokio::test]
async fn test_backend_error_message_is_shown() {
    let (server, _, _) = create_test_server().await;

    server
        .post("/recommend")
        .form(&json!({ "preferences": "nothing at all", "num_recommendations": "5" }))
        .await;

    let html = server.get("/").await.text();
    assert!(html.contains("No matches for those preferences"));
}

#[tokio::test]
async fn test_filter_change_rerenders_catalog() {
    let (server, backend, _) = create_test_server().await;

    server
        .post("/filters")
        .form(&json!({
            "genre": "Fantasy",
            "min_rating": "",
            "year_range": "",
            "trigger": "change"
        }))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let last = backend.filters.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.genre.as_deref(), Some("Fantasy"));
    assert!(last.min_rating.is_none());
    assert!(last.year_range.is_none());

    let html = server.get("/").await.text();
    assert!(html.contains("The Hobbit"));
    assert!(!html.contains("The Great Gatsby"));
    assert!(html.contains(r#"<option value="Fantasy" selected>Fantasy</option>"#));
}

#[tokio::test]
async fn test_theme_toggle_persists() {
    let (server, _, settings) = create_test_server().await;

    server.post("/theme").await.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(settings.saved().map(|s| s.theme), Some(Theme::Light));
    assert!(server.get("/").await.text().contains(r#"data-theme="light""#));

    server.post("/theme").await;
    assert_eq!(settings.saved().map(|s| s.theme), Some(Theme::Dark));
}

#[tokio::test]
async fn test_dismiss_unknown_toast_is_not_found() {
    let (server, _, _) = create_test_server().await;
    let response = server
        .post("/toasts/00000000-0000-0000-0000-000000000000/dismiss")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
