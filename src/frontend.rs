//! Page controller: the data loader, recommendation, filter and theme flows
//!
//! Every flow catches its own failures: errors are logged and turned into a
//! toast, never returned to the caller. Page state is only locked around
//! mutations, never across a backend request.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    client::BookApi,
    error::{AppError, AppResult},
    events::{Dispatcher, EventHandler, EventKind, HandlerId, UiEvent},
    models::{BookFilter, FilterForm, RecommendationRequest, Theme, MAX_RECOMMENDATIONS},
    page::PageState,
    render,
    settings::{Settings, SettingsStore},
};

pub const LOAD_GENRES_ERROR: &str = "Failed to load genres. Please try again.";
pub const LOAD_BOOKS_ERROR: &str = "Failed to load books. Please try again.";
pub const EMPTY_PREFERENCES_ERROR: &str = "Please enter your reading preferences.";
pub const INVALID_COUNT_ERROR: &str = "Please choose how many recommendations you want.";
pub const RECOMMEND_ERROR: &str = "Failed to get recommendations. Please try again.";
pub const INVALID_FILTER_ERROR: &str = "Please check your filter selections.";
pub const APPLY_FILTERS_ERROR: &str = "Failed to apply filters. Please try again.";

pub struct Frontend {
    api: Arc<dyn BookApi>,
    settings: Arc<dyn SettingsStore>,
    page: RwLock<PageState>,
    /// Bumped by every filter request; responses from older ones are dropped
    filter_generation: AtomicU64,
    default_count: u32,
}

impl Frontend {
    /// Creates the controller with the persisted theme already applied
    pub fn new(
        api: Arc<dyn BookApi>,
        settings: Arc<dyn SettingsStore>,
        default_count: u32,
    ) -> Self {
        let theme = match settings.load() {
            Ok(saved) => saved.theme,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read saved theme, using default");
                Theme::default()
            }
        };
        tracing::info!(theme = %theme, "Theme initialized");

        let clamped = default_count.clamp(1, MAX_RECOMMENDATIONS);
        if clamped != default_count {
            tracing::warn!(
                requested = default_count,
                using = clamped,
                "Default recommendation count out of range"
            );
        }

        Self {
            api,
            settings,
            page: RwLock::new(PageState::new(theme)),
            filter_generation: AtomicU64::new(0),
            default_count: clamped,
        }
    }

    pub fn default_count(&self) -> u32 {
        self.default_count
    }

    pub async fn snapshot(&self) -> PageState {
        self.page.read().await.clone()
    }

    /// Markup for the current state, after pruning expired toasts
    pub async fn render(&self) -> String {
        let mut page = self.page.write().await;
        page.expire_toasts(Utc::now());
        render::page(&page, self.default_count)
    }

    async fn notify(&self, message: &str) -> Uuid {
        self.page.write().await.push_toast(message)
    }

    /// Initial data: genre options and the unfiltered catalog
    pub async fn load(&self) {
        tokio::join!(self.load_genres(), self.load_books());
    }

    pub async fn load_genres(&self) {
        match self.api.genres().await {
            Ok(genres) => {
                tracing::info!(count = genres.len(), "Genres loaded");
                self.page.write().await.genre_options = genres;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading genres");
                self.notify(LOAD_GENRES_ERROR).await;
            }
        }
    }

    pub async fn load_books(&self) {
        match self.api.books(&BookFilter::default()).await {
            Ok(books) => {
                tracing::info!(count = books.len(), "Books loaded");
                self.page.write().await.books = books;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading books");
                self.notify(LOAD_BOOKS_ERROR).await;
            }
        }
    }

    fn parse_count(&self, raw: &str) -> AppResult<u32> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(self.default_count);
        }
        match raw.parse::<u32>() {
            Ok(n) if (1..=MAX_RECOMMENDATIONS).contains(&n) => Ok(n),
            _ => Err(AppError::Validation(format!(
                "recommendation count '{}' must be between 1 and {}",
                raw, MAX_RECOMMENDATIONS
            ))),
        }
    }

    /// Sends the preference text to the recommender and shows the matches
    pub async fn submit_recommendation(&self, preferences: &str, count: &str) {
        let preferences = preferences.trim();
        if preferences.is_empty() {
            tracing::warn!("Rejected recommendation request with empty preferences");
            self.notify(EMPTY_PREFERENCES_ERROR).await;
            return;
        }

        let num_recommendations = match self.parse_count(count) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected recommendation request");
                self.notify(INVALID_COUNT_ERROR).await;
                return;
            }
        };

        let request = RecommendationRequest {
            preferences: preferences.to_string(),
            num_recommendations,
        };

        self.page.write().await.loading = true;
        let result = self.api.recommend(&request).await;

        let mut page = self.page.write().await;
        page.loading = false;
        match result {
            Ok(books) => {
                tracing::info!(
                    requested = num_recommendations,
                    received = books.len(),
                    "Recommendations received"
                );
                page.recommendations = Some(books);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error getting recommendations");
                let message = e.api_message().unwrap_or(RECOMMEND_ERROR).to_string();
                page.push_toast(message);
            }
        }
    }

    /// Re-fetches the catalog for the given control values
    pub async fn apply_filters(&self, form: FilterForm) {
        let generation = self.filter_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.page.write().await.filter = form.clone();

        let filter = match BookFilter::parse(&form) {
            Ok(filter) => filter,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected filter selection");
                self.notify(INVALID_FILTER_ERROR).await;
                return;
            }
        };

        let result = self.api.books(&filter).await;

        let mut page = self.page.write().await;
        let latest = self.filter_generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(generation, latest, "Discarding stale filter response");
            return;
        }

        match result {
            Ok(books) => {
                tracing::info!(
                    generation,
                    count = books.len(),
                    params = filter.query_pairs().len(),
                    "Filters applied"
                );
                page.books = books;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error applying filters");
                page.push_toast(APPLY_FILTERS_ERROR);
            }
        }
    }

    /// Flips the theme and persists it; returns the new theme
    pub async fn toggle_theme(&self) -> Theme {
        let theme = {
            let mut page = self.page.write().await;
            page.theme = page.theme.toggled();
            page.theme
        };

        if let Err(e) = self.settings.save(&Settings { theme }) {
            tracing::error!(error = %e, theme = %theme, "Failed to persist theme");
        }

        theme
    }

    pub async fn dismiss_toast(&self, id: Uuid) -> bool {
        self.page.write().await.dismiss_toast(id)
    }

    pub async fn has_toast(&self, id: Uuid) -> bool {
        self.page.read().await.toasts.iter().any(|t| t.id == id)
    }
}

/// Routes dispatched events to the matching flow
pub struct FrontendHandler {
    frontend: Arc<Frontend>,
}

#[async_trait::async_trait]
impl EventHandler for FrontendHandler {
    async fn handle(&self, event: &UiEvent) {
        match event {
            UiEvent::PageLoaded => self.frontend.load().await,
            UiEvent::RecommendationSubmitted { preferences, count } => {
                self.frontend.submit_recommendation(preferences, count).await
            }
            UiEvent::FiltersApplied(form) | UiEvent::FilterChanged(form) => {
                self.frontend.apply_filters(form.clone()).await
            }
            UiEvent::ThemeToggled => {
                self.frontend.toggle_theme().await;
            }
            UiEvent::ToastDismissed(id) => {
                self.frontend.dismiss_toast(*id).await;
            }
        }
    }
}

/// Registers the frontend for every event kind; the ids allow teardown
pub async fn bind(frontend: Arc<Frontend>, dispatcher: &Dispatcher) -> Vec<HandlerId> {
    let handler: Arc<dyn EventHandler> = Arc::new(FrontendHandler { frontend });
    let mut ids = Vec::with_capacity(EventKind::ALL.len());
    for kind in EventKind::ALL {
        ids.push(dispatcher.register(kind, Arc::clone(&handler)).await);
    }
    ids
}

/// Binds the handlers and runs the page-load flow
pub async fn bootstrap(frontend: Arc<Frontend>, dispatcher: &Dispatcher) -> Vec<HandlerId> {
    let ids = bind(frontend, dispatcher).await;
    dispatcher.dispatch(&UiEvent::PageLoaded).await;
    ids
}
