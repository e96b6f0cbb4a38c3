use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    events::UiEvent,
    models::FilterForm,
    render::STYLESHEET,
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub num_recommendations: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterSubmission {
    #[serde(flatten)]
    pub form: FilterForm,
    /// `change` when a control's onchange submitted the form
    #[serde(default)]
    pub trigger: String,
}

impl FilterSubmission {
    fn into_event(self) -> UiEvent {
        if self.trigger == "change" {
            UiEvent::FilterChanged(self.form)
        } else {
            UiEvent::FiltersApplied(self.form)
        }
    }
}

/// Runs the event to completion even if the client goes away mid-request
async fn dispatch(state: &AppState, event: UiEvent) -> AppResult<()> {
    let kind = event.kind();
    let dispatcher = Arc::clone(&state.dispatcher);
    let handled = tokio::spawn(async move { dispatcher.dispatch(&event).await })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(kind = ?kind, handlers = handled, "Event dispatched");
    Ok(())
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Renders the whole page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.frontend.render().await)
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// Submits reading preferences
pub async fn recommend(
    State(state): State<AppState>,
    Form(request): Form<RecommendForm>,
) -> AppResult<Redirect> {
    dispatch(
        &state,
        UiEvent::RecommendationSubmitted {
            preferences: request.preferences,
            count: request.num_recommendations,
        },
    )
    .await?;
    Ok(Redirect::to("/#recommendationsSection"))
}

/// Applies the filter controls
pub async fn filters(
    State(state): State<AppState>,
    Form(submission): Form<FilterSubmission>,
) -> AppResult<Redirect> {
    dispatch(&state, submission.into_event()).await?;
    Ok(Redirect::to("/"))
}

/// Switches between dark and light
pub async fn toggle_theme(State(state): State<AppState>) -> AppResult<Redirect> {
    dispatch(&state, UiEvent::ThemeToggled).await?;
    Ok(Redirect::to("/"))
}

/// Dismisses one toast
pub async fn dismiss_toast(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Redirect> {
    if !state.frontend.has_toast(id).await {
        return Err(AppError::NotFound(format!("toast {}", id)));
    }
    dispatch(&state, UiEvent::ToastDismissed(id)).await?;
    Ok(Redirect::to("/"))
}
