use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Backend returned status {status}{}", api_message_suffix(.message))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn api_message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl AppError {
    /// Message carried by a backend `{ "error": ... }` payload, if any
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::HttpClient(_) | AppError::Api { .. } | AppError::InvalidRecord(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Settings(_)
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_payload_message() {
        let err = AppError::Api {
            status: 400,
            message: Some("Preferences are required".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Backend returned status 400: Preferences are required"
        );
        assert_eq!(err.api_message(), Some("Preferences are required"));
    }

    #[test]
    fn test_api_error_display_without_message() {
        let err = AppError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "Backend returned status 502");
        assert_eq!(err.api_message(), None);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("toast".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
