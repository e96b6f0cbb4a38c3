use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    cosmetic::TOAST_LIFETIME,
    models::{Book, FilterForm, Theme},
};

/// A dismissible error notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let lifetime = Duration::from_std(TOAST_LIFETIME).unwrap_or_else(|_| Duration::seconds(5));
        self.created_at + lifetime
    }
}

/// Everything the rendered page shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    /// Selectable genres, in backend order
    pub genre_options: Vec<String>,
    /// Current filter control values
    pub filter: FilterForm,
    /// Catalog grid
    pub books: Vec<Book>,
    /// Recommendations section; hidden while `None`
    pub recommendations: Option<Vec<Book>>,
    /// Blocking progress indicator
    pub loading: bool,
    pub toasts: Vec<Toast>,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn push_toast(&mut self, message: impl Into<String>) -> Uuid {
        let toast = Toast::new(message);
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Removes a toast; false if it was already gone
    pub fn dismiss_toast(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drops toasts whose lifetime ended at or before `now`
    pub fn expire_toasts(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at() > now);
        before - self.toasts.len()
    }
}
