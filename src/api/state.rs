use std::sync::Arc;

use crate::{events::Dispatcher, frontend::Frontend};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Page controller whose state the routes render
    pub frontend: Arc<Frontend>,
    /// Turns form posts into UI events for the registered handlers
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(frontend: Arc<Frontend>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            frontend,
            dispatcher,
        }
    }
}
