#![forbid(unsafe_code)]

pub mod api;
pub mod client;
pub mod config;
pub mod cosmetic;
pub mod error;
pub mod events;
pub mod frontend;
pub mod logging;
pub mod models;
pub mod page;
pub mod render;
pub mod settings;
