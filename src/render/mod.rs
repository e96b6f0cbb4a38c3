//! HTML markup for the page, built from plain data.
//!
//! Every function here is pure: same input, same markup.

pub mod card;
pub mod page;
pub mod style;
pub mod toast;

pub use card::{book_card, cover_gradient, cover_title, star_rating, CardKind};
pub use page::page;
pub use style::{STYLESHEET, STYLESHEET_PATH};
pub use toast::toast;

/// Escapes text for use in element content and quoted attributes
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
