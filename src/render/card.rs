use crate::{
    cosmetic::{css_seconds, stagger_delay, CATALOG_STAGGER, RECOMMENDATION_STAGGER},
    models::Book,
};

use super::escape;

const MAX_STARS: usize = 5;
const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Where a card is shown; recommendations also display their match score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Catalog,
    Recommendation,
}

impl CardKind {
    fn stagger(self) -> std::time::Duration {
        match self {
            CardKind::Catalog => CATALOG_STAGGER,
            CardKind::Recommendation => RECOMMENDATION_STAGGER,
        }
    }
}

/// Cover background for a genre; unknown genres get the Fiction gradient
pub fn cover_gradient(genre: &str) -> &'static str {
    match genre {
        "Fiction" => FALLBACK_GRADIENT,
        "Fantasy" => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        "Mystery" => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        "Romance" => "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
        "Dystopian Fiction" => "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        _ => FALLBACK_GRADIENT,
    }
}

/// Number of filled stars: the rating clamped to 0-5, floored
pub fn filled_stars(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.clamp(0.0, MAX_STARS as f64).floor() as usize
}

/// Five-symbol star strip, e.g. 3.7 -> `★★★☆☆`
pub fn star_rating(rating: f64) -> String {
    let filled = filled_stars(rating);
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}

/// Placeholder cover text: the first two words of the title
pub fn cover_title(title: &str) -> String {
    title.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Markup for one book card, `index` drives the fade-in stagger
pub fn book_card(book: &Book, kind: CardKind, index: usize) -> String {
    let delay = css_seconds(stagger_delay(index, kind.stagger()));

    let similarity = match (kind, book.match_percent()) {
        (CardKind::Recommendation, Some(percent)) => {
            format!(r#"<div class="similarity-score">Match: {:.1}%</div>"#, percent)
        }
        _ => String::new(),
    };

    format!(
        r#"<div class="col-lg-4 col-md-6 mb-4 fade-in-up" style="animation-delay: {delay};">
    <div class="book-card">
        <div class="book-cover" style="background: {gradient};">
            <div class="book-cover-content">
                <i class="fas fa-book"></i>
                <div class="book-cover-title">{cover}</div>
            </div>
        </div>
        <div class="book-info">
            <div class="book-title">{title}</div>
            <div class="book-author">by {author}</div>
            <div class="book-genre">{genre}</div>
            <div class="book-description">{description}</div>
            <div class="book-rating">
                <span class="stars">{stars}</span>
                <span>{rating}/5.0</span>
            </div>
            <div class="book-year">Published: {year}</div>
            {similarity}
        </div>
    </div>
</div>"#,
        delay = delay,
        gradient = cover_gradient(&book.genre),
        cover = escape(&cover_title(&book.title)),
        title = escape(&book.title),
        author = escape(&book.author),
        genre = escape(&book.genre),
        description = escape(&book.description),
        stars = star_rating(book.rating),
        rating = book.rating,
        year = book.year,
        similarity = similarity,
    )
}

/// Cards for a whole list, in order
pub fn book_cards(books: &[Book], kind: CardKind) -> String {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| book_card(book, kind, index))
        .collect::<Vec<_>>()
        .join("\n")
}
