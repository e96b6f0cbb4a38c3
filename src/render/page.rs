use crate::{
    cosmetic::{
        css_seconds, stagger_delay, HOVER_TRANSFORM, PRESS_DURATION, PRESS_TRANSFORM,
        RIPPLE_LIFETIME, STAT_STAGGER, TOAST_LIFETIME, TYPING_INTERVAL, TYPING_START_DELAY,
    },
    page::PageState,
};

use super::{
    card::{book_cards, CardKind},
    escape,
    style::STYLESHEET_PATH,
    toast::toast_stack,
};

pub const HERO_TITLE: &str = "Discover Your Next Favorite Book";

/// (value, label) pairs of the minimum-rating control
pub const RATING_OPTIONS: &[(&str, &str)] = &[
    ("", "Any Rating"),
    ("4.5", "4.5+ Stars"),
    ("4.0", "4.0+ Stars"),
    ("3.5", "3.5+ Stars"),
];

/// (value, label) pairs of the publication-year control
pub const YEAR_OPTIONS: &[(&str, &str)] = &[
    ("", "Any Year"),
    ("2000-2024", "2000-2024"),
    ("1950-1999", "1950-1999"),
    ("1900-1949", "1900-1949"),
    ("1800-1899", "1800-1899"),
];

/// Recommendation counts offered by the preference form
pub const COUNT_OPTIONS: &[u32] = &[3, 5, 10];

const MODAL_SHOWN: (&str, &str) = ("modal fade show", "display: block;");
const MODAL_HIDDEN: (&str, &str) = ("modal fade", "display: none;");

fn option(value: &str, label: &str, selected: &str) -> String {
    let mark = if value == selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        mark,
        escape(label)
    )
}

fn genre_select(state: &PageState) -> String {
    let mut options = vec![option("", "All Genres", &state.filter.genre)];
    options.extend(
        state
            .genre_options
            .iter()
            .map(|genre| option(genre, genre, &state.filter.genre)),
    );
    select("genre", "genreFilter", &options.join(""))
}

fn fixed_select(name: &str, id: &str, choices: &[(&str, &str)], selected: &str) -> String {
    let options: String = choices
        .iter()
        .map(|(value, label)| option(value, label, selected))
        .collect();
    select(name, id, &options)
}

fn select(name: &str, id: &str, options: &str) -> String {
    format!(
        r#"<select class="form-select" name="{name}" id="{id}" onchange="this.form.trigger.value='change'; this.form.submit();">{options}</select>"#
    )
}

fn hero_stats(state: &PageState) -> String {
    let stats = [
        (state.books.len().to_string(), "Books"),
        (state.genre_options.len().to_string(), "Genres"),
        ("AI".to_string(), "Powered"),
    ];
    stats
        .iter()
        .enumerate()
        .map(|(index, (value, label))| {
            format!(
                r#"<div class="stat-item fade-in-up" style="animation-delay: {};"><span class="stat-number">{}</span><span class="stat-label">{}</span></div>"#,
                css_seconds(stagger_delay(index, STAT_STAGGER)),
                escape(value),
                label
            )
        })
        .collect()
}

fn recommendations_section(state: &PageState) -> String {
    match &state.recommendations {
        Some(books) => format!(
            r#"<section id="recommendationsSection" class="py-5">
    <h2 class="section-title">Your Recommendations</h2>
    <div class="row" id="recommendationsContainer">
{}
    </div>
</section>"#,
            book_cards(books, CardKind::Recommendation)
        ),
        None => r#"<section id="recommendationsSection" class="py-5" style="display: none;"></section>"#
            .to_string(),
    }
}

fn loading_modal(loading: bool) -> String {
    let (class, style) = if loading { MODAL_SHOWN } else { MODAL_HIDDEN };
    format!(
        r#"<div class="{class}" id="loadingModal" tabindex="-1" style="{style}" aria-hidden="{hidden}">
    <div class="modal-dialog modal-dialog-centered">
        <div class="modal-content text-center p-4">
            <div class="spinner-border text-primary" role="status"></div>
            <p class="mt-3 mb-0">Finding your perfect books...</p>
        </div>
    </div>
</div>"#,
        hidden = !loading
    )
}

/// Script wiring the progress modal and the hover, press, ripple, typing and toast effects
fn behaviour_script() -> String {
    format!(
        r#"<script>
(function () {{
    var form = document.getElementById('recommendationForm');
    var modal = document.getElementById('loadingModal');
    if (form && modal) {{
        form.addEventListener('submit', function () {{
            if (!form.preferences.value.trim()) {{ return; }}
            modal.className = '{modal_class}';
            modal.style.display = 'block';
            modal.setAttribute('aria-hidden', 'false');
        }});
    }}
    document.querySelectorAll('.card, .book-card').forEach(function (card) {{
        card.addEventListener('mouseenter', function () {{ card.style.transform = '{hover}'; }});
        card.addEventListener('mouseleave', function () {{ card.style.transform = ''; }});
        card.addEventListener('click', function () {{
            card.style.transform = '{press}';
            setTimeout(function () {{ card.style.transform = ''; }}, {press_ms});
        }});
    }});
    document.querySelectorAll('.btn').forEach(function (button) {{
        button.addEventListener('click', function (e) {{
            var rect = button.getBoundingClientRect();
            var size = Math.max(rect.width, rect.height);
            var ripple = document.createElement('span');
            ripple.style.width = ripple.style.height = size + 'px';
            ripple.style.left = (e.clientX - rect.left - size / 2) + 'px';
            ripple.style.top = (e.clientY - rect.top - size / 2) + 'px';
            ripple.classList.add('ripple');
            button.appendChild(ripple);
            setTimeout(function () {{ ripple.remove(); }}, {ripple_ms});
        }});
    }});
    var hero = document.querySelector('.display-4');
    if (hero) {{
        var text = hero.textContent, i = 0;
        hero.textContent = '';
        var type = function () {{
            if (i < text.length) {{ hero.textContent += text.charAt(i++); setTimeout(type, {typing_ms}); }}
        }};
        setTimeout(type, {typing_delay_ms});
    }}
    document.querySelectorAll('.toast').forEach(function (toast) {{
        setTimeout(function () {{ toast.remove(); }}, {toast_ms});
    }});
}})();
</script>"#,
        modal_class = MODAL_SHOWN.0,
        hover = HOVER_TRANSFORM,
        press = PRESS_TRANSFORM,
        press_ms = PRESS_DURATION.as_millis(),
        ripple_ms = RIPPLE_LIFETIME.as_millis(),
        typing_ms = TYPING_INTERVAL.as_millis(),
        typing_delay_ms = TYPING_START_DELAY.as_millis(),
        toast_ms = TOAST_LIFETIME.as_millis(),
    )
}

/// The complete document for the current page state
pub fn page(state: &PageState, default_count: u32) -> String {
    let count_options: String = COUNT_OPTIONS
        .iter()
        .map(|n| {
            let value = n.to_string();
            option(
                &value,
                &format!("{n} books"),
                &default_count.to_string(),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Book Recommendations</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css" rel="stylesheet">
    <link href="{stylesheet}" rel="stylesheet">
</head>
<body>
    <nav class="navbar navbar-expand-lg">
        <div class="container">
            <a class="navbar-brand" href="/"><i class="fas fa-book-open me-2"></i>BookMatch</a>
            <form method="post" action="/theme">
                <button type="submit" class="btn btn-outline-light" id="themeToggle"><i id="themeIcon" class="{icon}"></i></button>
            </form>
        </div>
    </nav>

    <header class="hero-section text-center py-5">
        <h1 class="display-4">{hero_title}</h1>
        <div class="hero-stats d-flex justify-content-center gap-4">{stats}</div>
    </header>

    <main class="container">
        <section id="preferencesSection" class="card p-4 mb-5">
            <form method="post" action="/recommend" id="recommendationForm">
                <label for="preferences" class="form-label">Describe what you like to read</label>
                <textarea class="form-control mb-3" id="preferences" name="preferences" rows="3"></textarea>
                <select class="form-select mb-3" id="numRecommendations" name="num_recommendations">{count_options}</select>
                <button type="submit" class="btn btn-primary">Get Recommendations</button>
            </form>
        </section>

        {recommendations}

        <section id="booksSection" class="py-5">
            <h2 class="section-title">Browse Books</h2>
            <form method="post" action="/filters" class="row g-3 mb-4" id="filterForm">
                <input type="hidden" name="trigger" value="apply">
                <div class="col-md-3">{genre_select}</div>
                <div class="col-md-3">{rating_select}</div>
                <div class="col-md-3">{year_select}</div>
                <div class="col-md-3"><button type="submit" class="btn btn-secondary w-100" id="applyFilters">Apply Filters</button></div>
            </form>
            <div class="row" id="booksContainer">
{books}
            </div>
        </section>
    </main>

    {loading}
    {toasts}
    {script}
</body>
</html>"#,
        theme = state.theme,
        stylesheet = STYLESHEET_PATH,
        icon = state.theme.icon_class(),
        hero_title = HERO_TITLE,
        stats = hero_stats(state),
        count_options = count_options,
        recommendations = recommendations_section(state),
        genre_select = genre_select(state),
        rating_select = fixed_select(
            "min_rating",
            "ratingFilter",
            RATING_OPTIONS,
            &state.filter.min_rating
        ),
        year_select = fixed_select("year_range", "yearFilter", YEAR_OPTIONS, &state.filter.year_range),
        books = book_cards(&state.books, CardKind::Catalog),
        loading = loading_modal(state.loading),
        toasts = toast_stack(&state.toasts),
        script = behaviour_script(),
    )
}
