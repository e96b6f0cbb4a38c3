//! Stylesheet served at [`STYLESHEET_PATH`].

/// Where the page links its stylesheet
pub const STYLESHEET_PATH: &str = "/static/css/style.css";

pub const STYLESHEET: &str = r#"
[data-theme="dark"] {
    --bg-color: #121212;
    --surface-color: #1e1e1e;
    --text-color: #e0e0e0;
    --muted-color: #a0a0a0;
    --accent-color: #8b5cf6;
    --border-color: #2e2e2e;
    --shadow-color: rgba(0, 0, 0, 0.5);
}

[data-theme="light"] {
    --bg-color: #f8f9fa;
    --surface-color: #ffffff;
    --text-color: #212529;
    --muted-color: #6c757d;
    --accent-color: #6d28d9;
    --border-color: #dee2e6;
    --shadow-color: rgba(0, 0, 0, 0.12);
}

body {
    background-color: var(--bg-color);
    color: var(--text-color);
    transition: background-color 0.3s ease, color 0.3s ease;
}

.navbar,
.card,
.modal-content {
    background-color: var(--surface-color);
    color: var(--text-color);
    border-color: var(--border-color);
}

.hero-section .display-4 {
    min-height: 1.2em;
}

.stat-number {
    display: block;
    font-size: 2rem;
    font-weight: 700;
    color: var(--accent-color);
}

.stat-label,
.book-author,
.book-year {
    color: var(--muted-color);
}

.section-title {
    margin-bottom: 1.5rem;
}

.book-card {
    height: 100%;
    overflow: hidden;
    border-radius: 12px;
    background-color: var(--surface-color);
    box-shadow: 0 4px 12px var(--shadow-color);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.book-card:hover {
    box-shadow: 0 12px 24px var(--shadow-color);
}

.book-cover {
    height: 200px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    color: #ffffff;
    text-align: center;
}

.book-cover-title {
    font-weight: 700;
    text-shadow: 0 2px 4px rgba(0, 0, 0, 0.4);
}

.book-info {
    padding: 1rem;
}

.book-genre {
    display: inline-block;
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
    font-size: 0.8rem;
    background-color: var(--accent-color);
    color: #ffffff;
}

.stars {
    color: #fbbf24;
}

.similarity-score {
    margin-top: 0.5rem;
    font-weight: 600;
    color: var(--accent-color);
}

.btn {
    position: relative;
    overflow: hidden;
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background-color: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple 0.6s linear;
    pointer-events: none;
}

@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.fade-in-up {
    opacity: 0;
    animation: fadeInUp 0.6s ease forwards;
}

@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.toast-container {
    z-index: 1080;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_effect_classes() {
        for rule in [
            "@keyframes fadeInUp",
            ".fade-in-up {",
            ".ripple {",
            "@keyframes ripple",
            ".book-card {",
            ".book-cover {",
            r#"[data-theme="dark"]"#,
            r#"[data-theme="light"]"#,
        ] {
            assert!(STYLESHEET.contains(rule), "missing {rule}");
        }
    }
}
