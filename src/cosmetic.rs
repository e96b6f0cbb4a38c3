//! Presentation-only effects: timings for the page script.
//!
//! Nothing here affects data flow. The values are rendered into the page's
//! behaviour script and the card styles so the numbers stay in one place.

use std::time::Duration;

/// Delay between catalog cards fading in
pub const CATALOG_STAGGER: Duration = Duration::from_millis(50);
/// Delay between recommendation cards fading in
pub const RECOMMENDATION_STAGGER: Duration = Duration::from_millis(100);
/// Delay between hero stat items fading in
pub const STAT_STAGGER: Duration = Duration::from_millis(200);

pub const HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
pub const PRESS_TRANSFORM: &str = "scale(0.95)";
pub const PRESS_DURATION: Duration = Duration::from_millis(150);

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

pub const TYPING_START_DELAY: Duration = Duration::from_millis(1000);
pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);

pub const TOAST_LIFETIME: Duration = Duration::from_millis(5000);

/// Animation delay of the `index`-th item in a staggered list
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * u32::try_from(index).unwrap_or(u32::MAX)
}

/// CSS value for an animation delay, e.g. `0.15s`
pub fn css_seconds(delay: Duration) -> String {
    format!("{:.2}s", delay.as_secs_f64())
}
