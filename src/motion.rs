//! Geometry for scroll and pointer driven effects.
//!
//! Everything here is plain arithmetic on rectangles reported by the browser,
//! so the browser glue only has to read layout and write transforms.

pub const FLOAT_PARALLAX_FACTOR: f64 = 14.0;
pub const HEADER_PARALLAX_FACTOR: f64 = 8.0;
pub const MAGNETIC_DAMPING: f64 = 0.28;

/// Browsers fire timers with a longer delay than this immediately.
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;

/// Vertical offset for an element whose box starts at `top` with `height`,
/// proportional to how far its center sits from the viewport center.
pub fn parallax_offset(top: f64, height: f64, viewport_height: f64, factor: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let center = top + height / 2.0;
    (center - viewport_height / 2.0) / viewport_height * factor
}

/// Header offset, or `None` while the header still waits for its reveal and
/// must keep its entrance transform.
pub fn header_parallax(revealed: bool, top: f64, height: f64, viewport_height: f64) -> Option<f64> {
    revealed.then(|| parallax_offset(top, height, viewport_height, HEADER_PARALLAX_FACTOR))
}

/// Holds at most one queued animation frame. Queuing a newer frame hands the
/// older one back, and dropping it cancels it.
#[derive(Debug)]
pub struct LatestFrame<T> {
    pending: Option<T>,
}

impl<T> Default for LatestFrame<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> LatestFrame<T> {
    pub fn schedule(&mut self, frame: T) -> Option<T> {
        self.pending.replace(frame)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// Pull a button of the given box toward the pointer, damped.
pub fn magnetic_offset(
    pointer_x: f64,
    pointer_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let center_x = left + width / 2.0;
    let center_y = top + height / 2.0;
    (
        (pointer_x - center_x) * MAGNETIC_DAMPING,
        (pointer_y - center_y) * MAGNETIC_DAMPING,
    )
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

pub fn translate(dx: f64, dy: f64) -> String {
    format!("translate({dx}px, {dy}px)")
}

/// Delay before a revealed element gets its marker class.
///
/// Reads a leading integer the way an HTML author expects `data-aos-delay="200ms"`
/// to work. Missing, malformed or negative values mean no delay; huge values
/// are capped at the longest delay a browser timer honours.
pub fn reveal_delay_ms(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end]
        .parse::<u32>()
        .map_or(MAX_TIMER_DELAY_MS, |delay| delay.min(MAX_TIMER_DELAY_MS))
}
