//! Testimonial carousel position and autoplay clock.
//!
//! The position is a cyclic index over the slides. Autoplay is modelled as a
//! countdown that the browser side drives with wall-clock intervals; explicit
//! navigation restarts the countdown (even while hovered), hovering pauses it.

pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Move `delta` slides from `current`, wrapping in both directions.
pub fn wrap_index(current: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (current as i64 + delta).rem_euclid(len) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Forward,
    Backward,
}

impl Swipe {
    /// A horizontal touch from `start_x` to `end_x`; short movements are taps.
    pub fn classify(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            None
        } else if diff > 0.0 {
            Some(Self::Forward)
        } else {
            Some(Self::Backward)
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayClock {
    interval_ms: u32,
    remaining_ms: u32,
    paused: bool,
    generation: u32,
}

impl AutoplayClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            remaining_ms: interval_ms.max(1),
            paused: false,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Bumped whenever the countdown restarts, so the timer owner knows to
    /// replace its interval.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a fresh countdown. A restarted clock is always running.
    pub fn restart(&mut self) {
        self.paused = false;
        self.remaining_ms = self.interval_ms;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Let `elapsed_ms` pass and return how many slides autoplay advances.
    pub fn elapse(&mut self, elapsed_ms: u32) -> u32 {
        if self.paused {
            return 0;
        }
        let mut steps = 0;
        let mut left = elapsed_ms;
        while left >= self.remaining_ms {
            left -= self.remaining_ms;
            self.remaining_ms = self.interval_ms;
            steps += 1;
        }
        self.remaining_ms -= left;
        steps
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Step(i64),
    GoTo(usize),
    Swipe { start_x: f64, end_x: f64 },
    Elapsed(u32),
    Pause,
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: AutoplayClock,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, AUTOPLAY_INTERVAL_MS)
    }

    pub fn with_interval(len: usize, interval_ms: u32) -> Self {
        Self {
            index: 0,
            len,
            autoplay: AutoplayClock::new(interval_ms),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    pub fn autoplay(&self) -> &AutoplayClock {
        &self.autoplay
    }

    /// Move without touching autoplay; used by the autoplay tick itself.
    pub fn advance(&mut self, delta: i64) -> usize {
        self.index = wrap_index(self.index, delta, self.len);
        self.index
    }

    /// User navigation by prev/next: moves and restarts autoplay.
    pub fn navigate(&mut self, delta: i64) -> usize {
        self.autoplay.restart();
        self.advance(delta)
    }

    /// User navigation by indicator dot.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.autoplay.restart();
        self.index = wrap_index(index, 0, self.len);
        self.index
    }

    /// Returns whether the touch counted as a swipe.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        match Swipe::classify(start_x, end_x) {
            Some(swipe) => {
                self.navigate(swipe.delta());
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> usize {
        let steps = self.autoplay.elapse(elapsed_ms);
        if steps > 0 {
            self.advance(i64::from(steps));
        }
        self.index
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay.pause();
    }

    pub fn resume_autoplay(&mut self) {
        self.autoplay.restart();
    }

    /// Apply one user or timer action. Returns false when nothing changed,
    /// which only happens for a touch too short to be a swipe.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Step(delta) => {
                self.navigate(delta);
            }
            CarouselAction::GoTo(index) => {
                self.go_to(index);
            }
            CarouselAction::Swipe { start_x, end_x } => return self.swipe(start_x, end_x),
            CarouselAction::Elapsed(elapsed_ms) => {
                self.tick(elapsed_ms);
            }
            CarouselAction::Pause => self.pause_autoplay(),
            CarouselAction::Resume => self.resume_autoplay(),
        }
        true
    }

    pub fn strip_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_stays_in_range_for_any_delta() {
        for len in 1..=5usize {
            for current in 0..len {
                for delta in -12i64..=12 {
                    let next = wrap_index(current, delta, len);
                    assert!(next < len);
                    let expected = (current as i64 + delta).rem_euclid(len as i64) as usize;
                    assert_eq!(next, expected);
                }
            }
        }
    }

    #[test]
    fn wrap_index_handles_extreme_deltas() {
        assert!(wrap_index(2, i64::MIN / 2, 3) < 3);
        assert!(wrap_index(0, i64::MAX / 2, 7) < 7);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.navigate(1), 0);
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS * 2), 0);
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn prev_from_first_slide_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.navigate(-1), 2);
        assert_eq!(carousel.strip_transform(), "translateX(-200%)");
        assert_eq!(carousel.navigate(1), 0);
    }

    #[test]
    fn autoplay_advances_after_one_interval() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS - 1), 0);
        assert_eq!(carousel.tick(1), 1);
        assert_eq!(carousel.autoplay().remaining_ms(), AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn swipe_advances_and_resets_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.tick(3_000);
        assert_eq!(carousel.autoplay().remaining_ms(), 2_000);
        let generation = carousel.autoplay().generation();

        assert!(carousel.swipe(200.0, 150.0));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.autoplay().remaining_ms(), AUTOPLAY_INTERVAL_MS);
        assert_ne!(carousel.autoplay().generation(), generation);

        assert_eq!(carousel.tick(2_000), 1);
    }

    #[test]
    fn short_touches_are_not_swipes() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.swipe(100.0, 140.0));
        assert!(!carousel.swipe(100.0, 60.0));
        assert_eq!(carousel.index(), 0);
        assert_eq!(Swipe::classify(100.0, 141.0), Some(Swipe::Backward));
        assert_eq!(Swipe::classify(100.0, 59.0), Some(Swipe::Forward));
    }

    #[test]
    fn right_swipe_goes_back() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.swipe(0.0, 90.0));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_restarts_full_interval() {
        let mut carousel = Carousel::new(3);
        carousel.tick(4_000);
        carousel.pause_autoplay();
        assert_eq!(carousel.tick(60_000), 0);

        carousel.resume_autoplay();
        assert!(!carousel.autoplay().is_paused());
        assert_eq!(carousel.autoplay().remaining_ms(), AUTOPLAY_INTERVAL_MS);
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS), 1);
    }

    #[test]
    fn navigation_while_hovered_restarts_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.pause_autoplay();
        assert_eq!(carousel.navigate(1), 1);
        assert!(!carousel.autoplay().is_paused());
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS), 2);

        carousel.pause_autoplay();
        carousel.go_to(0);
        assert!(!carousel.autoplay().is_paused());

        carousel.pause_autoplay();
        assert!(!carousel.swipe(100.0, 120.0));
        assert!(carousel.autoplay().is_paused());
        assert!(carousel.swipe(200.0, 100.0));
        assert!(!carousel.autoplay().is_paused());
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS), 2);
    }

    #[test]
    fn apply_reports_ignored_touches_only() {
        let mut carousel = Carousel::new(3);
        let before = carousel;
        assert!(!carousel.apply(CarouselAction::Swipe { start_x: 10.0, end_x: 30.0 }));
        assert_eq!(carousel, before);

        assert!(carousel.apply(CarouselAction::Swipe { start_x: 300.0, end_x: 100.0 }));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.apply(CarouselAction::GoTo(2)));
        assert_eq!(carousel.index(), 2);
        assert!(carousel.apply(CarouselAction::Step(1)));
        assert_eq!(carousel.index(), 0);

        assert!(carousel.apply(CarouselAction::Pause));
        assert!(carousel.autoplay().is_paused());
        assert!(carousel.apply(CarouselAction::Elapsed(AUTOPLAY_INTERVAL_MS)));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.apply(CarouselAction::Resume));
        assert!(carousel.apply(CarouselAction::Elapsed(AUTOPLAY_INTERVAL_MS)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn dot_navigation_selects_slide() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.go_to(2), 2);
        assert!(carousel.is_current(2));
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn long_elapse_advances_multiple_slides() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.tick(AUTOPLAY_INTERVAL_MS * 4 + 10), 1);
        assert_eq!(carousel.autoplay().remaining_ms(), AUTOPLAY_INTERVAL_MS - 10);
    }
}
