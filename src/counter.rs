pub const COUNTER_DURATION_MS: f64 = 1_500.0;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Compact rendering used by the stat counters: `999`, `1k`, `3k`.
pub fn format_short(value: u64) -> String {
    if value >= 1_000 {
        // u64 -> f64 is exact for any count a page would display.
        let thousands = (value as f64 / 1_000.0).round() as u64;
        format!("{thousands}k")
    } else {
        value.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Counts from zero up to `target` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        ((eased * self.target as f64).floor() as u64).min(self.target)
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        if self.progress(elapsed_ms) >= 1.0 {
            CounterFrame {
                text: format!("{}+", format_short(self.target)),
                finished: true,
            }
        } else {
            CounterFrame {
                text: format_short(self.value_at(elapsed_ms)),
                finished: false,
            }
        }
    }
}
