use std::time::Duration;

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`.
///
/// A zero duration is always complete.
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// A timer that has already run to completion.
    pub fn finished() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Jumps to the end of the timer.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }
}
