//! One-shot entrance timelines.
//!
//! A timeline animates `count` sibling elements from hidden to settled.
//! Each element starts `stagger` after the previous one. Timelines start on
//! [`EntranceTimeline::mount`] and ignore later mounts, so re-rendering a
//! composition never replays its entrance.

use super::easing::Easing;
use super::timer::normalized_progress;
use egui::Vec2;
use std::time::Duration;

/// Visual effect played by an entrance timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceEffect {
    /// Rise from `offset_y` below while unskewing from `skew_deg`
    SequentialReveal { offset_y: f32, skew_deg: f32 },
    /// Opacity only
    Fade,
    /// Slide in horizontally from `offset_x`
    SlideIn { offset_x: f32 },
    /// Grow from zero scale
    Pop,
}

/// Spacing between consecutive element starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    /// Fixed offset between each element
    Each(Duration),
    /// Total spread, divided evenly between elements
    Amount(Duration),
}

impl Stagger {
    fn offset(self, index: usize, count: usize) -> Duration {
        match self {
            Stagger::Each(each) => each.saturating_mul(index as u32),
            Stagger::Amount(total) if count > 1 => {
                let nanos = total.as_nanos() * index as u128 / (count - 1) as u128;
                Duration::from_nanos(nanos as u64)
            }
            Stagger::Amount(_) => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSpec {
    pub delay: Duration,
    pub duration: Duration,
    pub stagger: Stagger,
    pub easing: Easing,
    pub effect: EntranceEffect,
}

impl EntranceSpec {
    /// Lines rising into place with a decelerating curve.
    pub fn sequential_reveal() -> Self {
        Self {
            delay: Duration::from_millis(500),
            duration: Duration::from_secs(1),
            stagger: Stagger::Amount(Duration::from_millis(300)),
            easing: Easing::Power4Out,
            effect: EntranceEffect::SequentialReveal { offset_y: 100.0, skew_deg: 7.0 },
        }
    }

    /// Elements fading in together.
    pub fn fade_reveal() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(500),
            stagger: Stagger::Each(Duration::ZERO),
            easing: Easing::Linear,
            effect: EntranceEffect::Fade,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_effect(mut self, effect: EntranceEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Time at which element `index` of `count` starts moving.
    pub fn element_start(&self, index: usize, count: usize) -> Duration {
        self.delay + self.stagger.offset(index, count)
    }

    /// Time at which the last of `count` elements settles.
    pub fn total(&self, count: usize) -> Duration {
        if count == 0 {
            return Duration::ZERO;
        }
        self.element_start(count - 1, count) + self.duration
    }
}

/// Sampled visual state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    pub opacity: f32,
    pub offset: Vec2,
    /// Vertical shear applied to text, in degrees; positive drops the right edge
    pub skew_deg: f32,
    pub scale: f32,
}

impl ElementFrame {
    /// Fully visible, untransformed.
    pub const SETTLED: ElementFrame = ElementFrame {
        opacity: 1.0,
        offset: Vec2::ZERO,
        skew_deg: 0.0,
        scale: 1.0,
    };

    /// Returns true once the element is fully visible and untransformed.
    pub fn is_settled(&self) -> bool {
        *self == Self::SETTLED
    }

    fn sample(effect: EntranceEffect, p: f32) -> Self {
        if p >= 1.0 {
            return Self::SETTLED;
        }
        let rest = 1.0 - p;
        match effect {
            EntranceEffect::SequentialReveal { offset_y, skew_deg } => Self {
                opacity: p,
                offset: Vec2::new(0.0, offset_y * rest),
                skew_deg: skew_deg * rest,
                scale: 1.0,
            },
            EntranceEffect::Fade => Self { opacity: p, ..Self::SETTLED },
            EntranceEffect::SlideIn { offset_x } => Self {
                opacity: p,
                offset: Vec2::new(offset_x * rest, 0.0),
                ..Self::SETTLED
            },
            EntranceEffect::Pop => Self { opacity: p, scale: p, ..Self::SETTLED },
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntranceTimeline {
    spec: EntranceSpec,
    count: usize,
    /// Time since mount; `None` until mounted
    elapsed: Option<Duration>,
}

impl EntranceTimeline {
    pub fn new(spec: EntranceSpec, count: usize) -> Self {
        Self { spec, count, elapsed: None }
    }

    pub fn spec(&self) -> &EntranceSpec {
        &self.spec
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Starts the timeline. Returns false if it was already started.
    pub fn mount(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        self.elapsed = Some(Duration::ZERO);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed = elapsed.saturating_add(delta);
        }
    }

    /// Returns true once every element has settled.
    pub fn is_settled(&self) -> bool {
        self.elapsed.is_some_and(|elapsed| elapsed >= self.spec.total(self.count))
    }

    /// Jumps every element to its settled state.
    pub fn finish(&mut self) {
        self.elapsed = Some(self.spec.total(self.count));
    }

    /// Samples element `index`.
    ///
    /// Elements are hidden before mount. An index outside the timeline has
    /// nothing to animate and is reported as settled.
    pub fn frame(&self, index: usize) -> ElementFrame {
        if index >= self.count {
            tracing::debug!(index, count = self.count, "entrance target not in timeline, treating as settled");
            return ElementFrame::SETTLED;
        }
        let Some(elapsed) = self.elapsed else {
            return ElementFrame::sample(self.spec.effect, 0.0);
        };

        let start = self.spec.element_start(index, self.count);
        let local = elapsed.saturating_sub(start);
        let progress = normalized_progress(local, self.spec.duration);
        ElementFrame::sample(self.spec.effect, self.spec.easing.apply(progress))
    }
}
