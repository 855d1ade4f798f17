//! Expand/collapse motion for disclosure panels.
//!
//! Each panel carries an openness value in `0.0..=1.0` (0 = collapsed,
//! 1 = fully open). A new target retargets the motion from wherever it
//! currently is, so an interrupted transition is abandoned rather than
//! queued behind.

use super::easing::Easing;
use super::timer::EffectTimer;
use crate::disclosure::DisclosureTransition;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

/// Duration and curve of a full 0 -> 1 (or 1 -> 0) transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    /// Panel body height and opacity.
    pub const PANEL: TransitionSpec = TransitionSpec {
        duration: Duration::from_millis(800),
        easing: Easing::PANEL,
    };

    /// Header chevron rotation.
    pub const CHEVRON: TransitionSpec = TransitionSpec {
        duration: Duration::from_millis(500),
        easing: Easing::EaseOutCubic,
    };
}

#[derive(Debug, Clone)]
struct Motion {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

impl Motion {
    fn settled(value: f32) -> Self {
        Self { from: value, to: value, timer: EffectTimer::finished() }
    }

    fn value(&self, easing: Easing) -> f32 {
        self.from + (self.to - self.from) * easing.apply(self.timer.progress())
    }
}

#[derive(Debug, Clone)]
pub struct PanelTransitions<Id> {
    spec: TransitionSpec,
    motions: HashMap<Id, Motion>,
}

impl<Id: Copy + Eq + Hash + Debug> PanelTransitions<Id> {
    /// Creates settled motions for `panels`, with `open` fully open.
    pub fn new(spec: TransitionSpec, panels: &[Id], open: Option<Id>) -> Self {
        let motions = panels
            .iter()
            .map(|id| (*id, Motion::settled(if open == Some(*id) { 1.0 } else { 0.0 })))
            .collect();
        Self { spec, motions }
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Applies a disclosure transition: the collapsed panel closes and the
    /// expanded panel opens.
    pub fn apply(&mut self, transition: &DisclosureTransition<Id>) {
        if let Some(id) = transition.collapsed {
            self.retarget(id, false);
        }
        if let Some(id) = transition.expanded {
            self.retarget(id, true);
        }
    }

    /// Starts moving `id` toward open or closed from its current value.
    pub fn retarget(&mut self, id: Id, open: bool) {
        let to = if open { 1.0 } else { 0.0 };
        let easing = self.spec.easing;
        let current = self.motions.get(&id).map(|m| m.value(easing)).unwrap_or(0.0);
        if self.motions.get(&id).is_some_and(|m| m.to == to) {
            return;
        }

        let distance = (to - current).abs();
        let duration = if distance >= 1.0 {
            self.spec.duration
        } else {
            self.spec.duration.mul_f32(distance)
        };
        self.motions.insert(id, Motion { from: current, to, timer: EffectTimer::new(duration) });
    }

    pub fn advance(&mut self, delta: Duration) {
        for motion in self.motions.values_mut() {
            motion.timer.advance(delta);
        }
    }

    /// Current openness of `id`.
    ///
    /// Unknown panels have nothing in flight and read as collapsed.
    pub fn openness(&self, id: Id) -> f32 {
        match self.motions.get(&id) {
            Some(motion) => motion.value(self.spec.easing),
            None => {
                tracing::debug!(panel = ?id, "transition target not tracked, treating as settled");
                0.0
            }
        }
    }

    /// Whether `id` is heading toward open.
    pub fn is_opening(&self, id: Id) -> bool {
        self.motions.get(&id).is_some_and(|m| m.to >= 1.0)
    }

    /// Whether `id` should still be drawn (open, or on its way closed).
    pub fn is_visible(&self, id: Id) -> bool {
        self.is_opening(id) || self.openness(id) > 0.0
    }

    pub fn is_animating(&self, id: Id) -> bool {
        self.motions.get(&id).is_some_and(|m| !m.timer.is_finished())
    }

    pub fn any_animating(&self) -> bool {
        self.motions.values().any(|m| !m.timer.is_finished())
    }

    /// Snaps `id` to its target, used when its element leaves the tree
    /// mid-transition.
    pub fn release(&mut self, id: Id) {
        if let Some(motion) = self.motions.get_mut(&id) {
            *motion = Motion::settled(motion.to);
        }
    }

    /// Snaps every panel to its target.
    pub fn finish_all(&mut self) {
        for motion in self.motions.values_mut() {
            *motion = Motion::settled(motion.to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn starts_settled() {
        let transitions = PanelTransitions::new(TransitionSpec::PANEL, &[0, 1, 2], Some(0));
        assert_eq!(transitions.openness(0), 1.0);
        assert_eq!(transitions.openness(1), 0.0);
        assert!(!transitions.any_animating());
        assert!(transitions.is_visible(0));
        assert!(!transitions.is_visible(2));
    }

    #[test]
    fn expand_and_collapse_run_together() {
        let mut transitions = PanelTransitions::new(TransitionSpec::PANEL, &[0, 1], Some(0));
        transitions.apply(&DisclosureTransition { collapsed: Some(0), expanded: Some(1) });
        assert!(transitions.is_animating(0));
        assert!(transitions.is_animating(1));

        transitions.advance(ms(200));
        let closing = transitions.openness(0);
        let opening = transitions.openness(1);
        assert!(closing > 0.0 && closing < 1.0);
        assert!(opening > 0.0 && opening < 1.0);
        assert!(transitions.is_visible(0));

        transitions.advance(ms(600));
        assert_eq!(transitions.openness(0), 0.0);
        assert_eq!(transitions.openness(1), 1.0);
        assert!(!transitions.any_animating());
        assert!(!transitions.is_visible(0));
    }

    #[test]
    fn interrupted_motion_reverses_from_current_value() {
        let mut transitions = PanelTransitions::new(TransitionSpec::PANEL, &[0], None);
        transitions.retarget(0, true);
        transitions.advance(ms(100));
        let partial = transitions.openness(0);
        assert!(partial > 0.0 && partial < 1.0);

        transitions.retarget(0, false);
        // No jump on interruption
        assert!((transitions.openness(0) - partial).abs() < 1e-4);
        transitions.advance(ms(800));
        assert_eq!(transitions.openness(0), 0.0);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut transitions = PanelTransitions::new(TransitionSpec::PANEL, &[0], Some(0));
        transitions.retarget(0, true);
        assert!(!transitions.is_animating(0));
    }

    #[test]
    fn release_snaps_to_target() {
        let mut transitions = PanelTransitions::new(TransitionSpec::PANEL, &[0, 1], Some(0));
        transitions.apply(&DisclosureTransition { collapsed: Some(0), expanded: Some(1) });
        transitions.release(0);
        assert_eq!(transitions.openness(0), 0.0);
        assert!(!transitions.is_animating(0));
        assert!(transitions.is_animating(1));
        transitions.finish_all();
        assert!(!transitions.any_animating());
        assert_eq!(transitions.openness(1), 1.0);
    }

    #[test]
    fn unknown_panel_reads_collapsed() {
        let transitions = PanelTransitions::new(TransitionSpec::CHEVRON, &[0], None);
        assert_eq!(transitions.openness(9), 0.0);
        assert!(!transitions.is_animating(9));
    }
}
