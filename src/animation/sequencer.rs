//! Binds entrance timelines and panel transitions to composition signals.
//!
//! The sequencer holds no business state of its own. It reacts to exactly
//! two inputs: the first mount of its composition and the
//! [`DisclosureTransition`]s produced by the composition's controller.

use super::entrance::{ElementFrame, EntranceSpec, EntranceTimeline};
use super::transition::{PanelTransitions, TransitionSpec};
use crate::disclosure::DisclosureTransition;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AnimationSequencer<Id, Track> {
    /// Entrance timelines keyed by composition-specific track
    entrances: Vec<(Track, EntranceTimeline)>,
    /// Panel body openness
    panels: PanelTransitions<Id>,
    /// Header chevron rotation
    chevrons: PanelTransitions<Id>,
    mounted: bool,
}

impl<Id, Track> AnimationSequencer<Id, Track>
where
    Id: Copy + Eq + Hash + Debug,
    Track: Copy + Eq + Debug,
{
    /// Creates a sequencer whose panel motions start settled on `open`.
    pub fn new(panels: &[Id], open: Option<Id>) -> Self {
        Self {
            entrances: Vec::new(),
            panels: PanelTransitions::new(TransitionSpec::PANEL, panels, open),
            chevrons: PanelTransitions::new(TransitionSpec::CHEVRON, panels, open),
            mounted: false,
        }
    }

    /// Registers an entrance timeline of `count` elements under `track`.
    pub fn with_entrance(mut self, track: Track, spec: EntranceSpec, count: usize) -> Self {
        self.entrances.push((track, EntranceTimeline::new(spec, count)));
        self
    }

    // ===== Signals =====

    /// Starts every entrance timeline. Returns false on later calls.
    pub fn on_first_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        for (_, timeline) in &mut self.entrances {
            timeline.mount();
        }
        true
    }

    /// Plays the enter/exit motion for a disclosure change.
    pub fn on_disclosure(&mut self, transition: &DisclosureTransition<Id>) {
        if transition.is_empty() {
            return;
        }
        self.panels.apply(transition);
        self.chevrons.apply(transition);
    }

    /// Advances every running effect by one frame.
    pub fn advance(&mut self, delta: Duration) {
        for (_, timeline) in &mut self.entrances {
            timeline.advance(delta);
        }
        self.panels.advance(delta);
        self.chevrons.advance(delta);
    }

    /// Jumps every effect to its final state.
    pub fn finish(&mut self) {
        self.mounted = true;
        for (_, timeline) in &mut self.entrances {
            timeline.finish();
        }
        self.panels.finish_all();
        self.chevrons.finish_all();
    }

    // ===== Sampling =====

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Samples element `index` of the `track` timeline.
    pub fn entrance_frame(&self, track: Track, index: usize) -> ElementFrame {
        match self.entrances.iter().find(|(t, _)| *t == track) {
            Some((_, timeline)) => timeline.frame(index),
            None => {
                tracing::debug!(?track, "entrance track not registered, treating as settled");
                ElementFrame::SETTLED
            }
        }
    }

    pub fn panel_openness(&self, id: Id) -> f32 {
        self.panels.openness(id)
    }

    pub fn is_panel_visible(&self, id: Id) -> bool {
        self.panels.is_visible(id)
    }

    /// Chevron rotation progress, 0 (pointing right) to 1 (pointing down).
    pub fn chevron_turn(&self, id: Id) -> f32 {
        self.chevrons.openness(id)
    }

    /// Whether any effect still needs frames.
    pub fn is_animating(&self) -> bool {
        let entrances_running = self.mounted && self.entrances.iter().any(|(_, t)| !t.is_settled());
        entrances_running || self.panels.any_animating() || self.chevrons.any_animating()
    }
}
