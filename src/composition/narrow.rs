use super::Section;
use crate::animation::{AnimationSequencer, EntranceSpec, PanelTransitions, Stagger, TransitionSpec};
use crate::disclosure::{DisclosureController, DisclosureTransition};
use std::time::Duration;

/// Photo, name, link bar, accordion
pub const COLUMN_ITEMS: usize = 4;

/// Entrance tracks of the narrow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrowTrack {
    Column,
}

/// Single-column layout for small viewports.
///
/// Experiences are listed as their own per-job disclosure instead of the
/// wide layout's tab column.
#[derive(Debug, Clone)]
pub struct NarrowComposition {
    sections: DisclosureController<Section>,
    /// One panel per job entry
    jobs: DisclosureController<usize>,
    sequencer: AnimationSequencer<Section, NarrowTrack>,
    job_motion: PanelTransitions<usize>,
}

impl NarrowComposition {
    pub fn new(experience_count: usize) -> Self {
        let sections = DisclosureController::new(Section::ALL, None);
        let jobs = DisclosureController::indexed(experience_count, None);
        let sequencer = AnimationSequencer::new(sections.panels(), sections.expanded()).with_entrance(
            NarrowTrack::Column,
            EntranceSpec::fade_reveal().with_stagger(Stagger::Each(Duration::from_millis(700))),
            COLUMN_ITEMS,
        );
        let job_motion = PanelTransitions::new(TransitionSpec::PANEL, jobs.panels(), jobs.expanded());

        Self { sections, jobs, sequencer, job_motion }
    }

    // ===== Queries =====

    pub fn sections(&self) -> &DisclosureController<Section> {
        &self.sections
    }

    pub fn jobs(&self) -> &DisclosureController<usize> {
        &self.jobs
    }

    pub fn sequencer(&self) -> &AnimationSequencer<Section, NarrowTrack> {
        &self.sequencer
    }

    /// Openness of the job panel at `index`.
    pub fn job_openness(&self, index: usize) -> f32 {
        self.job_motion.openness(index)
    }

    pub fn is_job_visible(&self, index: usize) -> bool {
        self.job_motion.is_visible(index)
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating() || self.job_motion.any_animating()
    }

    // ===== Signals =====

    pub fn mount(&mut self) -> bool {
        self.sequencer.on_first_mount()
    }

    pub fn toggle_section(&mut self, section: Section) -> DisclosureTransition<Section> {
        let transition = self.sections.toggle(section);
        self.sequencer.on_disclosure(&transition);
        transition
    }

    pub fn toggle_job(&mut self, index: usize) -> DisclosureTransition<usize> {
        let transition = self.jobs.toggle(index);
        self.job_motion.apply(&transition);
        transition
    }

    pub fn advance(&mut self, delta: Duration) {
        self.sequencer.advance(delta);
        self.job_motion.advance(delta);

        // Job panels leave the tree with the experiences panel
        if !self.sequencer.is_panel_visible(Section::Experiences) {
            for &index in self.jobs.panels() {
                if self.job_motion.is_animating(index) {
                    self.job_motion.release(index);
                }
            }
        }
    }

    /// Jumps every animation to its final state.
    pub fn finish(&mut self) {
        self.sequencer.finish();
        self.job_motion.finish_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_collapsed() {
        let narrow = NarrowComposition::new(2);
        assert_eq!(narrow.sections().expanded(), None);
        assert_eq!(narrow.jobs().expanded(), None);
        assert_eq!(narrow.job_openness(0), 0.0);
    }

    #[test]
    fn test_column_fades_in_order() {
        let mut narrow = NarrowComposition::new(2);
        narrow.mount();
        narrow.advance(Duration::from_millis(800));
        let seq = narrow.sequencer();
        assert_eq!(seq.entrance_frame(NarrowTrack::Column, 0).opacity, 1.0);
        assert!(seq.entrance_frame(NarrowTrack::Column, 1).opacity > 0.0);
        assert_eq!(seq.entrance_frame(NarrowTrack::Column, 2).opacity, 0.0);
    }

    #[test]
    fn test_job_panels_are_independent_of_sections() {
        let mut narrow = NarrowComposition::new(2);
        narrow.toggle_section(Section::Experiences);
        narrow.toggle_job(1);
        narrow.advance(Duration::from_secs(1));
        assert_eq!(narrow.jobs().expanded(), Some(1));
        assert_eq!(narrow.job_openness(1), 1.0);
        assert_eq!(narrow.sections().expanded(), Some(Section::Experiences));

        narrow.toggle_job(1);
        assert_eq!(narrow.jobs().expanded(), None);
        assert_eq!(narrow.sections().expanded(), Some(Section::Experiences));
    }

    #[test]
    fn test_hidden_experiences_settle_job_motion() {
        let mut narrow = NarrowComposition::new(2);
        // Experiences stays collapsed, so the job panel is not on screen
        narrow.toggle_job(0);
        narrow.advance(Duration::from_millis(16));
        assert!(!narrow.is_animating());
        assert_eq!(narrow.job_openness(0), 1.0);
    }
}
