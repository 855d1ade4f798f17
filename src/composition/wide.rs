use super::Section;
use crate::animation::{AnimationSequencer, Easing, EntranceEffect, EntranceSpec, Stagger};
use crate::disclosure::{indicator_slot, DisclosureController, DisclosureTransition};
use std::time::Duration;

/// Lines in the animated greeting ("Hello," / "I'm <name>.")
pub const TITLE_LINES: usize = 2;
/// Resume, LinkedIn, Github, Email
pub const LINK_COUNT: usize = 4;

/// Entrance tracks of the wide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideTrack {
    Title,
    Description,
    Links,
    Headers,
}

/// Side-by-side layout: profile column on the left, accordion on the right.
#[derive(Debug, Clone)]
pub struct WideComposition {
    /// Experiences / Projects / Skills accordion
    sections: DisclosureController<Section>,
    /// Company tabs inside the experiences panel
    experience_tabs: DisclosureController<usize>,
    sequencer: AnimationSequencer<Section, WideTrack>,
}

impl WideComposition {
    pub fn new(experience_count: usize) -> Self {
        let sections = DisclosureController::new(Section::ALL, Some(Section::Experiences));
        let experience_tabs = DisclosureController::indexed(experience_count, Some(0));
        let sequencer = AnimationSequencer::new(sections.panels(), sections.expanded())
            .with_entrance(WideTrack::Title, EntranceSpec::sequential_reveal(), TITLE_LINES)
            .with_entrance(
                WideTrack::Description,
                EntranceSpec::fade_reveal()
                    .with_delay(Duration::from_millis(1200))
                    .with_duration(Duration::from_millis(500)),
                1,
            )
            .with_entrance(
                WideTrack::Links,
                EntranceSpec::fade_reveal()
                    .with_effect(EntranceEffect::SlideIn { offset_x: -80.0 })
                    .with_delay(Duration::from_millis(1500))
                    .with_duration(Duration::from_millis(200))
                    .with_stagger(Stagger::Each(Duration::from_millis(300)))
                    .with_easing(Easing::Power2InOut),
                LINK_COUNT,
            )
            .with_entrance(
                WideTrack::Headers,
                EntranceSpec::fade_reveal()
                    .with_effect(EntranceEffect::Pop)
                    .with_delay(Duration::from_millis(100))
                    .with_duration(Duration::from_millis(400))
                    .with_stagger(Stagger::Each(Duration::from_millis(200)))
                    .with_easing(Easing::EaseOutCubic),
                Section::ALL.len(),
            );

        Self { sections, experience_tabs, sequencer }
    }

    // ===== Queries =====

    pub fn sections(&self) -> &DisclosureController<Section> {
        &self.sections
    }

    pub fn experience_tabs(&self) -> &DisclosureController<usize> {
        &self.experience_tabs
    }

    pub fn sequencer(&self) -> &AnimationSequencer<Section, WideTrack> {
        &self.sequencer
    }

    pub fn active_experience(&self) -> Option<usize> {
        self.experience_tabs.expanded()
    }

    /// Stops of the moving indicator, one per company tab.
    pub fn indicator_slots(&self) -> usize {
        self.experience_tabs.panels().len().max(1)
    }

    /// Slot of the moving indicator under the experience tabs.
    pub fn indicator_slot(&self) -> usize {
        indicator_slot(self.active_experience(), self.indicator_slots())
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
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

    /// Activates a company tab. Tabs switch instantly; the outer accordion
    /// is untouched.
    pub fn select_experience(&mut self, index: usize) -> DisclosureTransition<usize> {
        self.experience_tabs.select(index)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.sequencer.advance(delta);
    }

    /// Jumps every animation to its final state.
    pub fn finish(&mut self) {
        self.sequencer.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let wide = WideComposition::new(3);
        assert_eq!(wide.sections().expanded(), Some(Section::Experiences));
        assert_eq!(wide.active_experience(), Some(0));
        assert_eq!(wide.sequencer().panel_openness(Section::Experiences), 1.0);
        assert!(!wide.is_animating());
    }

    #[test]
    fn test_tabs_do_not_touch_sections() {
        let mut wide = WideComposition::new(3);
        wide.select_experience(2);
        assert_eq!(wide.active_experience(), Some(2));
        assert_eq!(wide.indicator_slot(), 2);
        assert_eq!(wide.sections().expanded(), Some(Section::Experiences));
    }

    #[test]
    fn test_indicator_has_a_stop_per_tab() {
        let mut wide = WideComposition::new(5);
        assert_eq!(wide.indicator_slots(), 5);

        wide.select_experience(4);
        assert_eq!(wide.indicator_slot(), 4);
        wide.select_experience(3);
        assert_eq!(wide.indicator_slot(), 3);
    }

    #[test]
    fn test_entrance_plays_once() {
        let mut wide = WideComposition::new(1);
        assert!(wide.mount());
        assert!(wide.is_animating());
        wide.advance(Duration::from_secs(4));
        assert!(!wide.is_animating());
        assert!(!wide.mount());
        assert!(wide.sequencer().entrance_frame(WideTrack::Links, LINK_COUNT - 1).is_settled());
    }

    #[test]
    fn test_links_slide_in_from_left() {
        let mut wide = WideComposition::new(1);
        wide.mount();
        wide.advance(Duration::from_millis(1000));
        let frame = wide.sequencer().entrance_frame(WideTrack::Links, 0);
        assert_eq!(frame.offset.x, -80.0);
        assert_eq!(frame.opacity, 0.0);
    }
}
