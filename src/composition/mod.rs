//! Layout compositions and the switch between them.
//!
//! Each composition owns its own disclosure controllers and animation
//! sequencer. Switching viewport class throws the outgoing composition
//! away and builds the incoming one from scratch; no state is carried
//! across.

mod wide;
mod narrow;

pub use wide::{WideComposition, WideTrack, LINK_COUNT, TITLE_LINES};
pub use narrow::{NarrowComposition, NarrowTrack, COLUMN_ITEMS};

use crate::content::Content;
use crate::disclosure::DisclosureTransition;
use crate::layout::ViewportClass;
use std::time::Duration;

/// Top-level accordion panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experiences,
    Projects,
    Skills,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Experiences, Section::Projects, Section::Skills];

    pub fn title(self) -> &'static str {
        match self {
            Section::Experiences => "EXPERIENCES",
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
        }
    }
}

/// The one composition currently on screen.
#[derive(Debug, Clone)]
pub enum ActiveLayout {
    Wide(WideComposition),
    Narrow(NarrowComposition),
}

impl ActiveLayout {
    /// Builds fresh composition state for `class`.
    pub fn build(class: ViewportClass, content: &Content) -> Self {
        let experience_count = content.experiences().len();
        match class {
            ViewportClass::Wide => ActiveLayout::Wide(WideComposition::new(experience_count)),
            ViewportClass::Narrow => ActiveLayout::Narrow(NarrowComposition::new(experience_count)),
        }
    }

    pub fn class(&self) -> ViewportClass {
        match self {
            ActiveLayout::Wide(_) => ViewportClass::Wide,
            ActiveLayout::Narrow(_) => ViewportClass::Narrow,
        }
    }

    /// Swaps in a fresh composition if `class` differs from the current one.
    ///
    /// Returns true if a switch happened.
    pub fn reconcile(&mut self, class: ViewportClass, content: &Content) -> bool {
        if self.class() == class {
            return false;
        }
        tracing::info!(from = %self.class(), to = %class, "switching layout");
        *self = Self::build(class, content);
        true
    }

    /// Signals the first mount of the composition.
    pub fn mount(&mut self) -> bool {
        match self {
            ActiveLayout::Wide(wide) => wide.mount(),
            ActiveLayout::Narrow(narrow) => narrow.mount(),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        match self {
            ActiveLayout::Wide(wide) => wide.advance(delta),
            ActiveLayout::Narrow(narrow) => narrow.advance(delta),
        }
    }

    /// Skips all running and pending animations.
    pub fn finish(&mut self) {
        match self {
            ActiveLayout::Wide(wide) => wide.finish(),
            ActiveLayout::Narrow(narrow) => narrow.finish(),
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            ActiveLayout::Wide(wide) => wide.is_animating(),
            ActiveLayout::Narrow(narrow) => narrow.is_animating(),
        }
    }

    pub fn toggle_section(&mut self, section: Section) -> DisclosureTransition<Section> {
        match self {
            ActiveLayout::Wide(wide) => wide.toggle_section(section),
            ActiveLayout::Narrow(narrow) => narrow.toggle_section(section),
        }
    }

    pub fn expanded_section(&self) -> Option<Section> {
        match self {
            ActiveLayout::Wide(wide) => wide.sections().expanded(),
            ActiveLayout::Narrow(narrow) => narrow.sections().expanded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_same_class_keeps_state() {
        let content = Content::bundled().unwrap();
        let mut layout = ActiveLayout::build(ViewportClass::Wide, &content);
        layout.toggle_section(Section::Skills);
        assert!(!layout.reconcile(ViewportClass::Wide, &content));
        assert_eq!(layout.expanded_section(), Some(Section::Skills));
    }

    #[test]
    fn test_reconcile_switch_rebuilds() {
        let content = Content::bundled().unwrap();
        let mut layout = ActiveLayout::build(ViewportClass::Wide, &content);
        layout.mount();
        layout.toggle_section(Section::Projects);

        assert!(layout.reconcile(ViewportClass::Narrow, &content));
        assert_eq!(layout.class(), ViewportClass::Narrow);
        assert_eq!(layout.expanded_section(), None);
        // Fresh composition has not been mounted yet
        assert!(layout.mount());
    }

    #[test]
    fn test_finish_settles_everything() {
        let content = Content::bundled().unwrap();
        let mut layout = ActiveLayout::build(ViewportClass::Wide, &content);
        layout.mount();
        layout.toggle_section(Section::Skills);
        assert!(layout.is_animating());

        layout.finish();
        assert!(!layout.is_animating());
        assert_eq!(layout.expanded_section(), Some(Section::Skills));
        match &layout {
            ActiveLayout::Wide(wide) => {
                assert_eq!(wide.sequencer().panel_openness(Section::Skills), 1.0);
                assert_eq!(wide.sequencer().panel_openness(Section::Experiences), 0.0);
            }
            ActiveLayout::Narrow(_) => panic!("expected the wide layout"),
        }
    }

    #[test]
    fn test_section_titles() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["EXPERIENCES", "PROJECTS", "SKILLS"]);
    }
}
