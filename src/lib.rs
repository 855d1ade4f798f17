pub mod theme;
pub mod theme_store;
pub mod content;
pub mod disclosure;
pub mod animation;
pub mod layout;
pub mod composition;
pub mod config;

// Export theme support
pub use theme::{Theme, ThemeDescriptor, ThemeManager, ThemeError, hex_to_color32, color32_to_hex, with_alpha};
pub use theme_store::ThemeStore;

// Export bundled content
pub use content::{Content, ContentError, ExperienceRecord, ProjectRecord, Profile, ProfileLinks};

// Export view-state core
pub use disclosure::{DisclosureController, DisclosureTransition, indicator_slot};
pub use animation::{
    AnimationSequencer, EffectTimer, Easing, ElementFrame,
    EntranceEffect, EntranceSpec, EntranceTimeline, PanelTransitions, TransitionSpec
};
pub use layout::{LayoutSelector, ViewportClass, DEFAULT_BREAKPOINT};
pub use composition::{ActiveLayout, Section, WideComposition, WideTrack, NarrowComposition, NarrowTrack};

// Export launch configuration
pub use config::LaunchConfig;
