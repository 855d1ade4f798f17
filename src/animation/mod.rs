//! Animation sequencing for entrance and disclosure effects.
//!
//! The playback engine here is deliberately small: every effect is a timer
//! advanced by the frame delta and sampled through an easing curve. The GUI
//! applies the sampled values to widgets; nothing in this module draws.
//!
//! - `timer` - elapsed/duration bookkeeping
//! - `easing` - easing curves (power, cubic-bezier)
//! - `entrance` - one-shot, staggered entrance timelines
//! - `transition` - per-panel expand/collapse motion
//! - `sequencer` - binds the above to mount and disclosure signals

mod timer;
mod easing;
mod entrance;
mod transition;
mod sequencer;

pub use timer::{EffectTimer, normalized_progress};
pub use easing::Easing;
pub use entrance::{ElementFrame, EntranceEffect, EntranceSpec, EntranceTimeline, Stagger};
pub use transition::{PanelTransitions, TransitionSpec};
pub use sequencer::AnimationSequencer;
