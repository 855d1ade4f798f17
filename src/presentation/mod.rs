//! Presentation layer for visual styling.
//!
//! This module keeps palette lookups and motion application out of the
//! panel code:
//! - Color mapping for tabs, links and headings
//! - Applying sampled entrance frames to painted text

pub mod color_mapping;
pub mod motion;
