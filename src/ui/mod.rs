//! UI panel rendering subsystem
//!
//! This module contains all rendering logic for the portfolio page:
//! - Header (theme selector, notices)
//! - Wide and narrow page layouts
//! - Profile pieces (photo badge, greeting, link bar)
//! - Section accordion with experiences, project cards and skills
//! - Footer
//! - Panel manager (panel orchestration and interaction collection)

pub mod accordion;
pub mod experience_menu;
pub mod footer;
pub mod header;
pub mod narrow_layout;
pub mod panel_manager;
pub mod profile;
pub mod project_cards;
pub mod sections;
pub mod wide_layout;
