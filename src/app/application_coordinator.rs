//! Application-level coordination and workflow management.
//!
//! Keeps the active layout in step with the window size, drives animation
//! time, and applies the interactions collected while rendering.

use crate::app::AppState;
use crate::io;
use crate::ui::panel_manager::PanelInteraction;
use rfolio::ActiveLayout;
use std::time::Duration;

/// Longest frame step fed to the animations, in seconds
const MAX_FRAME_STEP: f32 = 0.1;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Re-classifies the viewport and swaps compositions on a class change.
    ///
    /// Returns true if the layout was rebuilt.
    pub fn sync_viewport(ctx: &egui::Context, state: &mut AppState) -> bool {
        let width = ctx.content_rect().width();
        let class = state.selector.classify(width);
        state.layout.reconcile(class, &state.content)
    }

    /// Mounts the layout on its first frame and advances its animations.
    ///
    /// Requests another frame while anything is still moving.
    pub fn tick(ctx: &egui::Context, state: &mut AppState) {
        if state.layout.mount() {
            tracing::debug!(layout = %state.layout.class(), "layout mounted");
        }

        if state.reduce_motion {
            state.layout.finish();
            return;
        }

        let step = ctx.input(|i| i.stable_dt).clamp(0.0, MAX_FRAME_STEP);
        state.layout.advance(Duration::from_secs_f32(step));

        if state.layout.is_animating() {
            ctx.request_repaint();
        }
    }

    /// Applies one interaction collected during rendering.
    pub fn handle_interaction(ctx: &egui::Context, state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ToggleSection(section) => {
                state.layout.toggle_section(section);
            }
            PanelInteraction::SelectExperience(index) => {
                if let ActiveLayout::Wide(wide) = &mut state.layout {
                    wide.select_experience(index);
                }
            }
            PanelInteraction::ToggleJob(index) => {
                if let ActiveLayout::Narrow(narrow) = &mut state.layout {
                    narrow.toggle_job(index);
                }
            }
            PanelInteraction::ToggleTheme => state.theme.toggle(),
            PanelInteraction::SetTheme(name) => {
                if let Err(err) = state.theme.set_named(&name) {
                    tracing::warn!(error = %err, "theme selection rejected");
                    state.set_notice(err.to_string());
                }
            }
            PanelInteraction::OpenLink(url) => {
                tracing::info!(%url, "opening link");
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            PanelInteraction::SaveResume => {
                let file_name = state.content.profile().resume_file_name.clone();
                match io::save_resume(&file_name) {
                    Ok(Some(path)) => {
                        ctx.open_url(egui::OpenUrl::new_tab(io::file_url(&path)));
                        state.set_notice(format!("Resume saved to {}", path.display()));
                    }
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "resume export failed");
                        state.set_notice(format!("Error saving resume: {:#}", err));
                    }
                }
            }
            PanelInteraction::DismissNotice => state.notice = None,
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfolio::{Content, LayoutSelector, Section, ThemeStore, ViewportClass};

    fn state(class: ViewportClass) -> AppState {
        AppState::new(
            ThemeStore::new(),
            Content::bundled().unwrap(),
            LayoutSelector::forced(class),
            class,
        )
    }

    #[test]
    fn test_forced_layout_survives_sync() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Narrow);

        assert!(!ApplicationCoordinator::sync_viewport(&ctx, &mut state));
        assert_eq!(state.layout.class(), ViewportClass::Narrow);
    }

    #[test]
    fn test_class_change_rebuilds_layout() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Wide);
        state.selector = LayoutSelector::forced(ViewportClass::Narrow);

        assert!(ApplicationCoordinator::sync_viewport(&ctx, &mut state));
        assert_eq!(state.layout.class(), ViewportClass::Narrow);
        assert_eq!(state.layout.expanded_section(), None);
    }

    #[test]
    fn test_section_toggle_interaction() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Wide);
        assert_eq!(state.layout.expanded_section(), Some(Section::Experiences));

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::ToggleSection(Section::Skills));
        assert_eq!(state.layout.expanded_section(), Some(Section::Skills));

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::ToggleSection(Section::Skills));
        assert_eq!(state.layout.expanded_section(), None);
    }

    #[test]
    fn test_layout_specific_interactions_are_ignored_elsewhere() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Narrow);

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::SelectExperience(2));
        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::ToggleJob(1));

        match &state.layout {
            ActiveLayout::Narrow(narrow) => assert_eq!(narrow.jobs().expanded(), Some(1)),
            ActiveLayout::Wide(_) => panic!("layout should stay narrow"),
        }
    }

    #[test]
    fn test_theme_interactions() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Wide);

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::SetTheme("Nord".into()));
        assert_eq!(state.theme.current_name(), Some("Nord"));

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::SetTheme("Solarized".into()));
        assert_eq!(state.theme.current_name(), Some("Nord"));
        assert!(state.notice.is_some());

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::DismissNotice);
        assert!(state.notice.is_none());

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::ToggleTheme);
        assert_eq!(state.theme.current_name(), Some("Serika"));
    }

    #[test]
    fn test_tick_mounts_and_keeps_animating() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Wide);

        ApplicationCoordinator::tick(&ctx, &mut state);
        assert!(state.layout.is_animating());
        assert!(!state.layout.mount());
    }

    #[test]
    fn test_reduce_motion_settles_immediately() {
        let ctx = egui::Context::default();
        let mut state = state(ViewportClass::Wide);
        state.reduce_motion = true;

        ApplicationCoordinator::tick(&ctx, &mut state);
        assert!(!state.layout.is_animating());

        ApplicationCoordinator::handle_interaction(&ctx, &mut state, PanelInteraction::ToggleSection(Section::Projects));
        ApplicationCoordinator::tick(&ctx, &mut state);
        assert!(!state.layout.is_animating());
        assert_eq!(state.layout.expanded_section(), Some(Section::Projects));
    }
}
