//! Theme persistence and application to egui.

use crate::app::{AppState, SettingsCoordinator};
use rfolio::{ThemeDescriptor, ThemeStore};

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored colors, if any.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> Option<ThemeDescriptor> {
        SettingsCoordinator::try_load_setting(storage, THEME_KEY)
    }

    /// Saves the current colors as the preference for the next launch.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: &ThemeStore) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, theme.get());
    }

    /// Pushes the current theme into egui visuals when it changed.
    ///
    /// Returns true if the visuals were replaced.
    pub fn apply_current_theme(ctx: &egui::Context, state: &mut AppState) -> bool {
        let revision = state.theme.revision();
        if state.applied_theme_revision == Some(revision) {
            return false;
        }

        let colors = state.theme.get();
        let mut visuals = if colors.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        state.theme.theme_manager().apply_theme(colors, &mut visuals);
        ctx.set_visuals(visuals);

        state.applied_theme_revision = Some(revision);
        tracing::debug!(revision, "applied theme visuals");
        true
    }
}
