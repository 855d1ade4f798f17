//! Header bar rendering
//!
//! Theme selector and quick toggle on the right, the owner's name on the left,
//! and a dismissible notice line underneath when one is pending.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Label shown in the selector when the active colors match no built-in theme
const CUSTOM_THEME_LABEL: &str = "Custom";

pub fn render_header(ui: &mut egui::Ui, state: &AppState, interactions: &mut Vec<PanelInteraction>) {
    let colors = *state.theme.get();

    ui.horizontal(|ui| {
        ui.label(RichText::new(&state.content.profile().name).strong().color(colors.main_color));

        // Push theme controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("◐")
                .on_hover_text("Cycle to the next theme")
                .clicked()
            {
                interactions.push(PanelInteraction::ToggleTheme);
            }

            let current = state.theme.current_name().unwrap_or(CUSTOM_THEME_LABEL);
            let mut selected = current.to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut selected, theme_name.to_string(), theme_name);
                    }
                });

            if selected != current {
                interactions.push(PanelInteraction::SetTheme(selected));
            }

            ui.label("Theme:");
        });
    });

    if let Some(notice) = &state.notice {
        ui.horizontal(|ui| {
            ui.colored_label(colors.sub_color, notice);
            if ui.small_button("✕").clicked() {
                interactions.push(PanelInteraction::DismissNotice);
            }
        });
    }
}
