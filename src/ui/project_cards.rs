//! Project cards panel.

use eframe::egui;
use egui::{CursorIcon, RichText, Sense, Ui};
use rfolio::{ProjectRecord, ThemeDescriptor};
use crate::presentation::color_mapping::{card_fill, card_stroke};
use crate::ui::panel_manager::PanelInteraction;

/// Renders one card per project, in content order.
pub fn render_project_cards(
    ui: &mut Ui,
    projects: &[ProjectRecord],
    colors: &ThemeDescriptor,
    interactions: &mut Vec<PanelInteraction>,
) {
    if projects.is_empty() {
        ui.label(RichText::new("No projects yet").color(colors.sub_color));
        return;
    }

    for project in projects {
        // Hover is only known after layout, so the border lags one frame
        let hover_id = ui.id().with(("project_card", &project.title));
        let hovered = ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);

        let card = egui::Frame::NONE
            .fill(card_fill(colors))
            .stroke(card_stroke(colors, hovered))
            .corner_radius(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&project.title).size(16.0).strong().color(colors.main_color));
                ui.label(RichText::new(&project.description).size(13.0).color(colors.text_color));

                if !project.tags.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for tag in &project.tags {
                            ui.label(RichText::new(tag).size(11.0).monospace().color(colors.sub_color));
                        }
                    });
                }

                if let Some(link) = &project.link {
                    let response = ui
                        .add(egui::Label::new(RichText::new("View project ▸").size(12.0).color(colors.main_color)).sense(Sense::click()))
                        .on_hover_cursor(CursorIcon::PointingHand)
                        .on_hover_text(link);
                    if response.clicked() {
                        interactions.push(PanelInteraction::OpenLink(link.clone()));
                    }
                }
            });

        let hovered_now = card.response.hovered();
        if hovered_now != hovered {
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, hovered_now));
            ui.ctx().request_repaint();
        }
        ui.add_space(8.0);
    }
}
