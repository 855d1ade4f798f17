//! Profile header pieces: photo badge, greeting, description and link bar.

use eframe::egui;
use egui::{vec2, Align2, FontId, RichText, Sense, Stroke, Ui};
use rfolio::{ElementFrame, Profile, ThemeDescriptor};
use crate::presentation::color_mapping::badge_fill;
use crate::presentation::motion::{animated_text, faded, text_runs};
use crate::ui::panel_manager::PanelInteraction;

/// Link bar entries in display order.
pub fn link_items(profile: &Profile) -> [(&'static str, PanelInteraction); 4] {
    [
        ("Resume ⬇", PanelInteraction::SaveResume),
        ("LinkedIn ▸", PanelInteraction::OpenLink(profile.links.linkedin.clone())),
        ("Github ▸", PanelInteraction::OpenLink(profile.links.github.clone())),
        ("Email ▸", PanelInteraction::OpenLink(profile.links.email.clone())),
    ]
}

/// Round badge with the profile initials, standing in for the photo.
pub fn photo_badge(ui: &mut Ui, profile: &Profile, colors: &ThemeDescriptor, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::hover());
    let painter = ui.painter();
    let radius = diameter / 2.0 - 2.0;
    painter.circle(rect.center(), radius, badge_fill(colors), Stroke::new(4.0, colors.main_color));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &profile.photo_initials,
        FontId::proportional(diameter * 0.35),
        colors.text_color,
    );
}

/// Two-line greeting, each line rising into place with its own frame.
pub fn greeting(ui: &mut Ui, profile: &Profile, colors: &ThemeDescriptor, font_size: f32, frames: [ElementFrame; 2]) {
    let font = FontId::proportional(font_size);

    let first = text_runs(&[(profile.greeting.as_str(), colors.text_color)], &font);
    animated_text(ui, first, frames[0], Sense::hover(), true);

    let headline = format!("{} ", profile.headline);
    let second = text_runs(
        &[
            (headline.as_str(), colors.text_color),
            (profile.name.as_str(), colors.main_color),
            (".", colors.text_color),
            (" 👋", colors.text_color),
        ],
        &font,
    );
    animated_text(ui, second, frames[1], Sense::hover(), true);
}

/// Thin rule in the text color.
pub fn divider(ui: &mut Ui, colors: &ThemeDescriptor) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 2.0), Sense::hover());
    ui.painter().rect_filled(rect, 0.0, colors.text_color);
}

pub fn description(ui: &mut Ui, profile: &Profile, colors: &ThemeDescriptor, frame: ElementFrame) {
    faded(ui, frame, |ui| {
        ui.label(RichText::new(&profile.description).size(14.0).color(colors.sub_color));
    });
}

/// Horizontal link bar; `frame_for(i)` samples the entrance of link `i`.
pub fn link_bar(
    ui: &mut Ui,
    profile: &Profile,
    colors: &ThemeDescriptor,
    frame_for: impl Fn(usize) -> ElementFrame,
    interactions: &mut Vec<PanelInteraction>,
) {
    let font = FontId::proportional(14.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 28.0;
        for (index, (label, interaction)) in link_items(profile).into_iter().enumerate() {
            let job = text_runs(&[(label, colors.main_color)], &font);
            let response = animated_text(ui, job, frame_for(index), Sense::click(), false)
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                interactions.push(interaction);
            }
        }
    });
}
