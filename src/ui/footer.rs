//! Footer line.

use eframe::egui;
use egui::{RichText, Ui};
use rfolio::{Profile, ThemeDescriptor};

pub fn render_footer(ui: &mut Ui, profile: &Profile, colors: &ThemeDescriptor) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("Designed & built by {} · made with egui", profile.name))
                .size(11.0)
                .color(colors.main_color),
        );
    });
}
