//! Single-column layout for narrow windows.
//!
//! Four items fade in one after another: photo, name, links, accordion.

use eframe::egui;
use egui::{RichText, Ui};
use rfolio::{Content, ElementFrame, NarrowComposition, NarrowTrack, ThemeDescriptor};
use crate::presentation::motion::faded;
use crate::ui::experience_menu::render_job_list;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::profile;
use crate::ui::sections::{render_sections, SectionStyle};

pub fn render_narrow_layout(
    ui: &mut Ui,
    content: &Content,
    narrow: &NarrowComposition,
    colors: &ThemeDescriptor,
    interactions: &mut Vec<PanelInteraction>,
) {
    let sequencer = narrow.sequencer();
    let column = |index| sequencer.entrance_frame(NarrowTrack::Column, index);

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        faded(ui, column(0), |ui| profile::photo_badge(ui, content.profile(), colors, 80.0));
        ui.add_space(12.0);

        faded(ui, column(1), |ui| {
            ui.label(RichText::new(&content.profile().name).size(28.0).strong().color(colors.main_color));
            ui.label(RichText::new(&content.profile().headline).size(14.0).color(colors.sub_color));
        });
        ui.add_space(12.0);

        faded(ui, column(2), |ui| {
            profile::link_bar(ui, content.profile(), colors, |_| ElementFrame::SETTLED, interactions);
        });
    });

    ui.add_space(20.0);
    faded(ui, column(3), |ui| {
        render_sections(
            ui,
            content,
            narrow.sections(),
            sequencer,
            &SectionStyle { font_size: 22.0, ..SectionStyle::default() },
            colors,
            |_| ElementFrame::SETTLED,
            interactions,
            |ui, interactions| render_job_list(ui, content.experiences(), narrow, colors, interactions),
        );
    });
}
