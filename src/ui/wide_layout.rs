//! Side-by-side layout: profile on the left, section accordion on the right.

use eframe::egui;
use egui::Ui;
use rfolio::composition::TITLE_LINES;
use rfolio::{Content, ThemeDescriptor, WideComposition, WideTrack};
use crate::ui::experience_menu::render_tab_menu;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::profile;
use crate::ui::sections::{render_sections, SectionStyle};

pub fn render_wide_layout(
    ui: &mut Ui,
    content: &Content,
    wide: &WideComposition,
    colors: &ThemeDescriptor,
    interactions: &mut Vec<PanelInteraction>,
) {
    let sequencer = wide.sequencer();

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        left.add_space(40.0);
        profile::photo_badge(left, content.profile(), colors, 96.0);
        left.add_space(16.0);

        let mut title_frames = [sequencer.entrance_frame(WideTrack::Title, 0); TITLE_LINES];
        for (index, frame) in title_frames.iter_mut().enumerate() {
            *frame = sequencer.entrance_frame(WideTrack::Title, index);
        }
        profile::greeting(left, content.profile(), colors, 44.0, title_frames);

        left.add_space(12.0);
        profile::divider(left, colors);
        left.add_space(12.0);
        profile::description(left, content.profile(), colors, sequencer.entrance_frame(WideTrack::Description, 0));
        left.add_space(24.0);
        profile::link_bar(
            left,
            content.profile(),
            colors,
            |index| sequencer.entrance_frame(WideTrack::Links, index),
            interactions,
        );

        let right = &mut columns[1];
        right.add_space(40.0);
        render_sections(
            right,
            content,
            wide.sections(),
            sequencer,
            &SectionStyle::default(),
            colors,
            |index| sequencer.entrance_frame(WideTrack::Headers, index),
            interactions,
            |ui, interactions| render_tab_menu(ui, content.experiences(), wide, colors, interactions),
        );
    });
}
