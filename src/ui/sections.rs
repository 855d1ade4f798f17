//! Experiences / Projects / Skills accordion shared by both layouts.

use eframe::egui;
use egui::{RichText, Ui};
use rfolio::{AnimationSequencer, Content, DisclosureController, ElementFrame, Section, ThemeDescriptor};
use std::fmt::Debug;
use crate::presentation::color_mapping::tab_color;
use crate::ui::accordion;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::project_cards::render_project_cards;

const SECTION_BODY_HEIGHT: f32 = 420.0;

/// Header styling for one layout.
pub struct SectionStyle {
    pub font_size: f32,
    pub body_height: f32,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self { font_size: 28.0, body_height: SECTION_BODY_HEIGHT }
    }
}

/// Renders the three section headers and whichever bodies are visible.
///
/// `header_frame(i)` gives the entrance frame of header `i`. The experiences
/// body is layout-specific and drawn by `experiences`.
#[allow(clippy::too_many_arguments)]
pub fn render_sections<Track>(
    ui: &mut Ui,
    content: &Content,
    sections: &DisclosureController<Section>,
    sequencer: &AnimationSequencer<Section, Track>,
    style: &SectionStyle,
    colors: &ThemeDescriptor,
    header_frame: impl Fn(usize) -> ElementFrame,
    interactions: &mut Vec<PanelInteraction>,
    mut experiences: impl FnMut(&mut Ui, &mut Vec<PanelInteraction>),
) where
    Track: Copy + Eq + Debug,
{
    for (index, section) in Section::ALL.into_iter().enumerate() {
        let color = tab_color(sections.is_expanded(section), colors);
        let response = accordion::header(
            ui,
            section.title(),
            color,
            style.font_size,
            sequencer.chevron_turn(section),
            header_frame(index),
        );
        if response.clicked() {
            interactions.push(PanelInteraction::ToggleSection(section));
        }

        if sequencer.is_panel_visible(section) {
            let openness = sequencer.panel_openness(section);
            accordion::body(ui, section.title(), openness, style.body_height, |ui| match section {
                Section::Experiences => experiences(ui, interactions),
                Section::Projects => render_project_cards(ui, content.projects(), colors, interactions),
                Section::Skills => render_skills(ui, &content.profile().skills, colors),
            });
        }
        ui.add_space(6.0);
    }
}

fn render_skills(ui: &mut Ui, skills: &[String], colors: &ThemeDescriptor) {
    if skills.is_empty() {
        ui.label(RichText::new("No skills listed").color(colors.sub_color));
        return;
    }
    for skill in skills {
        ui.label(RichText::new(format!("▹ {}", skill)).size(14.0).color(colors.text_color));
    }
}
