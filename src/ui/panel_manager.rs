//! Panel orchestration and layout management.
//!
//! Lays out the header, footer and the page body, and collects every user
//! interaction of the frame for the application coordinator.

use crate::app::AppState;
use crate::ui::{footer, header, narrow_layout, wide_layout};
use rfolio::{ActiveLayout, Section};

/// User actions gathered while rendering, applied after the frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// An accordion header was clicked
    ToggleSection(Section),
    /// A company tab was clicked (wide layout)
    SelectExperience(usize),
    /// A job header was clicked (narrow layout)
    ToggleJob(usize),
    /// Cycle to the next built-in theme
    ToggleTheme,
    /// A theme was picked from the selector
    SetTheme(String),
    OpenLink(String),
    /// The resume link was clicked
    SaveResume,
    DismissNotice,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called once per frame from `eframe::App::update`; interactions are
    /// returned in the order they happened.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();
        let colors = *state.theme.get();

        let bar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(12, 6))
            .fill(colors.background);

        egui::TopBottomPanel::top("header")
            .frame(bar_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                header::render_header(ui, state, &mut interactions);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(bar_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                footer::render_footer(ui, state.content.profile(), &colors);
            });

        let page_frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(24, 8))
            .fill(colors.background);

        egui::CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| match &state.layout {
                    ActiveLayout::Wide(wide) => {
                        wide_layout::render_wide_layout(ui, &state.content, wide, &colors, &mut interactions)
                    }
                    ActiveLayout::Narrow(narrow) => {
                        narrow_layout::render_narrow_layout(ui, &state.content, narrow, &colors, &mut interactions)
                    }
                });
        });

        interactions
    }
}
