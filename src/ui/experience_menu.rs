//! Experience views: the wide layout's tab menu and the narrow layout's
//! per-job list.

use eframe::egui;
use egui::{vec2, CursorIcon, FontId, Rect, RichText, Sense, Ui};
use rfolio::{with_alpha, ElementFrame, ExperienceRecord, NarrowComposition, ThemeDescriptor, WideComposition};
use crate::presentation::color_mapping::tab_color;
use crate::ui::accordion;
use crate::ui::panel_manager::PanelInteraction;

const TAB_BORDER: f32 = 4.0;
const JOB_BODY_HEIGHT: f32 = 260.0;

/// Renders company tabs on the left and the active job's details on the right.
pub fn render_tab_menu(
    ui: &mut Ui,
    experiences: &[ExperienceRecord],
    wide: &WideComposition,
    colors: &ThemeDescriptor,
    interactions: &mut Vec<PanelInteraction>,
) {
    let tabs = wide.experience_tabs();
    let tab_width = (ui.available_width() / 3.0).max(120.0);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(tab_width);
            for &index in tabs.panels() {
                let Some(job) = experiences.get(index) else { continue };
                let active = tabs.is_expanded(index);
                if company_tab(ui, &job.company, active, tab_width, colors).clicked() {
                    interactions.push(PanelInteraction::SelectExperience(index));
                }
            }
            ui.add_space(8.0);
            indicator(ui, wide.indicator_slot(), wide.indicator_slots(), tab_width, colors);
        });

        ui.add_space(12.0);

        ui.vertical(|ui| {
            match wide.active_experience().and_then(|index| experiences.get(index)) {
                Some(job) => job_details(ui, job, colors),
                None => {
                    ui.label(RichText::new("Select a company").color(colors.sub_color));
                }
            }
        });
    });
}

/// Renders one collapsible entry per job.
pub fn render_job_list(
    ui: &mut Ui,
    experiences: &[ExperienceRecord],
    narrow: &NarrowComposition,
    colors: &ThemeDescriptor,
    interactions: &mut Vec<PanelInteraction>,
) {
    let jobs = narrow.jobs();
    for &index in jobs.panels() {
        let Some(job) = experiences.get(index) else { continue };
        let active = jobs.is_expanded(index);
        let openness = narrow.job_openness(index);
        let color = tab_color(active, colors);

        let response = accordion::header(ui, &job.company, color, 18.0, openness, ElementFrame::SETTLED);
        if response.clicked() {
            interactions.push(PanelInteraction::ToggleJob(index));
        }

        if narrow.is_job_visible(index) {
            accordion::body(ui, &format!("job_body_{}", index), openness, JOB_BODY_HEIGHT, |ui| {
                job_details(ui, job, colors);
            });
        }
        ui.add_space(4.0);
    }
}

fn company_tab(ui: &mut Ui, company: &str, active: bool, width: f32, colors: &ThemeDescriptor) -> egui::Response {
    let color = tab_color(active, colors);
    let painter = ui.painter().clone();
    let galley = painter.layout(company.to_string(), FontId::proportional(14.0), color, width - 24.0);
    let size = vec2(width, galley.size().y + 16.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    painter.rect_filled(Rect::from_min_size(rect.min, vec2(TAB_BORDER, rect.height())), 0.0, color);
    painter.galley(rect.min + vec2(TAB_BORDER + 12.0, 8.0), galley, color);

    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Bar under the tabs whose highlighted stop follows the active tab.
fn indicator(ui: &mut Ui, slot: usize, slots: usize, width: f32, colors: &ThemeDescriptor) {
    let (rect, _) = ui.allocate_exact_size(vec2(width, 3.0), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, with_alpha(colors.sub_color, 60));

    let stop_width = width / slots as f32;
    let stop = Rect::from_min_size(rect.min + vec2(stop_width * slot as f32, 0.0), vec2(stop_width, rect.height()));
    painter.rect_filled(stop, 0.0, colors.main_color);
}

fn job_details(ui: &mut Ui, job: &ExperienceRecord, colors: &ThemeDescriptor) {
    ui.label(RichText::new(&job.position).size(18.0).strong().color(colors.text_color));
    ui.label(RichText::new(&job.period).size(14.0).color(colors.main_color));
    ui.add_space(6.0);
    for detail in &job.details {
        ui.label(RichText::new(detail).size(12.0).color(colors.sub_color));
        ui.add_space(4.0);
    }
}
