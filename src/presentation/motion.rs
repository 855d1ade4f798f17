//! Applies sampled animation frames to painted widgets.

use eframe::egui;
use egui::epaint::TextShape;
use egui::text::LayoutJob;
use egui::{vec2, Color32, FontId, Galley, Rect, Response, Sense, TextFormat, Ui};
use rfolio::ElementFrame;
use std::sync::Arc;

/// Builds a single-line layout job from `(text, color)` runs.
pub fn text_runs(runs: &[(&str, Color32)], font: &FontId) -> LayoutJob {
    let mut job = LayoutJob::default();
    for (text, color) in runs {
        job.append(text, 0.0, TextFormat::simple(font.clone(), *color));
    }
    job
}

/// Paints `job` with `frame` applied.
///
/// The allocated box always has the settled size, so layout does not shift
/// while the element moves. With `clip` set the text is clipped to that box,
/// which makes a rising line appear from behind its own baseline.
pub fn animated_text(ui: &mut Ui, job: LayoutJob, frame: ElementFrame, sense: Sense, clip: bool) -> Response {
    let mut galley = ui.painter().layout_job(job);
    let size = vec2(galley.size().x, galley.size().y * 1.15);
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if frame.opacity > 0.0 && ui.is_rect_visible(rect) {
        let painter = if clip {
            ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()))
        } else {
            ui.painter().clone()
        };
        skew_galley(&mut galley, frame.skew_deg);
        let shape = TextShape::new(rect.left_top() + frame.offset, galley, ui.visuals().text_color())
            .with_opacity_factor(frame.opacity);
        painter.add(shape);
    }

    response
}

/// Shears the glyph meshes vertically about the galley's horizontal center.
fn skew_galley(galley: &mut Arc<Galley>, skew_deg: f32) {
    if skew_deg == 0.0 {
        return;
    }
    let slope = skew_deg.to_radians().tan();
    let galley = Arc::make_mut(galley);
    let center_x = galley.rect.center().x;

    let mut bounds = Rect::NOTHING;
    for placed in &mut galley.rows {
        let row_pos = placed.pos;
        let row = Arc::make_mut(&mut placed.row);
        for vertex in &mut row.visuals.mesh.vertices {
            vertex.pos.y += (row_pos.x + vertex.pos.x - center_x) * slope;
        }
        row.visuals.mesh_bounds = row.visuals.mesh.calc_bounds();
        bounds = bounds.union(row.visuals.mesh_bounds.translate(row_pos.to_vec2()));
    }
    galley.mesh_bounds = bounds;
}

/// Runs `add_contents` with the frame's opacity applied.
pub fn faded<R>(ui: &mut Ui, frame: ElementFrame, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.scope(|ui| {
        ui.multiply_opacity(frame.opacity);
        add_contents(ui)
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_galley(text: &str, check: impl FnOnce(Arc<Galley>)) {
        let ctx = egui::Context::default();
        let mut check = Some(check);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let galley = ui.painter().layout_no_wrap(text.to_string(), FontId::proportional(20.0), Color32::WHITE);
                if let Some(check) = check.take() {
                    check(galley);
                }
            });
        });
    }

    fn row_vertices(galley: &Galley) -> Vec<egui::Pos2> {
        galley.rows[0].visuals.mesh.vertices.iter().map(|v| v.pos).collect()
    }

    #[test]
    fn test_zero_skew_leaves_galley_untouched() {
        with_galley("Engineer", |galley| {
            let mut skewed = galley.clone();
            skew_galley(&mut skewed, 0.0);
            assert!(Arc::ptr_eq(&galley, &skewed));
        });
    }

    #[test]
    fn test_skew_shears_vertices_about_center() {
        with_galley("Engineer", |galley| {
            let before = row_vertices(&galley);
            let mut skewed = galley.clone();
            skew_galley(&mut skewed, 7.0);
            let after = row_vertices(&skewed);

            let slope = 7.0_f32.to_radians().tan();
            let center_x = galley.rect.center().x;
            let row_x = galley.rows[0].pos.x;
            assert_eq!(before.len(), after.len());
            assert!(!after.is_empty());
            for (old, new) in before.iter().zip(&after) {
                assert_eq!(old.x, new.x);
                let expected = old.y + (row_x + old.x - center_x) * slope;
                assert!((new.y - expected).abs() < 1e-3);
            }

            // The right edge drops, so the sheared bounds are taller
            assert!(skewed.mesh_bounds.height() > galley.mesh_bounds.height());
            // The original galley is shared and must not change
            assert_eq!(row_vertices(&galley), before);
        });
    }
}
