//! Accordion header and body widgets shared by both layouts.

use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{pos2, vec2, Color32, CursorIcon, FontId, Painter, Pos2, Response, Sense, Shape, Stroke, Ui};
use rfolio::ElementFrame;
use std::f32::consts::FRAC_PI_2;

/// Draws a clickable accordion header.
///
/// `turn` rotates the chevron from pointing right (0) to pointing down (1);
/// `entrance` scales and fades the whole header in.
pub fn header(ui: &mut Ui, title: &str, color: Color32, font_size: f32, turn: f32, entrance: ElementFrame) -> Response {
    let height = font_size * 1.4;
    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::click());

    if entrance.opacity > 0.0 && ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let font = FontId::proportional((font_size * entrance.scale).max(1.0));
        let galley = painter.layout_no_wrap(title.to_string(), font, color);
        let text_pos = pos2(rect.left(), rect.center().y - galley.size().y / 2.0);
        painter.add(TextShape::new(text_pos, galley, color).with_opacity_factor(entrance.opacity));

        let chevron_center = pos2(rect.right() - height * 0.4, rect.center().y);
        paint_chevron(
            painter,
            chevron_center,
            font_size * 0.3 * entrance.scale,
            turn,
            color.gamma_multiply(entrance.opacity),
        );
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Draws the body of a panel while it is open or closing.
///
/// The body is laid out at its natural height, capped at `max_height`, and
/// only `openness` of that height is shown and allocated. The natural height
/// seen on the previous frame bounds the clip, so the reveal follows the
/// content rather than the cap.
pub fn body(ui: &mut Ui, id_salt: &str, openness: f32, max_height: f32, add_contents: impl FnOnce(&mut Ui)) {
    if openness <= 0.0 {
        return;
    }

    let height_id = ui.id().with(("accordion_body_height", id_salt));
    let last_height = ui.data(|d| d.get_temp::<f32>(height_id)).unwrap_or(0.0);

    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .id_salt(id_salt)
            .max_rect(ui.available_rect_before_wrap()),
    );
    child.multiply_opacity(openness);

    let visible = if openness >= 1.0 { f32::INFINITY } else { last_height * openness };
    let mut clip_rect = child.clip_rect();
    clip_rect.max.y = clip_rect.max.y.min(child.max_rect().top() + visible);
    child.set_clip_rect(clip_rect);

    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(&mut child, |ui| add_contents(ui));

    let natural = child.min_rect().height();
    ui.data_mut(|d| d.insert_temp(height_id, natural));
    ui.allocate_exact_size(vec2(child.min_rect().width(), natural * openness), Sense::hover());
}

fn paint_chevron(painter: &Painter, center: Pos2, radius: f32, turn: f32, color: Color32) {
    let rotation = Rot2::from_angle(turn.clamp(0.0, 1.0) * FRAC_PI_2);
    let points: Vec<Pos2> = [vec2(-0.6, -1.0), vec2(1.0, 0.0), vec2(-0.6, 1.0)]
        .into_iter()
        .map(|p| center + rotation * (p * radius))
        .collect();
    painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
}
