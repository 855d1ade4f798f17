//! Color mapping for portfolio elements.
//!
//! Every color comes from the active [`ThemeDescriptor`]; nothing here
//! holds state.

use egui::{Color32, Stroke};
use rfolio::{with_alpha, ThemeDescriptor};

/// Text/border color of a tab or job header: main color when active,
/// sub color otherwise.
pub fn tab_color(active: bool, colors: &ThemeDescriptor) -> Color32 {
    if active {
        colors.main_color
    } else {
        colors.sub_color
    }
}

/// Border drawn around project cards.
pub fn card_stroke(colors: &ThemeDescriptor, hovered: bool) -> Stroke {
    let alpha = if hovered { 200 } else { 90 };
    Stroke::new(1.0, with_alpha(colors.sub_color, alpha))
}

/// Fill behind project cards.
pub fn card_fill(colors: &ThemeDescriptor) -> Color32 {
    with_alpha(colors.sub_color, 18)
}

/// Fill inside the photo badge.
pub fn badge_fill(colors: &ThemeDescriptor) -> Color32 {
    with_alpha(colors.main_color, 40)
}
