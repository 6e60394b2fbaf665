use eframe::egui::Color32;

use super::layout::CATEGORIES;

const CATEGORY_FILLS: [Color32; 6] = [
    Color32::from_rgb(0xee, 0x95, 0x86),
    Color32::from_rgb(0x9c, 0xaf, 0x84),
    Color32::from_rgb(0xe4, 0xb7, 0xb2),
    Color32::from_rgb(0xd8, 0x4b, 0x2a),
    Color32::from_rgb(0xbe, 0xcc, 0xae),
    Color32::from_rgb(0x7a, 0xa2, 0x5c),
];

pub const FALLBACK_FILL: Color32 = Color32::from_rgb(0x9e, 0x9e, 0x9e);
pub const HOVER_STROKE: Color32 = Color32::BLACK;

const DARKER_FACTOR: f32 = 0.7;

pub fn fill_color(category: &str) -> Color32 {
    CATEGORIES
        .iter()
        .position(|known| *known == category)
        .map(|index| CATEGORY_FILLS[index])
        .unwrap_or(FALLBACK_FILL)
}

pub fn darker(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * DARKER_FACTOR).round() as u8,
        (color.g() as f32 * DARKER_FACTOR).round() as u8,
        (color.b() as f32 * DARKER_FACTOR).round() as u8,
        color.a(),
    )
}

pub fn resting_stroke(category: &str) -> Color32 {
    darker(fill_color(category))
}
