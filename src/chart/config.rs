use eframe::egui::{Vec2, vec2};

/// Tuning for one chart instance. Defaults reproduce the dblog bubble report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    /// Shared by the anchor pull and the charge of the repulsion force.
    pub force_strength: f32,
    pub velocity_decay: f32,
    pub alpha_min: f32,
    pub alpha_decay: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Initial positions are drawn from `[0, spawn_extent)`.
    pub spawn_extent: Vec2,
    pub entrance_secs: f32,
}

impl ChartConfig {
    pub fn canvas_size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        let alpha_min = 0.001_f32;
        Self {
            width: 1400.0,
            height: 750.0,
            force_strength: 0.03,
            velocity_decay: 0.2,
            alpha_min,
            alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
            min_radius: 2.0,
            max_radius: 85.0,
            spawn_extent: vec2(900.0, 800.0),
            entrance_secs: 1.0,
        }
    }
}
