use eframe::egui::{Vec2, vec2};
use rand::Rng;

use crate::dblog::RawRecord;

use super::config::ChartConfig;

/// Backing data for one bubble. Only the simulation moves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub radius: f32,
    pub value: f64,
    pub category: String,
    pub severity: String,
    pub message: String,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Square-root scale so bubble area tracks the record total.
#[derive(Clone, Copy, Debug)]
pub struct RadiusScale {
    domain_max: f64,
    min_radius: f32,
    max_radius: f32,
}

impl RadiusScale {
    pub fn new(domain_max: f64, min_radius: f32, max_radius: f32) -> Self {
        let domain_max = if domain_max.is_finite() {
            domain_max.max(0.0)
        } else {
            0.0
        };
        Self {
            domain_max,
            min_radius,
            max_radius: max_radius.max(min_radius),
        }
    }

    pub fn for_records(records: &[RawRecord], config: &ChartConfig) -> Self {
        let domain_max = records
            .iter()
            .map(|record| record.total)
            .filter(|total| total.is_finite())
            .fold(0.0_f64, f64::max);
        Self::new(domain_max, config.min_radius, config.max_radius)
    }

    pub fn radius(&self, value: f64) -> f32 {
        if self.domain_max <= 0.0 || !value.is_finite() || value <= 0.0 {
            return self.min_radius;
        }

        let t = (value / self.domain_max).clamp(0.0, 1.0).sqrt() as f32;
        (self.min_radius + t * (self.max_radius - self.min_radius))
            .clamp(self.min_radius, self.max_radius)
    }
}

pub fn create_nodes<R: Rng>(
    records: &[RawRecord],
    config: &ChartConfig,
    rng: &mut R,
) -> Vec<Node> {
    let scale = RadiusScale::for_records(records, config);

    let mut nodes = records
        .iter()
        .map(|record| {
            let value = if record.total.is_finite() {
                record.total.max(0.0)
            } else {
                0.0
            };
            Node {
                radius: scale.radius(value),
                value,
                category: record.category.clone(),
                severity: record.severity.clone(),
                message: record.message.clone(),
                position: spawn_point(config.spawn_extent, rng),
                velocity: Vec2::ZERO,
            }
        })
        .collect::<Vec<_>>();

    nodes.sort_by(|a, b| b.value.total_cmp(&a.value));
    nodes
}

fn spawn_point<R: Rng>(extent: Vec2, rng: &mut R) -> Vec2 {
    let unit_x: f32 = rng.gen_range(0.0..1.0);
    let unit_y: f32 = rng.gen_range(0.0..1.0);
    vec2(unit_x * extent.x.max(0.0), unit_y * extent.y.max(0.0))
}
