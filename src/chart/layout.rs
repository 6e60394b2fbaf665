use eframe::egui::{Vec2, vec2};

use crate::dblog::SEVERITY_LEVELS;

/// Known log types, in palette and title order.
pub const CATEGORIES: [&str; 6] = [
    "access denied",
    "cron",
    "page not found",
    "php",
    "system",
    "user",
];

const CATEGORY_CENTER_X: [f32; 6] = [220.0, 375.0, 600.0, 800.0, 1000.0, 1200.0];
const CATEGORY_TITLE_X: [f32; 6] = [75.0, 300.0, 600.0, 850.0, 1125.0, 1300.0];
const CATEGORY_TITLE_Y: f32 = 40.0;

// Indexed like `SEVERITY_LEVELS`.
const SEVERITY_CENTERS: [(f32, f32); 8] = [
    (250.0, 200.0),
    (500.0, 200.0),
    (800.0, 200.0),
    (1100.0, 200.0),
    (250.0, 500.0),
    (500.0, 500.0),
    (800.0, 500.0),
    (1100.0, 500.0),
];
const SEVERITY_TITLES: [(f32, f32); 8] = [
    (150.0, 40.0),
    (450.0, 40.0),
    (850.0, 40.0),
    (1200.0, 40.0),
    (150.0, 400.0),
    (450.0, 400.0),
    (850.0, 400.0),
    (1200.0, 400.0),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub key: &'static str,
    pub center: Vec2,
    pub title: Vec2,
}

/// Anchor points and section title positions for the split modes.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTargets {
    center: Vec2,
    categories: Vec<Anchor>,
    severities: Vec<Anchor>,
}

impl LayoutTargets {
    pub fn new(width: f32, height: f32) -> Self {
        let mid_y = height / 2.0;
        let categories = CATEGORIES
            .iter()
            .zip(CATEGORY_CENTER_X)
            .zip(CATEGORY_TITLE_X)
            .map(|((&key, center_x), title_x)| Anchor {
                key,
                center: vec2(center_x, mid_y),
                title: vec2(title_x, CATEGORY_TITLE_Y),
            })
            .collect();
        let severities = SEVERITY_LEVELS
            .iter()
            .zip(SEVERITY_CENTERS)
            .zip(SEVERITY_TITLES)
            .map(|((&key, (cx, cy)), (tx, ty))| Anchor {
                key,
                center: vec2(cx, cy),
                title: vec2(tx, ty),
            })
            .collect();

        Self {
            center: vec2(width / 2.0, mid_y),
            categories,
            severities,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn category_center(&self, category: &str) -> Vec2 {
        find(&self.categories, category).unwrap_or(self.center)
    }

    pub fn severity_center(&self, severity: &str) -> Vec2 {
        find(&self.severities, severity).unwrap_or(self.center)
    }

    pub fn category_anchors(&self) -> &[Anchor] {
        &self.categories
    }

    pub fn severity_anchors(&self) -> &[Anchor] {
        &self.severities
    }
}

fn find(anchors: &[Anchor], key: &str) -> Option<Vec2> {
    anchors
        .iter()
        .find(|anchor| anchor.key == key)
        .map(|anchor| anchor.center)
}
