use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};

use super::Chart;
use super::binder::BubbleElement;
use super::nodes::Node;

pub const PANEL_WIDTH: f32 = 240.0;
const PANEL_OFFSET: Vec2 = vec2(20.0, 10.0);

/// The four fields the hover panel shows. `message` is displayed verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverDetail {
    pub category: String,
    pub severity: String,
    pub value: f64,
    pub message: String,
}

impl HoverDetail {
    pub fn from_node(node: &Node) -> Self {
        Self {
            category: node.category.clone(),
            severity: node.severity.clone(),
            value: node.value,
            message: node.message.clone(),
        }
    }

    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Type", self.category.clone()),
            ("Severity", self.severity.clone()),
            ("Total", format_total(self.value)),
            ("Message", self.message.clone()),
        ]
    }
}

fn format_total(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Singleton floating panel, reused for whichever bubble is hovered.
#[derive(Default)]
pub struct DetailPanel {
    shown: Option<ShownDetail>,
}

struct ShownDetail {
    index: usize,
    detail: HoverDetail,
    pointer: Pos2,
}

impl DetailPanel {
    pub fn show(&mut self, index: usize, detail: HoverDetail, pointer: Pos2) {
        self.shown = Some(ShownDetail {
            index,
            detail,
            pointer,
        });
    }

    pub fn follow(&mut self, pointer: Pos2) {
        if let Some(shown) = self.shown.as_mut() {
            shown.pointer = pointer;
        }
    }

    pub fn hide(&mut self) {
        self.shown = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.shown.as_ref().map(|shown| shown.index)
    }

    pub fn content(&self) -> Option<&HoverDetail> {
        self.shown.as_ref().map(|shown| &shown.detail)
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.shown.as_ref().map(|shown| shown.pointer)
    }
}

/// Places the panel below-right of the pointer, flipping to the other side
/// on any axis where it would leave `bounds`.
pub fn panel_position(pointer: Pos2, size: Vec2, bounds: Rect) -> Pos2 {
    let mut x = pointer.x + PANEL_OFFSET.x;
    if x + size.x > bounds.right() {
        x = pointer.x - PANEL_OFFSET.x - size.x;
    }

    let mut y = pointer.y + PANEL_OFFSET.y;
    if y + size.y > bounds.bottom() {
        y = pointer.y - PANEL_OFFSET.y - size.y;
    }

    pos2(x.max(bounds.left()), y.max(bounds.top()))
}

/// Closest bubble whose disc contains `pointer`; all inputs in chart space.
pub fn hit_test(elements: &[BubbleElement], radii: &[f32], pointer: Vec2) -> Option<usize> {
    elements
        .iter()
        .zip(radii)
        .enumerate()
        .filter_map(|(index, (element, radius))| {
            let distance = (element.center - pointer).length();
            (distance <= *radius).then_some((index, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

impl Chart {
    pub fn on_hover(&mut self, index: usize, pointer: Pos2) {
        let Some(node) = self.simulation.nodes().get(index) else {
            return;
        };
        let detail = HoverDetail::from_node(node);
        self.binder.highlight(index);
        self.detail.show(index, detail, pointer);
    }

    pub fn on_unhover(&mut self, index: usize) {
        if let Some(node) = self.simulation.nodes().get(index) {
            self.binder.restore_stroke(index, &node.category);
        }
        self.detail.hide();
    }

    /// Dispatches hover transitions for the bubble currently under the pointer.
    pub fn update_hover(&mut self, hit: Option<usize>, pointer: Pos2) {
        if self.disposed {
            return;
        }

        match (self.detail.hovered(), hit) {
            (Some(current), Some(next)) if current == next => self.detail.follow(pointer),
            (current, next) => {
                if let Some(current) = current {
                    self.on_unhover(current);
                }
                if let Some(next) = next {
                    self.on_hover(next, pointer);
                }
            }
        }
    }
}
