use eframe::egui::{Color32, Vec2};

use super::layout::LayoutTargets;
use super::nodes::Node;
use super::palette::{HOVER_STROKE, fill_color, resting_stroke};

/// Visual state of one bubble, bound to the node at the same index.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleElement {
    pub center: Vec2,
    pub fill: Color32,
    pub stroke: Color32,
    pub target_radius: f32,
    entered_at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Category,
    Severity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionLabel {
    pub kind: LabelKind,
    pub text: &'static str,
    pub position: Vec2,
}

/// Keeps one element per node and the section titles of the active mode.
pub struct RenderBinder {
    elements: Vec<BubbleElement>,
    labels: Vec<SectionLabel>,
    entrance_secs: f32,
}

impl RenderBinder {
    pub fn new(entrance_secs: f32) -> Self {
        Self {
            elements: Vec::new(),
            labels: Vec::new(),
            entrance_secs,
        }
    }

    /// Enters an element for every node past the bound prefix. Already bound
    /// indices are left alone, so binding twice never duplicates.
    pub fn bind(&mut self, nodes: &[Node], now: f64) -> usize {
        let entering = nodes.len().saturating_sub(self.elements.len());
        for node in nodes.iter().skip(self.elements.len()) {
            let fill = fill_color(&node.category);
            self.elements.push(BubbleElement {
                center: node.position,
                fill,
                stroke: resting_stroke(&node.category),
                target_radius: node.radius,
                entered_at: now,
            });
        }
        entering
    }

    /// Per-tick write-back; only centers change.
    pub fn sync_positions(&mut self, nodes: &[Node]) {
        for (element, node) in self.elements.iter_mut().zip(nodes) {
            element.center = node.position;
        }
    }

    pub fn elements(&self) -> &[BubbleElement] {
        &self.elements
    }

    pub fn radius_at(&self, index: usize, now: f64) -> f32 {
        let Some(element) = self.elements.get(index) else {
            return 0.0;
        };
        if self.entrance_secs <= 0.0 {
            return element.target_radius;
        }

        let t = ((now - element.entered_at) / f64::from(self.entrance_secs)).clamp(0.0, 1.0);
        element.target_radius * ease_cubic_in_out(t as f32)
    }

    pub fn transitions_running(&self, now: f64) -> bool {
        let duration = f64::from(self.entrance_secs);
        self.elements
            .iter()
            .any(|element| now - element.entered_at < duration)
    }

    pub fn highlight(&mut self, index: usize) {
        if let Some(element) = self.elements.get_mut(index) {
            element.stroke = HOVER_STROKE;
        }
    }

    pub fn restore_stroke(&mut self, index: usize, category: &str) {
        if let Some(element) = self.elements.get_mut(index) {
            element.stroke = resting_stroke(category);
        }
    }

    pub fn labels(&self) -> &[SectionLabel] {
        &self.labels
    }

    pub fn has_labels(&self, kind: LabelKind) -> bool {
        self.labels.iter().any(|label| label.kind == kind)
    }

    pub fn show_labels(&mut self, kind: LabelKind, layout: &LayoutTargets) {
        if self.has_labels(kind) {
            return;
        }

        let anchors = match kind {
            LabelKind::Category => layout.category_anchors(),
            LabelKind::Severity => layout.severity_anchors(),
        };
        self.labels
            .extend(anchors.iter().map(|anchor| SectionLabel {
                kind,
                text: anchor.key,
                position: anchor.title,
            }));
    }

    pub fn remove_labels(&mut self, kind: LabelKind) {
        self.labels.retain(|label| label.kind != kind);
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn node(category: &str, radius: f32, position: Vec2) -> Node {
        Node {
            radius,
            value: f64::from(radius),
            category: category.to_owned(),
            severity: "Info".to_owned(),
            message: String::new(),
            position,
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn binding_twice_does_not_duplicate() {
        let nodes = vec![node("php", 30.0, vec2(1.0, 2.0)), node("cron", 5.0, vec2(3.0, 4.0))];
        let mut binder = RenderBinder::new(1.0);

        assert_eq!(binder.bind(&nodes, 0.0), 2);
        assert_eq!(binder.bind(&nodes, 0.5), 0);
        assert_eq!(binder.elements().len(), 2);
    }

    #[test]
    fn entrance_grows_from_zero_to_radius() {
        let nodes = vec![node("php", 40.0, Vec2::ZERO)];
        let mut binder = RenderBinder::new(1.0);
        binder.bind(&nodes, 2.0);

        assert_eq!(binder.radius_at(0, 2.0), 0.0);
        assert!((binder.radius_at(0, 2.5) - 20.0).abs() < 1e-4);
        assert_eq!(binder.radius_at(0, 3.0), 40.0);
        assert_eq!(binder.radius_at(0, 9.0), 40.0);
        assert!(binder.transitions_running(2.9));
        assert!(!binder.transitions_running(3.0));
        assert_eq!(binder.radius_at(7, 3.0), 0.0);
    }

    #[test]
    fn sync_writes_only_centers() {
        let mut nodes = vec![node("user", 12.0, vec2(0.0, 0.0))];
        let mut binder = RenderBinder::new(1.0);
        binder.bind(&nodes, 0.0);
        let before = binder.elements()[0].clone();

        nodes[0].position = vec2(50.0, 60.0);
        nodes[0].radius = 99.0;
        binder.sync_positions(&nodes);

        let after = &binder.elements()[0];
        assert_eq!(after.center, vec2(50.0, 60.0));
        assert_eq!(after.target_radius, before.target_radius);
        assert_eq!(after.fill, before.fill);
        assert_eq!(after.stroke, before.stroke);
    }

    #[test]
    fn hover_stroke_round_trips_through_category() {
        let nodes = vec![node("php", 12.0, Vec2::ZERO)];
        let mut binder = RenderBinder::new(1.0);
        binder.bind(&nodes, 0.0);
        let resting = binder.elements()[0].stroke;

        binder.highlight(0);
        assert_eq!(binder.elements()[0].stroke, HOVER_STROKE);
        binder.restore_stroke(0, "php");
        assert_eq!(binder.elements()[0].stroke, resting);
    }

    #[test]
    fn labels_are_created_once_and_removed_fully() {
        let layout = LayoutTargets::new(1400.0, 750.0);
        let mut binder = RenderBinder::new(1.0);

        binder.show_labels(LabelKind::Category, &layout);
        binder.show_labels(LabelKind::Category, &layout);
        assert_eq!(binder.labels().len(), 6);

        binder.show_labels(LabelKind::Severity, &layout);
        assert_eq!(binder.labels().len(), 14);

        binder.remove_labels(LabelKind::Category);
        assert!(!binder.has_labels(LabelKind::Category));
        assert_eq!(binder.labels().len(), 8);
    }
}
