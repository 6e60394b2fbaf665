use eframe::egui::{Vec2, vec2};

use super::super::layout::LayoutTargets;
use super::super::nodes::Node;

/// Where the anchor force pulls each node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorMode {
    /// Everything toward the canvas center.
    #[default]
    Grouped,
    /// x from the node's category column, y at mid-height.
    SplitByType,
    /// Both axes from the node's severity cell.
    SplitBySeverity,
}

impl AnchorMode {
    pub fn target(self, node: &Node, layout: &LayoutTargets) -> Vec2 {
        match self {
            Self::Grouped => grouped_target(layout),
            Self::SplitByType => type_target(node, layout),
            Self::SplitBySeverity => severity_target(node, layout),
        }
    }
}

fn grouped_target(layout: &LayoutTargets) -> Vec2 {
    layout.center()
}

fn type_target(node: &Node, layout: &LayoutTargets) -> Vec2 {
    vec2(layout.category_center(&node.category).x, layout.center().y)
}

fn severity_target(node: &Node, layout: &LayoutTargets) -> Vec2 {
    layout.severity_center(&node.severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(category: &str, severity: &str) -> Node {
        Node {
            radius: 10.0,
            value: 1.0,
            category: category.to_owned(),
            severity: severity.to_owned(),
            message: String::new(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn each_mode_resolves_its_own_table() {
        let layout = LayoutTargets::new(1400.0, 750.0);
        let php = node("php", "Error");

        assert_eq!(AnchorMode::Grouped.target(&php, &layout), vec2(700.0, 375.0));
        assert_eq!(AnchorMode::SplitByType.target(&php, &layout), vec2(800.0, 375.0));
        assert_eq!(
            AnchorMode::SplitBySeverity.target(&php, &layout),
            vec2(1100.0, 200.0)
        );
    }

    #[test]
    fn unknown_labels_resolve_to_center() {
        let layout = LayoutTargets::new(1400.0, 750.0);
        let stray = node("mail", "Fatal");
        for mode in [
            AnchorMode::Grouped,
            AnchorMode::SplitByType,
            AnchorMode::SplitBySeverity,
        ] {
            assert_eq!(mode.target(&stray, &layout), layout.center());
        }
    }
}
