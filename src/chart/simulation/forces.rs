use eframe::egui::Vec2;

use super::quadtree::QuadNode;

const DISTANCE_MIN_SQ: f32 = 1.0;
const JIGGLE: f32 = 1.0e-6;

#[derive(Clone, Copy, Debug)]
pub(super) struct RepulsionParams {
    pub(super) alpha: f32,
    pub(super) theta_sq: f32,
}

/// Velocity change pulling `position` toward `target` on both axes.
pub(super) fn anchor_pull(position: Vec2, target: Vec2, strength: f32, alpha: f32) -> Vec2 {
    (target - position) * (strength * alpha)
}

// Deterministic, antisymmetric nudge so coincident bodies separate.
fn jiggle(from: usize, to: usize) -> f32 {
    let low = from.min(to) as f32;
    let high = from.max(to) as f32;
    let phase = (low * 0.618_034 + high * 0.414_214).fract();
    let magnitude = JIGGLE * (0.5 + phase);
    if from < to { magnitude } else { -magnitude }
}

fn charge_impulse(mut delta: Vec2, charge: f32, alpha: f32, from: usize, to: usize) -> Vec2 {
    let mut distance_sq = delta.length_sq();
    if delta.x == 0.0 {
        delta.x = jiggle(from, to);
        distance_sq += delta.x * delta.x;
    }
    if delta.y == 0.0 {
        delta.y = jiggle(to, from);
        distance_sq += delta.y * delta.y;
    }
    if distance_sq < DISTANCE_MIN_SQ {
        distance_sq = (DISTANCE_MIN_SQ * distance_sq).sqrt();
    }
    delta * (charge * alpha / distance_sq)
}

/// Accumulates the many-body velocity change on body `index`.
///
/// Negative charges repel. Cells far enough away (side² < θ²·d²) act as a
/// single body at their center of charge.
pub(super) fn accumulate_repulsion_for_node(
    node: &QuadNode,
    index: usize,
    positions: &[Vec2],
    charges: &[f32],
    params: RepulsionParams,
    impulse: &mut Vec2,
) {
    if node.charge == 0.0 {
        return;
    }

    let point = positions[index];

    if node.is_leaf() {
        for &other_index in &node.indices {
            if other_index == index {
                continue;
            }
            *impulse += charge_impulse(
                positions[other_index] - point,
                charges[other_index],
                params.alpha,
                index,
                other_index,
            );
        }
        return;
    }

    let delta = node.center_of_charge - point;
    let distance_sq = delta.length_sq();
    let side = node.bounds.side_length();
    let can_approximate =
        !node.bounds.contains(point) && side * side < params.theta_sq * distance_sq;

    if can_approximate {
        *impulse += charge_impulse(delta, node.charge, params.alpha, index, usize::MAX);
        return;
    }

    for child in node.children.iter().flatten() {
        accumulate_repulsion_for_node(child, index, positions, charges, params, impulse);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    // Exact pairwise sum and the summed magnitude of its terms.
    fn exact_impulse(
        index: usize,
        positions: &[Vec2],
        charges: &[f32],
        alpha: f32,
    ) -> (Vec2, f32) {
        let mut total = Vec2::ZERO;
        let mut magnitude = 0.0;
        for other in 0..positions.len() {
            if other != index {
                let term = charge_impulse(
                    positions[other] - positions[index],
                    charges[other],
                    alpha,
                    index,
                    other,
                );
                total += term;
                magnitude += term.length();
            }
        }
        (total, magnitude)
    }

    #[test]
    fn anchor_pull_points_at_the_target() {
        let pull = anchor_pull(vec2(0.0, 10.0), vec2(100.0, 10.0), 0.03, 1.0);
        assert!((pull.x - 3.0).abs() < 1e-5);
        assert_eq!(pull.y, 0.0);
        assert_eq!(anchor_pull(vec2(5.0, 5.0), vec2(6.0, 6.0), 0.03, 0.0), Vec2::ZERO);
    }

    #[test]
    fn negative_charge_pushes_bodies_apart() {
        let positions = vec![vec2(0.0, 0.0), vec2(10.0, 0.0)];
        let charges = vec![-5.0, -5.0];
        let tree = QuadNode::build(&positions, &charges).expect("tree");
        let params = RepulsionParams {
            alpha: 1.0,
            theta_sq: 0.81,
        };

        let mut left = Vec2::ZERO;
        accumulate_repulsion_for_node(&tree, 0, &positions, &charges, params, &mut left);
        let mut right = Vec2::ZERO;
        accumulate_repulsion_for_node(&tree, 1, &positions, &charges, params, &mut right);

        assert!(left.x < 0.0);
        assert!(right.x > 0.0);
        assert!((left.x + right.x).abs() < 1e-6);
    }

    #[test]
    fn coincident_bodies_get_finite_opposite_impulses() {
        let positions = vec![vec2(4.0, 4.0), vec2(4.0, 4.0)];
        let charges = vec![-10.0, -10.0];
        let tree = QuadNode::build(&positions, &charges).expect("tree");
        let params = RepulsionParams {
            alpha: 1.0,
            theta_sq: 0.81,
        };

        let mut first = Vec2::ZERO;
        accumulate_repulsion_for_node(&tree, 0, &positions, &charges, params, &mut first);
        let mut second = Vec2::ZERO;
        accumulate_repulsion_for_node(&tree, 1, &positions, &charges, params, &mut second);

        assert!(first.x.is_finite() && first.y.is_finite());
        assert!(second.x.is_finite() && second.y.is_finite());
        assert!(first.x * second.x < 0.0);
    }

    #[test]
    fn approximation_stays_close_to_the_exact_sum() {
        let positions = (0..200)
            .map(|index| {
                let angle = index as f32 * 0.37;
                vec2(angle.cos() * (20.0 + index as f32 * 3.0), angle.sin() * 300.0)
            })
            .collect::<Vec<_>>();
        let charges = (0..200)
            .map(|index| -(1.0 + (index % 7) as f32))
            .collect::<Vec<_>>();
        let tree = QuadNode::build(&positions, &charges).expect("tree");
        let params = RepulsionParams {
            alpha: 1.0,
            theta_sq: 0.81,
        };

        for index in [0, 57, 199] {
            let mut approximate = Vec2::ZERO;
            accumulate_repulsion_for_node(
                &tree,
                index,
                &positions,
                &charges,
                params,
                &mut approximate,
            );
            let (exact, magnitude) = exact_impulse(index, &positions, &charges, 1.0);
            let error = (approximate - exact).length();
            assert!(error <= magnitude * 0.2, "index {index}: {error} of {magnitude}");
        }
    }
}
