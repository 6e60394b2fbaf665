mod anchor;
mod forces;
mod quadtree;

use eframe::egui::Vec2;

use super::config::ChartConfig;
use super::layout::LayoutTargets;
use super::nodes::Node;
pub use anchor::AnchorMode;
use forces::{RepulsionParams, accumulate_repulsion_for_node, anchor_pull};
use quadtree::QuadNode;

const BARNES_HUT_THETA_SQ: f32 = 0.81;

/// Length of one nominal tick; `step` normalizes frame deltas against it.
pub const TICK_SECONDS: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Alpha decayed below its floor; `restart` resumes.
    Idle,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Advanced { alpha: f32 },
    Idle,
}

struct Scratch {
    impulses: Vec<Vec2>,
    positions: Vec<Vec2>,
    charges: Vec<f32>,
}

/// Owns the node positions and advances them with an anchor pull and a
/// Barnes-Hut many-body repulsion, cooling an alpha scalar on every tick.
pub struct Simulation {
    nodes: Vec<Node>,
    layout: LayoutTargets,
    anchor: AnchorMode,
    strength: f32,
    velocity_decay: f32,
    alpha: f32,
    alpha_min: f32,
    alpha_decay: f32,
    alpha_target: f32,
    state: RunState,
    scratch: Scratch,
}

impl Simulation {
    pub fn new(nodes: Vec<Node>, layout: LayoutTargets, config: &ChartConfig) -> Self {
        Self {
            nodes,
            layout,
            anchor: AnchorMode::default(),
            strength: config.force_strength,
            velocity_decay: config.velocity_decay.clamp(0.0, 1.0),
            alpha: 1.0,
            alpha_min: config.alpha_min,
            alpha_decay: config.alpha_decay.clamp(0.0, 1.0),
            alpha_target: 0.0,
            state: RunState::Running,
            scratch: Scratch {
                impulses: Vec::new(),
                positions: Vec::new(),
                charges: Vec::new(),
            },
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn layout(&self) -> &LayoutTargets {
        &self.layout
    }

    pub fn anchor(&self) -> AnchorMode {
        self.anchor
    }

    /// Swaps the anchor targets without touching positions or velocities.
    pub fn set_anchor(&mut self, anchor: AnchorMode) {
        self.anchor = anchor;
    }

    pub fn target_for(&self, index: usize) -> Option<Vec2> {
        self.nodes
            .get(index)
            .map(|node| self.anchor.target(node, &self.layout))
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn restart(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
        self.state = RunState::Running;
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.nodes
            .iter()
            .map(|node| f64::from(node.velocity.length_sq()))
            .sum()
    }

    /// Advances one frame. `delta_seconds` is measured in [`TICK_SECONDS`]
    /// units and clamped to `[0.25, 3.0]` ticks.
    pub fn step(&mut self, delta_seconds: f32) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Idle;
        }

        let tick_scale = if delta_seconds.is_finite() {
            (delta_seconds / TICK_SECONDS).clamp(0.25, 3.0)
        } else {
            1.0
        };
        let decay = 1.0 - (1.0 - self.alpha_decay).powf(tick_scale);
        self.alpha += (self.alpha_target - self.alpha) * decay;
        let alpha = self.alpha;

        self.accumulate_impulses(alpha);

        let keep = (1.0 - self.velocity_decay).powf(tick_scale);
        for (node, impulse) in self.nodes.iter_mut().zip(&self.scratch.impulses) {
            let velocity = (node.velocity + *impulse * tick_scale) * keep;
            let position = node.position + velocity * tick_scale;
            if is_finite(velocity) && is_finite(position) {
                node.velocity = velocity;
                node.position = position;
            } else {
                node.velocity = Vec2::ZERO;
            }
        }

        if self.alpha < self.alpha_min {
            self.state = RunState::Idle;
            tracing::debug!(
                nodes = self.nodes.len(),
                energy = self.kinetic_energy(),
                "simulation settled"
            );
        }

        TickOutcome::Advanced { alpha }
    }

    fn accumulate_impulses(&mut self, alpha: f32) {
        let node_count = self.nodes.len();
        let scratch = &mut self.scratch;
        scratch.impulses.clear();
        scratch.impulses.resize(node_count, Vec2::ZERO);
        scratch.positions.clear();
        scratch.charges.clear();
        scratch
            .positions
            .reserve(node_count.saturating_sub(scratch.positions.capacity()));
        scratch
            .charges
            .reserve(node_count.saturating_sub(scratch.charges.capacity()));

        for (node, impulse) in self.nodes.iter().zip(scratch.impulses.iter_mut()) {
            let target = self.anchor.target(node, &self.layout);
            *impulse += anchor_pull(node.position, target, self.strength, alpha);
            scratch.positions.push(node.position);
            scratch.charges.push(-(node.radius * node.radius) * self.strength);
        }

        if node_count < 2 {
            return;
        }

        let Some(quadtree) = QuadNode::build(&scratch.positions, &scratch.charges) else {
            return;
        };
        let params = RepulsionParams {
            alpha,
            theta_sq: BARNES_HUT_THETA_SQ,
        };
        for (index, impulse) in scratch.impulses.iter_mut().enumerate() {
            accumulate_repulsion_for_node(
                &quadtree,
                index,
                &scratch.positions,
                &scratch.charges,
                params,
                impulse,
            );
        }
    }
}

fn is_finite(value: Vec2) -> bool {
    value.x.is_finite() && value.y.is_finite()
}
