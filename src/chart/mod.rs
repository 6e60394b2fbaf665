//! Bubble chart engine: node factory, force simulation, mode controller,
//! render binding and hover details. Nothing in here touches a painter; the
//! app layer drives [`Chart::frame`] once per rendered frame.

mod binder;
mod config;
mod host;
mod interaction;
mod layout;
mod mode;
mod nodes;
mod palette;
mod simulation;

use rand::Rng;

use crate::dblog::RawRecord;

use binder::RenderBinder;
use interaction::DetailPanel;
use layout::LayoutTargets;
use nodes::{Node, create_nodes};
use simulation::{Simulation, TickOutcome};

pub use binder::LabelKind;
pub use config::ChartConfig;
pub use host::ChartHost;
pub use interaction::{PANEL_WIDTH, hit_test, panel_position};
pub use mode::ChartMode;
pub use simulation::RunState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    Repaint,
    Idle,
}

/// One chart attached to one container.
pub struct Chart {
    container: String,
    config: ChartConfig,
    simulation: Simulation,
    binder: RenderBinder,
    mode: ChartMode,
    detail: DetailPanel,
    clock: f64,
    ticks: u64,
    disposed: bool,
}

impl Chart {
    pub fn new<R: Rng>(
        container: impl Into<String>,
        records: &[RawRecord],
        config: ChartConfig,
        rng: &mut R,
    ) -> Self {
        let container = container.into();
        let nodes = create_nodes(records, &config, rng);
        let layout = LayoutTargets::new(config.width, config.height);

        let mut binder = RenderBinder::new(config.entrance_secs);
        binder.bind(&nodes, 0.0);

        let mut chart = Self {
            container,
            config,
            simulation: Simulation::new(nodes, layout, &config),
            binder,
            mode: ChartMode::Grouped,
            detail: DetailPanel::default(),
            clock: 0.0,
            ticks: 0,
            disposed: false,
        };
        chart.apply_mode(ChartMode::Grouped);

        tracing::info!(
            container = %chart.container,
            bubbles = chart.simulation.nodes().len(),
            "attached bubble chart"
        );
        chart
    }

    /// Public control surface: `"all"`, `"type"` or `"severity"`.
    pub fn set_mode(&mut self, name: &str) -> ChartMode {
        let mode = ChartMode::from_name(name);
        self.apply_mode(mode);
        mode
    }

    pub fn apply_mode(&mut self, mode: ChartMode) {
        if self.disposed {
            return;
        }

        let visible = mode.visible_labels();
        for kind in [LabelKind::Category, LabelKind::Severity] {
            if visible == Some(kind) {
                self.binder.show_labels(kind, self.simulation.layout());
            } else {
                self.binder.remove_labels(kind);
            }
        }

        self.simulation.set_anchor(mode.anchor());
        self.simulation.restart(1.0);
        self.mode = mode;
        tracing::debug!(container = %self.container, mode = %mode, "layout mode applied");
    }

    /// Runs at most one simulation tick and reports whether another frame
    /// is wanted.
    pub fn frame(&mut self, delta_seconds: f32) -> FrameRequest {
        if self.disposed {
            return FrameRequest::Idle;
        }

        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.clock += f64::from(delta_seconds);
        }

        if let TickOutcome::Advanced { .. } = self.simulation.step(delta_seconds) {
            self.binder.sync_positions(self.simulation.nodes());
            self.ticks += 1;
        }

        if self.simulation.is_active() || self.binder.transitions_running(self.clock) {
            FrameRequest::Repaint
        } else {
            FrameRequest::Idle
        }
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.simulation.stop();
        self.detail.hide();
        self.disposed = true;
        tracing::info!(container = %self.container, ticks = self.ticks, "disposed bubble chart");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn nodes(&self) -> &[Node] {
        self.simulation.nodes()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn binder(&self) -> &RenderBinder {
        &self.binder
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Current on-screen radius of every bubble, entrance transition included.
    pub fn radii(&self) -> Vec<f32> {
        (0..self.binder.elements().len())
            .map(|index| self.binder.radius_at(index, self.clock))
            .collect()
    }
}
