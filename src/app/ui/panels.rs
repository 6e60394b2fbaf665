use eframe::egui::{self, Align, Context, Layout};

use crate::chart::{ChartMode, RunState};

use super::super::{CHART_CONTAINER, ViewModel};

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &str,
        reload_requested: &mut bool,
        is_loading: bool,
        can_reload: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("log-bubbles");
                    ui.separator();
                    ui.label(format!("source: {source}"));
                    ui.separator();
                    self.draw_mode_buttons(ui);
                    ui.separator();
                    let reload_button = ui.add_enabled(
                        can_reload && !is_loading,
                        egui::Button::new("Reload"),
                    );
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(status) = self.status_text() {
                            ui.label(status);
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading log records...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_chart(ui);
            }
        });
    }

    fn draw_mode_buttons(&mut self, ui: &mut egui::Ui) {
        let Some(chart) = self.host.get_mut(CHART_CONTAINER) else {
            return;
        };

        let current = chart.mode();
        for mode in ChartMode::ALL {
            if ui.selectable_label(current == mode, mode.label()).clicked() {
                chart.set_mode(mode.name());
                ui.ctx().request_repaint();
            }
        }
    }

    fn status_text(&self) -> Option<String> {
        let chart = self.host.get(CHART_CONTAINER)?;
        let simulation = chart.simulation();
        let state = match simulation.state() {
            RunState::Running => format!("alpha {:.3}", simulation.alpha()),
            RunState::Idle => "settled".to_owned(),
            RunState::Stopped => "stopped".to_owned(),
        };
        Some(format!("bubbles: {} | {state}", chart.nodes().len()))
    }
}
