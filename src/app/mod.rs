use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::chart::{ChartConfig, ChartHost, ChartMode, PANEL_WIDTH};
use crate::dblog::{DataSource, RawRecord, load_records};

mod canvas;
mod render_utils;
mod ui;

const CHART_CONTAINER: &str = "#bubble-chart";

pub struct BubbleChartApp {
    source: DataSource,
    initial_mode: ChartMode,
    seed: Option<u64>,
    state: AppState,
    reload_rx: Option<Receiver<Result<Vec<RawRecord>, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Vec<RawRecord>, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    host: ChartHost,
    /// Last measured size of the hover panel, used to place the next one.
    detail_size: Vec2,
}

impl BubbleChartApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        source: DataSource,
        initial_mode: ChartMode,
        seed: Option<u64>,
    ) -> Self {
        let state = Self::start_load(source.clone());
        Self {
            source,
            initial_mode,
            seed,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: DataSource) -> Receiver<Result<Vec<RawRecord>, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_records(&source).map_err(|error| {
                tracing::error!(%source, "{error:#}");
                format!("{error:#}")
            });
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(source: DataSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }

    fn ready_state(&self, records: &[RawRecord]) -> AppState {
        AppState::Ready(Box::new(ViewModel::new(records, self.initial_mode, self.seed)))
    }

    fn can_reload(&self) -> bool {
        matches!(self.source, DataSource::File(_))
    }
}

impl eframe::App for BubbleChartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;
        let can_reload = self.can_reload();

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(result) => transition = Some(result),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        self.state = AppState::Error("Background load worker disconnected".to_owned());
                        return;
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading log records...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                let mut retry = false;
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load log records");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        retry = true;
                    }
                });
                if retry {
                    self.state = Self::start_load(self.source.clone());
                }
                return;
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                let source_label = self.source.to_string();
                model.show(
                    ctx,
                    &source_label,
                    &mut reload_requested,
                    is_reloading,
                    can_reload,
                );

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            self.state = match result {
                Ok(records) => self.ready_state(&records),
                Err(error) => AppState::Error(error),
            };
            ctx.request_repaint();
        } else if matches!(self.state, AppState::Loading { .. }) {
            ctx.request_repaint();
        }
    }
}

impl ViewModel {
    fn new(records: &[RawRecord], initial_mode: ChartMode, seed: Option<u64>) -> Self {
        let mut host = ChartHost::new(ChartConfig::default(), seed);
        host.attach(CHART_CONTAINER, records)
            .set_mode(initial_mode.name());

        Self {
            host,
            detail_size: Vec2::new(PANEL_WIDTH, 96.0),
        }
    }
}
