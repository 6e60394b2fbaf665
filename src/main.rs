mod app;
mod chart;
mod dblog;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chart::ChartMode;
use dblog::DataSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON array of aggregated log records, or `-` to read stdin.
    #[arg(long, default_value = "-")]
    data: String,

    /// Initial layout: `all`, `type` or `severity`.
    #[arg(long, default_value = "all")]
    mode: String,

    /// Seed for the initial bubble placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let source = DataSource::from_arg(&args.data);
    let mode = ChartMode::from_name(&args.mode);
    tracing::info!(%source, %mode, seed = ?args.seed, "starting log-bubbles");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "log-bubbles",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::BubbleChartApp::new(
                cc,
                source.clone(),
                mode,
                args.seed,
            )))
        }),
    )
}
