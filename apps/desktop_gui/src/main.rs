mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{HeartlistApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Task list that rewards completed tasks with hearts")]
struct Args {
    /// Base URL of the server that receives task messages.
    #[arg(long)]
    server_url: Option<String>,
    /// Directory the `static/...` heart frame paths resolve against.
    #[arg(long)]
    asset_root: Option<PathBuf>,
}

impl Args {
    fn into_startup(self) -> StartupConfig {
        let defaults = StartupConfig::default();
        StartupConfig {
            server_url: self.server_url.unwrap_or(defaults.server_url),
            asset_root: self.asset_root.unwrap_or(defaults.asset_root),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let startup = Args::parse().into_startup();
    tracing::info!(server_url = %startup.server_url, "starting heartlist");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, startup.server_url.clone());

    let app = HeartlistApp::bootstrap(cmd_tx, ui_rx, startup)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Heartlist")
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native("Heartlist", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}
