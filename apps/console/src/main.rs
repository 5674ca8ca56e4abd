use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    sync::Arc,
};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use actuator::{Actuator, DryRunActuator, HttpActuator};
use anyhow::Context;
use backend_bridge::{commands::BackendCommand, runtime};
use clap::Parser;
use config::{load_settings, Settings};
use controller::{events::UiEvent, orchestration::QueueDispatcher};
use crossbeam_channel::bounded;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::app::ConsoleApp;

/// Operator console for a four-way intersection signal controller.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file (defaults to ./intersection.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Actuator base URL, overriding config and environment.
    #[arg(long)]
    base_url: Option<String>,
    /// Log actuator commands instead of sending them.
    #[arg(long)]
    dry_run: bool,
    /// Replay commands from a file instead of reading stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        settings.actuator_base_url = Some(base_url.clone());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let actuator = build_actuator(&settings, args.dry_run)?;
    info!(actuator = %actuator.describe(), "actuator configured");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    let bridge = runtime::launch(cmd_rx, ui_tx, actuator, runtime::SHUTDOWN_GRACE)
        .context("failed to start actuator bridge thread")?;

    let mut app = ConsoleApp::new(QueueDispatcher::new(cmd_tx.clone()), ui_rx);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(io::Cursor::new(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read script '{}'", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let interactive = args.script.is_none() && io::stdin().is_terminal();

    let mut stdout = io::stdout().lock();
    if interactive {
        writeln!(stdout, "type 'help' for commands")?;
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    for line in input.lines() {
        let line = line.context("failed to read operator input")?;
        for event_line in app.drain_events() {
            writeln!(stdout, "{event_line}")?;
        }

        let reply = app.handle_line(&line);
        for reply_line in &reply.lines {
            writeln!(stdout, "{reply_line}")?;
        }
        if reply.quit {
            break;
        }
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
    }

    controller::orchestration::request_shutdown(&cmd_tx);
    drop(cmd_tx);

    if bridge.join().is_err() {
        warn!("actuator bridge thread panicked");
    }
    for event_line in app.drain_events() {
        writeln!(stdout, "{event_line}")?;
    }

    Ok(())
}

fn build_actuator(settings: &Settings, dry_run: bool) -> anyhow::Result<Arc<dyn Actuator>> {
    let base_url = settings.actuator_base_url.as_deref();
    if dry_run {
        return Ok(Arc::new(DryRunActuator::new(base_url)));
    }

    match base_url {
        Some(base_url) => {
            let actuator = HttpActuator::new(base_url, settings.request_timeout())
                .with_context(|| format!("invalid actuator base url '{base_url}'"))?;
            Ok(Arc::new(actuator))
        }
        None => {
            warn!("no actuator base url configured (HARDWARE_IP / APP__ACTUATOR_BASE_URL); running dry");
            Ok(Arc::new(DryRunActuator::new(None)))
        }
    }
}
