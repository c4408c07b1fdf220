//! MargaGuide - Interactive terminal host for the campus navigation guide
//!
//! Drives the navigation controller from two event sources:
//!
//! - **Frame ticker**: a background thread delivering tick instants at a
//!   fixed rate; each tick advances the marker animation
//! - **Command reader**: a background thread reading stdin lines; each
//!   line becomes a navigation command
//!
//! The main thread multiplexes both channels with `select!` and owns the
//! controller exclusively, so state transitions and animation ticks are
//! serialized without locking.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use crossbeam_channel::{select, unbounded, Receiver};
use log::{info, warn};

use marga_guide::{
    DestinationCatalog, FixedViewport, FrameTicker, GuideConfig, NavigationController, Result,
};

/// Campus navigation guide
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "marga.toml")]
    config: String,

    /// Destination catalog TOML path (overrides the config file)
    #[arg(long)]
    catalog: Option<String>,

    /// Initial address token to navigate to on startup
    #[arg(short, long)]
    token: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let config = if config_path.exists() {
        info!("Loading configuration from {}", config_path.display());
        GuideConfig::load(config_path)?
    } else {
        info!("Using default configuration");
        GuideConfig::default()
    };

    let catalog_path = args.catalog.or_else(|| config.catalog.path.clone());
    let catalog = match catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path);
            DestinationCatalog::load(Path::new(&path))?
        }
        None => DestinationCatalog::builtin(),
    };

    info!("MargaGuide v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "{} destinations, {}ms runs at {} ticks/s",
        catalog.len(),
        config.animation.duration_ms,
        config.animation.tick_hz
    );

    let mut controller = NavigationController::new(
        catalog,
        config.run_duration(),
        Box::new(FixedViewport::new(800.0, 500.0)),
    );

    if let Some(token) = args.token {
        controller.handle_address_change(&token, Instant::now());
        print_state(&controller);
    } else {
        print_destinations(&controller);
    }

    let ticker = FrameTicker::start(config.animation.tick_hz);
    let commands = spawn_command_reader();

    let mut was_animating = controller.is_animating();

    loop {
        select! {
            recv(ticker.receiver()) -> tick => {
                let Ok(now) = tick else { break };
                controller.tick(now);

                // Report arrival once per run.
                let animating = controller.is_animating();
                if was_animating && !animating {
                    if let Some(marker) = controller.state().marker {
                        println!(
                            "Marker arrived at ({:.1}, {:.1})",
                            marker.x, marker.y
                        );
                    }
                }
                was_animating = animating;
            }
            recv(commands) -> line => {
                let Ok(line) = line else { break };
                if !dispatch(&mut controller, line.trim()) {
                    break;
                }
                was_animating = controller.is_animating();
            }
        }
    }

    ticker.stop();
    info!("Shutting down");
    Ok(())
}

/// Read stdin lines on a background thread.
///
/// The channel disconnects on EOF, which ends the main loop. The thread is
/// detached; it exits with the process.
fn spawn_command_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Apply one command line to the controller. Returns `false` to quit.
fn dispatch(controller: &mut NavigationController, line: &str) -> bool {
    let now = Instant::now();
    let (command, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "list" => print_destinations(controller),
        "go" => controller.select_destination(rest, now),
        "addr" => controller.handle_address_change(rest, now),
        "home" => controller.go_home(now),
        "photo" => controller.open_photo(),
        "back" => controller.close_photo(),
        "state" => print_state(controller),
        "quit" | "exit" => return false,
        other => {
            warn!("Unknown command: {}", other);
            println!("Commands: list, go <name>, addr <token>, home, photo, back, state, quit");
            return true;
        }
    }

    if command != "list" && command != "state" && !command.is_empty() {
        print_state(controller);
    }
    true
}

fn print_destinations(controller: &NavigationController) {
    println!("Destinations:");
    for dest in controller.catalog().iter() {
        println!("  {:<24} #{}", dest.name, dest.token());
    }
}

fn print_state(controller: &NavigationController) {
    let state = controller.state();
    println!("[{}] #{}", state.mode.as_str(), controller.token());

    if let Some(name) = &state.active_destination {
        println!("  Destination: {}", name);
        for (i, step) in state.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    if let Some(marker) = &state.marker {
        println!(
            "  Marker: ({:.1}, {:.1}) heading {:.0}°",
            marker.x, marker.y, marker.heading_deg
        );
    }

    if let Some(modal) = &state.photo_modal {
        let kind = if modal.is_video { "video" } else { "photo" };
        println!("  Viewing {}: {}", kind, modal.url);
    }

    if let Some(message) = &state.status_message {
        println!("  ! {}", message);
    }
}
