//! # themectl: folio theme control
//!
//! Composition root that wires the adapters together and exposes the theme
//! subsystem on the command line.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise logging
//! - Construct the filesystem storage, the class-list style sink and the
//!   desktop signal source (adapters)
//! - Construct the theme store and controller, injecting adapters via port traits
//! - Run the requested command; `watch` runs until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_adapter_desktop::DesktopSignalSource;
use folio_adapter_fs::{FilePreferenceStorage, FileStyleSink};
use folio_app::services::theme_controller::{ThemeController, ThemeSnapshot};
use folio_app::services::theme_store::ThemeStore;
use folio_domain::theme::{EffectiveTheme, Preference};

use crate::config::Config;

type DesktopStore = ThemeStore<FilePreferenceStorage, FileStyleSink, DesktopSignalSource>;
type DesktopController = ThemeController<FilePreferenceStorage, FileStyleSink, DesktopSignalSource>;

/// Inspect and change the folio theme preference.
#[derive(Debug, Parser)]
#[command(name = "themectl", version)]
struct Cli {
    /// Configuration file (defaults to `folio.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored preference, the effective theme and the OS signal.
    Show,
    /// Select a preference.
    Set {
        /// One of `light`, `dark` or `system`.
        preference: Preference,
    },
    /// Flip between light and dark.
    Toggle,
    /// Follow theme changes until interrupted.
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(&config.logging.filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = Arc::new(ThemeStore::new(
        FilePreferenceStorage::new(&config.storage.path),
        FileStyleSink::new(&config.style.path),
        DesktopSignalSource::new(config.poll_interval()),
    ));
    tracing::debug!(
        storage = %config.storage.path.display(),
        style = %config.style.path.display(),
        "theme store ready"
    );

    match cli.command {
        Command::Show => show(&store),
        Command::Set { preference } => {
            let controller = ThemeController::new(store);
            controller.set_theme(preference);
            print_snapshot(controller.snapshot());
        }
        Command::Toggle => {
            let controller = ThemeController::new(store);
            let next = controller.toggle_theme();
            println!("switched to {next} mode");
        }
        Command::Watch => watch(ThemeController::new(store)).await?,
    }

    Ok(())
}

fn show(store: &DesktopStore) {
    let current = store.read_preference();
    let effective = store.resolve(current);
    let system = EffectiveTheme::from_signal(store.read_system_signal());

    for preference in Preference::ALL {
        let mark = if preference == current { '*' } else { ' ' };
        println!("{mark} {}", preference.label());
    }
    println!("effective: {effective}");
    println!("system:    {system}");
    println!(
        "toggle:    switch to {} mode",
        effective.toggle_target()
    );
}

async fn watch(controller: DesktopController) -> Result<(), Box<dyn std::error::Error>> {
    let mut changes = controller.observe();
    print_snapshot(*changes.borrow_and_update());
    tracing::info!(
        following_system = controller.is_following_system(),
        "watching theme changes"
    );

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                print_snapshot(*changes.borrow_and_update());
            }
            interrupted = tokio::signal::ctrl_c() => {
                interrupted?;
                tracing::info!("interrupted, stopping");
                break;
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: ThemeSnapshot) {
    println!(
        "preference={} effective={}",
        snapshot.preference, snapshot.effective
    );
}
