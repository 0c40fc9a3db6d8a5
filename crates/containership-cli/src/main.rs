use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use containership_cli::session::Session;
use containership_lib::{load_ship_roster_from_path, Harbor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Harbor console for the container shipment domain")]
struct Cli {
    /// Preload ships from a CSV roster (name,max_speed,max_containers,max_weight).
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut harbor = Harbor::new();
    if let Some(path) = &cli.roster {
        let ships = load_ship_roster_from_path(path)
            .with_context(|| format!("failed to parse roster {}", path.display()))?;
        for ship in ships {
            harbor
                .add_ship(ship)
                .with_context(|| format!("failed to register roster ship from {}", path.display()))?;
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(harbor).run(stdin.lock(), &mut stdout)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
