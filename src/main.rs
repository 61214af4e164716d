use std::{io, process};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salon::cli;
use salon::config::Config;
use salon::desk::FrontDesk;
use salon::storage::Storage;

fn main() {
    let filter = EnvFilter::try_from_env("SALON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let time_zone = config.time_zone().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let path = config.database_path().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::open(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open {}: {e}", path.display());
            process::exit(1);
        }
    };

    let desk = FrontDesk::new(storage, time_zone);
    if let Err(e) = cli::run(&config, &desk) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
