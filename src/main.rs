//! Mediatheque - demonstration driver
//!
//! Builds a sample catalog, runs one borrow/return cycle, saves the library
//! to the configured file, reloads it and prints what came back.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediatheque::{config::AppConfig, demo, repository::JsonFileRepository};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mediatheque={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Mediatheque v{}", env!("CARGO_PKG_VERSION"));

    let policy = config.library.policy();
    let repository = JsonFileRepository::new(&config.storage.path);

    let report = match demo::run(&repository, policy) {
        Ok(report) => report,
        Err(e) => {
            if e.is_caller_error() {
                tracing::warn!(code = e.code() as u32, "Demo stopped: {}", e);
            } else {
                tracing::error!(code = e.code() as u32, "Demo failed: {}", e);
            }
            std::process::exit(e.exit_code());
        }
    };

    println!("{}", report.stats);
    println!();
    println!("Library loaded from {}:", repository.path().display());
    for description in &report.descriptions {
        println!("{}", description);
        println!();
    }

    Ok(())
}
