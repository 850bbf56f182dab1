//! # ShopHub Shell
//!
//! Host application for the storefront stores.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. ShellConfig::load        defaults ► shell.toml ► SHOPHUB_* env      │
//! │  2. init_tracing             RUST_LOG, else config.log_filter           │
//! │  3. AppStores::new           one instance, injected everywhere          │
//! │  4. spawn_cart_badge         subscriber on the cart store               │
//! │  5. load_catalog (spawned)   "Loading products..." until it finishes    │
//! │  6. Session loop             one command per stdin line                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! ```text
//! shophub_shell/
//! ├── lib.rs          ◄─── You are here (startup)
//! ├── config.rs       ◄─── ShellConfig
//! ├── error.rs        ◄─── ShellError
//! ├── catalog.rs      ◄─── Catalog sources and the load sequence
//! ├── fixtures.rs     ◄─── Demo catalog, user and orders
//! ├── badge.rs        ◄─── Cart badge subscriber
//! └── session.rs      ◄─── Commands standing in for the views
//! ```

pub mod badge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod session;

use std::io::Write;
use std::path::PathBuf;

use shophub_state::AppStores;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::catalog::{load_catalog, CatalogSource};
use crate::config::ShellConfig;
use crate::session::{Reply, Session};

pub use config::ConfigError;
pub use error::{ShellError, ShellResult};

/// Runs the shell until `quit` or end of input.
///
/// `SHOPHUB_CONFIG` points at an explicit config file; otherwise the platform
/// config directory is used.
pub async fn run() -> anyhow::Result<()> {
    let config_path = std::env::var_os("SHOPHUB_CONFIG").map(PathBuf::from);
    let config = ShellConfig::load(config_path)?;

    init_tracing(&config.log_filter);
    info!(
        store_name = %config.store_name,
        load_delay_ms = config.load_delay_ms,
        catalog = ?config.catalog_path,
        "Configuration loaded"
    );

    let stores = AppStores::new();
    let badge = badge::spawn_cart_badge(&stores.cart);

    let loader = {
        let products = stores.products.clone();
        let source = CatalogSource::from_config(&config);
        let delay = config.load_delay();
        tokio::spawn(async move {
            if let Err(e) = load_catalog(&products, &source, delay).await {
                error!(error = %e, "Failed to load catalog");
            }
        })
    };

    println!("Welcome to {}. Type `help` for commands.", config.store_name);

    let mut session = Session::new(stores, config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match session.handle_line(&line) {
            Ok(Some(Reply::Text(text))) => println!("{}", text),
            Ok(Some(Reply::Quit)) => break,
            Ok(None) => {}
            Err(e) => println!("Error: {}", e),
        }
    }

    loader.abort();
    drop(session);
    // The badge task ends once the last cart handle is gone.
    let _ = badge.await;

    info!("Shell stopped");
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shophub_state=trace` - Show trace for the stores only
/// - Default: `log_filter` from the shell config
///
/// Logs go to stderr so they do not interleave with command output.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
