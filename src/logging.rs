//! Server-side logging using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the server's log output.
///
/// Log level is controlled by the `RUST_LOG` environment variable. Records
/// emitted through the `log` facade by shared page code are forwarded too.
///
/// # Examples
/// ```bash
/// RUST_LOG=portfolio_site=debug cargo leptos watch
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
