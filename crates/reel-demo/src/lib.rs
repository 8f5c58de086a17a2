#![forbid(unsafe_code)]

//! Headless demo for the reel team carousel.
//!
//! Builds a carousel from the built-in roster (or TOML/JSON files), then
//! either replays a scripted team-page visit in virtual time or runs the
//! program loop on the wall clock, printing one text line per frame.

pub mod cli;
pub mod error;
pub mod render;
pub mod session;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{DemoError, Result};

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
