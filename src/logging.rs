//! Diagnostics for the phone book, written to stderr.
//!
//! `RUST_LOG` wins when set. Otherwise the profile picks the level:
//! `dev` logs this crate at `debug` with source locations, `prod` at `info`
//! in plain text.

use crate::config::EnvType;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(env_type: EnvType) {
    let level = match env_type {
        EnvType::Dev => "debug",
        EnvType::Prod => "info",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    let registry = tracing_subscriber::registry().with(filter);

    match env_type {
        EnvType::Dev => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact()
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        EnvType::Prod => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_target(true),
            )
            .init(),
    }
}
