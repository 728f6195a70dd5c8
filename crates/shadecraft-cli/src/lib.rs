//! Command-line host for `shadecraft`.
//!
//! The binary is a thin wrapper: [`Cli`] describes the arguments and
//! [`run`] executes one command, returning the text meant for stdout. Keeping
//! execution here lets the commands be tested without spawning a process.
//!
//! ```text
//! shadecraft build palette.yaml --format js --config -o tailwind.theme.js
//! shadecraft check palette.yaml --deny-warnings
//! shadecraft ramp "#042F2E" "#FDA4AF"
//! ```

mod cli;
mod commands;

pub use cli::{BuildArgs, CheckArgs, Cli, Command, RampArgs};
pub use commands::run;

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
