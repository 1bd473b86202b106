//! LexMe driver.
//!
//! Glue around [`lexme_core`]: reads a C source file (the source provider),
//! scans it, and renders the tokens (the reporter). The `lexme` binary is a
//! thin wrapper over [`cli::run`].

pub mod cli;
pub mod driver;
pub mod options;
pub mod report;
pub mod source;

pub use driver::{lex_file, DriverError, LexSummary};
pub use options::{parse_lex_options, LexOptions, OptionsError, OutputFormat};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lexmec=debug` or `RUST_LOG=lexmec=trace`.
/// Log lines go to stderr so they never mix with reporter output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
