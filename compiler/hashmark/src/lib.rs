//! Hashmark CLI
//!
//! Host for the `hashmark_fmt` engine. Owns everything the engine does not:
//! the command registry, reading and writing files, turning line ranges into
//! selections, and reporting.
//!
//! # Architecture
//!
//! ```text
//! argv ──► clap ──► CommandRegistry::execute(id) ──► hashmark_fmt::transform_selections
//!                          │
//!                          └──► info!("<confirmation message>")
//! ```

use std::sync::Once;

pub mod commands;
pub mod error;
pub mod registry;

pub use commands::{run_edit, EditConfig, EditResult, EditSummary, LineRange};
pub use error::CliError;
pub use registry::{Command, CommandRegistry};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=hashmark=info` or `RUST_LOG=hashmark_fmt=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
