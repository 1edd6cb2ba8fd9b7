pub mod config;
pub mod format;
pub mod generators;
pub mod methods;
pub mod report;
pub mod run;
pub mod timer;

use std::path::Path;

pub fn fmt_open_err(e: impl ToString, path: &Path) -> String {
    format!("Unable to open {}: {}", path_str(path), e.to_string())
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap_or("<unknown path>")
}

/// Installs the `tracing` subscriber shared by the binaries. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
