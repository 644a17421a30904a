//! `meetkit_log` v1:
//! Process-wide `tracing` subscriber bootstrap shared by the meetkit binaries.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset or invalid.
pub const C_LOG_FILTER_DEFAULT: &str = "info";

/// Subscriber options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLogOptions {
    /// Filter directive used when `RUST_LOG` is absent.
    pub filter_default: String,
    /// Emit ANSI colors.
    pub if_ansi: bool,
    /// Include the event target (module path) in each line.
    pub if_show_target: bool,
}

impl Default for SpecLogOptions {
    fn default() -> Self {
        Self {
            filter_default: C_LOG_FILTER_DEFAULT.to_string(),
            if_ansi: false,
            if_show_target: false,
        }
    }
}

/// Resolve the effective filter: `RUST_LOG` first, then `filter_default`.
pub fn derive_env_filter(options: &SpecLogOptions) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&options.filter_default))
}

/// Install a stderr fmt subscriber.
///
/// Returns `false` when a global subscriber was already installed; the existing one is kept.
pub fn init_logging(options: &SpecLogOptions) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(derive_env_filter(options))
        .with_writer(std::io::stderr)
        .with_ansi(options.if_ansi)
        .with_target(options.if_show_target)
        .try_init()
        .is_ok()
}
