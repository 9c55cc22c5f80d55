#![warn(missing_docs)]

//! Logging setup shared by the hotmouse binaries.
//!
//! - [`LogArgs`]: clap flags selecting the log filter
//! - [`fmt`]: render tracing events as logfmt lines
//! - [`forward`]: forward rendered events to a host-provided channel

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

pub mod fmt;
pub mod forward;

/// Targets that make up hotmouse's own logs.
pub const CRATES: &[&str] = &[
    "hotmouse_engine",
    "hotmouse_replay",
    "mouse_button",
    "config",
    "logging",
];

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Log our crates at trace level
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Log our crates at debug level
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Log our crates at this level (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Explicit tracing filter directive, e.g. "hotmouse_engine=trace,config=debug".
    /// Overrides every other flag.
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Level requested through `--trace`, `--debug` or `--log-level`.
    fn level(&self) -> Option<&str> {
        if self.trace {
            Some("trace")
        } else if self.debug {
            Some("debug")
        } else {
            self.log_level.as_deref()
        }
    }

    /// Filter directive for these flags.
    ///
    /// `--log-filter` wins, then a level for our crates, then `RUST_LOG`, and
    /// finally `info` for our crates.
    pub fn directive(&self) -> String {
        if let Some(filter) = &self.log_filter {
            return filter.clone();
        }
        match self.level() {
            Some(level) => scoped(level),
            None => env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| scoped("info")),
        }
    }

    /// An `EnvFilter` built from [`LogArgs::directive`].
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.directive())
    }
}

/// Directive that sets `level` for every target in [`CRATES`].
fn scoped(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    CRATES
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_cover_our_crates() {
        let args = LogArgs {
            log_level: Some("DEBUG".into()),
            ..LogArgs::default()
        };
        let directive = args.directive();
        for c in CRATES {
            assert!(directive.contains(&format!("{c}=debug")), "{directive}");
        }
    }

    #[test]
    fn filter_beats_levels() {
        let args = LogArgs {
            trace: true,
            log_level: Some("warn".into()),
            log_filter: Some("config=trace".into()),
            ..LogArgs::default()
        };
        assert_eq!(args.directive(), "config=trace");
    }

    #[test]
    fn flag_precedence() {
        let trace = LogArgs {
            trace: true,
            log_level: Some("warn".into()),
            ..LogArgs::default()
        };
        assert_eq!(trace.directive(), scoped("trace"));
        let debug = LogArgs {
            debug: true,
            ..LogArgs::default()
        };
        assert_eq!(debug.directive(), scoped("debug"));
        let level = LogArgs {
            log_level: Some("warn".into()),
            ..LogArgs::default()
        };
        assert_eq!(level.directive(), scoped("warn"));
    }
}
