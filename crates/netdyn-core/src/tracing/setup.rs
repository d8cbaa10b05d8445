//! Subscriber setup for the netdyn binary and library logs.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Build the log filter from a `NETDYN_LOG`-style directive string.
///
/// `None`, or directives that do not parse, yield [`DEFAULT_LOG_FILTER`].
/// Loader and integrator logs can be raised separately, e.g.
/// `netdyn_analysis::network::loader=debug,netdyn_analysis::kuramoto=trace`.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the fmt subscriber filtered by `NETDYN_LOG`. Later calls, and a
/// subscriber some other code already installed, leave logging unchanged.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV_VAR).ok();
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(log_filter(directives.as_deref()))
            .try_init();
        if installed.is_err() {
            ::tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_filter_uses_default() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("netdyn_analysis=info"), "{filter}");
        assert!(filter.contains("netdyn_core=info"), "{filter}");
    }

    #[test]
    fn test_custom_directives_are_kept() {
        let filter = log_filter(Some("netdyn_analysis::kuramoto=trace")).to_string();
        assert!(filter.contains("netdyn_analysis::kuramoto=trace"), "{filter}");
        assert!(!filter.contains("netdyn_core"), "{filter}");
    }

    #[test]
    fn test_init_is_repeatable() {
        init_tracing();
        init_tracing();
    }
}
