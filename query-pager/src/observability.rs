//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::PagerConfig;

/// Initialize JSON tracing output filtered by `config.log_level`
///
/// An unparseable level falls back to `info`. Calling this when a global
/// subscriber is already installed leaves the existing one in place.
pub fn init_tracing(config: &PagerConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(log_level = %config.log_level, "Tracing initialized for query pager");
    } else {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        let config = PagerConfig::default();
        init_tracing(&config);
        init_tracing(&config);
    }

    #[test]
    fn test_init_tracing_with_bad_level() {
        let config = PagerConfig {
            log_level: "not a [valid directive".to_string(),
            ..PagerConfig::default()
        };
        init_tracing(&config);
    }
}
