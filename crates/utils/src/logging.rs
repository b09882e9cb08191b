use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_forest::ForestLayer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Installs the global subscriber: `INFO` by default, `RUST_LOG` overrides it.
///
/// Safe to call more than once (tests do); only the first call has an effect.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = Registry::default()
            .with(env_filter)
            .with(ForestLayer::default())
            .try_init();
    });
}
