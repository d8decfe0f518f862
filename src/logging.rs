use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG: &str = "EMPEDIA_LOG";

/// Installs the stderr subscriber. `EMPEDIA_LOG` takes an `EnvFilter` directive; default is `fallback`.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
