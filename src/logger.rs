use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// A simple logger writing to stderr.
///
/// Off by default; set `RUST_LOG` to `info` or `debug` to see pipeline steps.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("off"));

        tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .with_writer(std::io::stderr)
            .with_file(false)
            .with_target(false)
            .with_thread_names(false)
            .with_env_filter(env_filter)
            .finish()
            .init();
    });
}
