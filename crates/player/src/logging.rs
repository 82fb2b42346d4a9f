//! Tracing bootstrap for both targets.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "hudkit_player=debug";

/// Installs the global tracing subscriber.
///
/// Native builds log to stderr through `tracing-subscriber`, filtered by
/// `RUST_LOG`; browser builds log to the console and report panics there.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let result = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
        if let Err(e) = result {
            eprintln!("tracing subscriber already installed: {e}");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
}
