use tracing_subscriber::EnvFilter;

/// Initialise logging. Defaults to `info`; `debug` builds of the front end
/// can opt into verbose output, and `RUST_LOG` overrides the level only when
/// debug logging is enabled so a stray environment variable cannot flood a
/// normal run.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
