//! Thin `env_logger` init helper.
//!
//! Library consumers are free to install their own `log` backend; this is
//! only wired up by the CLI binary, via `init()`, so that importing this
//! crate as a library never has the side effect of installing a global
//! logger.

/// Initializes `env_logger` from the `RUST_LOG` environment variable (or
/// `info` if unset). Safe to call more than once; subsequent calls are a
/// no-op (`try_init` swallows the "already initialized" error).
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
