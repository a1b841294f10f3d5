//! # Observability
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`.
//! The library itself only emits events; binaries decide whether to install a subscriber.
//!
//! - `RUST_LOG=warn` shows rejected usernames
//! - `RUST_LOG=debug` also shows every created user
//!
//! ```text
//! WARN create: Rejected username length=2 min_length=3
//! DEBUG create: Created user length=3
//! ```

/// Initializes the global subscriber. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
