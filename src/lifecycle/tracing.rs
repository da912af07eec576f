//! Tracing setup for the whole system.
//!
//! Structured logging via the `tracing` crate. The compact format hides the
//! module path (`with_target(false)`) since log lines already carry an
//! `entity_type` field. Configure verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # compact workflow logs
//! RUST_LOG=debug cargo run   # full request payloads
//! ```

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
