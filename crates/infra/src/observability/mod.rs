//! Observability infrastructure
//!
//! Lotclock only logs: every crate emits `tracing` events, and the binary
//! installs one subscriber at startup through [`logging::init_tracing`].

pub mod logging;

pub use logging::{build_filter, init_tracing};
