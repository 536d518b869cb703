//! A network abstraction layer for modem application firmware.
//!
//! This module defines the traits through which the application consumes
//! its platform collaborators (the network data service, the task delay
//! primitive, and the wall clock) together with the data-readiness gate
//! and the HTTP client built on top of them. The collaborators themselves
//! (TCP/TLS stack, RIL, scheduler) are opaque; only their contracts appear
//! here.

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// The bounded network data-readiness gate
pub mod readiness;

/// HTTP descriptors, the transport seam, and the request/upload client
pub mod http;

/// Re-exports of common traits
pub mod prelude {
    pub use super::http::HttpTransport;
    pub use super::{Clock, DataService, Delay};
}

/// The packet-data service of the underlying network stack.
///
/// Queries must be pure and non-blocking; `enable_data` is a one-shot
/// configuration call made at process start.
pub trait DataService {
    /// Whether packet data is attached and usable right now.
    fn is_data_ready(&self) -> bool;
    /// Enable or disable packet data.
    fn enable_data(&mut self, enable: bool);
}

/// Blocking delay provided by the host runtime.
pub trait Delay {
    /// Block the calling task for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Wall-clock time provided by the host runtime.
pub trait Clock {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> u64;
}
