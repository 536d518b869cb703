//! The network data-readiness gate.
//!
//! Work that needs packet data blocks behind [`wait_data_ready`] at task
//! startup. The gate polls the data service once per second against a
//! fixed timeout budget; it never polls tighter than the interval and it
//! never retries past the budget; on timeout the caller aborts its run.

use crate::network::{DataService, Delay};

/// Milliseconds between readiness polls.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Block until the network reports data-ready, or until the budget runs
/// out.
///
/// The predicate is checked before every sleep, so a network that is
/// already usable returns `true` without blocking at all. Otherwise the
/// gate sleeps [`POLL_INTERVAL_MS`] per remaining second of
/// `timeout_secs` and re-checks, returning `false` once the budget is
/// exhausted.
pub fn wait_data_ready<N, D>(network: &N, delay: &mut D, timeout_secs: u32) -> bool
where
    N: DataService + ?Sized,
    D: Delay + ?Sized,
{
    let mut remaining = timeout_secs;
    while remaining > 0 && !network.is_data_ready() {
        delay.delay_ms(POLL_INTERVAL_MS);
        remaining -= 1;
    }
    network.is_data_ready()
}
