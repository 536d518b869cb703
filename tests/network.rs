use libmodem::network::readiness::{POLL_INTERVAL_MS, wait_data_ready};
use libmodem::network::{DataService, Delay};
use std::cell::Cell;

/// Data service that becomes ready after a fixed number of polls.
struct MockNetwork {
    ready_after: u32,
    polls: Cell<u32>,
}

impl MockNetwork {
    fn ready_after(polls: u32) -> Self {
        Self {
            ready_after: polls,
            polls: Cell::new(0),
        }
    }

    fn never_ready() -> Self {
        Self::ready_after(u32::MAX)
    }
}

impl DataService for MockNetwork {
    fn is_data_ready(&self) -> bool {
        let seen = self.polls.get();
        self.polls.set(seen + 1);
        seen >= self.ready_after
    }

    fn enable_data(&mut self, _enable: bool) {}
}

#[derive(Default)]
struct CountingDelay {
    sleeps: Vec<u32>,
}

impl Delay for CountingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
    }
}

#[test]
fn ready_at_entry_returns_without_sleeping() {
    let network = MockNetwork::ready_after(0);
    let mut delay = CountingDelay::default();

    assert!(wait_data_ready(&network, &mut delay, 60));
    assert!(delay.sleeps.is_empty());
}

#[test]
fn timeout_elapses_after_exactly_the_budgeted_intervals() {
    let network = MockNetwork::never_ready();
    let mut delay = CountingDelay::default();

    assert!(!wait_data_ready(&network, &mut delay, 4));
    assert_eq!(delay.sleeps, vec![POLL_INTERVAL_MS; 4]);
}

#[test]
fn readiness_mid_wait_stops_polling() {
    let network = MockNetwork::ready_after(2);
    let mut delay = CountingDelay::default();

    assert!(wait_data_ready(&network, &mut delay, 60));
    assert_eq!(delay.sleeps.len(), 2);
}

#[test]
fn zero_budget_still_observes_an_already_ready_network() {
    let mut delay = CountingDelay::default();

    assert!(wait_data_ready(&MockNetwork::ready_after(0), &mut delay, 0));
    assert!(!wait_data_ready(&MockNetwork::never_ready(), &mut delay, 0));
    assert!(delay.sleeps.is_empty());
}
