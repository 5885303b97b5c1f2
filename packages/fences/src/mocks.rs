use std::cell::Cell;
use std::rc::Rc;

use mockall::mock;

use crate::{DeviceBackend, DeviceId, Signal};

/// A scripted device backend for tests: signals up to a watermark count as fired, and every
/// poll and blocking wait is observable.
///
/// Clones share state, so a test can keep scripting the backend after moving a clone into an
/// event.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeDeviceBackend {
    state: Rc<FakeBackendState>,
}

#[derive(Debug, Default)]
struct FakeBackendState {
    /// Signals with a token value at or below this have fired.
    fired_up_to: Cell<u64>,

    /// If set, decremented on every poll; when it reaches zero, everything fires. This is how
    /// a spin-waiting caller ever gets unblocked in a single-threaded test.
    fires_after_polls: Cell<Option<usize>>,

    polls: Cell<usize>,
    blocking_waits: Cell<usize>,
}

impl FakeDeviceBackend {
    /// A backend on which nothing has fired yet.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A backend on which everything fires once it has been polled `polls` more times.
    pub(crate) fn fires_after_polls(polls: usize) -> Self {
        let backend = Self::default();
        backend.state.fires_after_polls.set(Some(polls));
        backend
    }

    /// Marks every signal up to and including the given one as fired.
    pub(crate) fn fire_up_to(&self, signal: Signal) {
        self.state.fired_up_to.set(signal.get());
    }

    /// How many times `has_fired` was consulted.
    pub(crate) fn polls(&self) -> usize {
        self.state.polls.get()
    }

    /// How many times `wait_until_fired` was invoked.
    pub(crate) fn blocking_waits(&self) -> usize {
        self.state.blocking_waits.get()
    }
}

impl DeviceBackend for FakeDeviceBackend {
    fn has_fired(&self, _device: DeviceId, signal: Signal) -> bool {
        self.state
            .polls
            .set(self.state.polls.get().checked_add(1).expect("poll count overflow"));

        if let Some(remaining) = self.state.fires_after_polls.get() {
            if let Some(next) = remaining.checked_sub(1) {
                self.state.fires_after_polls.set(Some(next));
            } else {
                self.state.fires_after_polls.set(None);
                self.state.fired_up_to.set(u64::MAX);
            }
        }

        signal.get() <= self.state.fired_up_to.get()
    }

    fn wait_until_fired(&self, _device: DeviceId, signal: Signal) {
        self.state.blocking_waits.set(
            self.state
                .blocking_waits
                .get()
                .checked_add(1)
                .expect("blocking wait count overflow"),
        );

        // A blocking wait only returns once the signal has fired.
        if self.state.fired_up_to.get() < signal.get() {
            self.state.fired_up_to.set(signal.get());
        }
    }
}

mock! {
    #[derive(Debug)]
    pub(crate) DeviceBackend {}

    impl DeviceBackend for DeviceBackend {
        fn has_fired(&self, device: DeviceId, signal: Signal) -> bool;
        fn wait_until_fired(&self, device: DeviceId, signal: Signal);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn nothing_fired_by_default() {
        let backend = FakeDeviceBackend::new();

        assert!(!backend.has_fired(0, Signal::new(nz!(1))));
        assert_eq!(backend.polls(), 1);
    }

    #[test]
    fn fires_up_to_watermark() {
        let backend = FakeDeviceBackend::new();
        backend.fire_up_to(Signal::new(nz!(5)));

        assert!(backend.has_fired(0, Signal::new(nz!(5))));
        assert!(!backend.has_fired(0, Signal::new(nz!(6))));
    }

    #[test]
    fn fires_after_scripted_polls() {
        let backend = FakeDeviceBackend::fires_after_polls(2);

        assert!(!backend.has_fired(0, Signal::new(nz!(1))));
        assert!(!backend.has_fired(0, Signal::new(nz!(1))));
        assert!(backend.has_fired(0, Signal::new(nz!(1))));
    }

    #[test]
    fn clones_share_state() {
        let backend = FakeDeviceBackend::new();
        let clone = backend.clone();

        clone.fire_up_to(Signal::new(nz!(1)));

        assert!(backend.has_fired(0, Signal::new(nz!(1))));
    }

    #[test]
    fn blocking_wait_fires_the_signal() {
        let backend = FakeDeviceBackend::new();

        backend.wait_until_fired(3, Signal::new(nz!(9)));

        assert!(backend.has_fired(3, Signal::new(nz!(9))));
        assert_eq!(backend.blocking_waits(), 1);
    }
}
