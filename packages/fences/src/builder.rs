use crate::{CompletionPolicy, DeviceBackend, Event, HostBackend, WaitStrategy};

/// Builder for creating an instance of [`Event`].
///
/// You only need to use this builder to customize the backend, completion policy or wait
/// strategy. The default configuration used by [`Event::new()`] is sufficient for host-only
/// use.
///
/// # Example
///
/// ```rust
/// use fences::{CompletionPolicy, Event, WaitStrategy};
///
/// let event = Event::builder()
///     .completion_policy(CompletionPolicy::WaitPast)
///     .wait_strategy(WaitStrategy::SpinYield)
///     .build();
/// # assert_eq!(event.expected(), 0);
/// ```
#[derive(Debug)]
#[must_use]
pub struct EventBuilder<B: DeviceBackend = HostBackend> {
    backend: B,
    completion_policy: CompletionPolicy,
    wait_strategy: WaitStrategy,
}

impl EventBuilder {
    pub(crate) fn new() -> Self {
        Self {
            backend: HostBackend,
            completion_policy: CompletionPolicy::default(),
            wait_strategy: WaitStrategy::default(),
        }
    }
}

impl<B: DeviceBackend> EventBuilder<B> {
    /// Sets the [completion policy][CompletionPolicy] - which token reconciliation tests
    /// against the backend.
    pub fn completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.completion_policy = policy;
        self
    }

    /// Sets the [wait strategy][WaitStrategy] - how [`Event::wait()`] blocks the calling
    /// thread.
    pub fn wait_strategy(mut self, strategy: WaitStrategy) -> Self {
        self.wait_strategy = strategy;
        self
    }

    /// Sets the [device backend][crate::DeviceBackend] that answers whether signals have
    /// fired.
    pub fn backend<B2: DeviceBackend>(self, backend: B2) -> EventBuilder<B2> {
        EventBuilder {
            backend,
            completion_policy: self.completion_policy,
            wait_strategy: self.wait_strategy,
        }
    }

    /// Builds the event with the specified configuration.
    #[must_use]
    pub fn build<'s>(self) -> Event<'s, B> {
        Event::with_config(self.backend, self.completion_policy, self.wait_strategy)
    }
}
