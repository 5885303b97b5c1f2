/// Which completion token reconciliation tests against the
/// [`DeviceBackend`][crate::DeviceBackend].
///
/// Chosen once when an [`Event`][crate::Event] is built, never per call.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a choice between exactly two reconciliation authorities"
)]
pub enum CompletionPolicy {
    /// Test the stream's most recently issued signal. A slot is only considered complete once
    /// everything currently outstanding on its stream has fired, even work issued after the
    /// capture.
    #[default]
    WaitCurrent,

    /// Test the slot's own captured signal. A slot is complete as soon as the work it actually
    /// fenced has fired, regardless of what the stream has issued since.
    WaitPast,
}

/// How [`Event::wait()`][crate::Event::wait] blocks the calling thread.
///
/// Chosen once when an [`Event`][crate::Event] is built, never per call.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a choice between exactly two blocking mechanisms"
)]
pub enum WaitStrategy {
    /// Hand the wait to the backend's blocking primitive, letting it sleep the thread.
    #[default]
    Block,

    /// Busy-poll reconciliation, yielding the processor between polls. Useful when the
    /// backend's blocking primitive is unavailable or too coarse.
    SpinYield,
}
