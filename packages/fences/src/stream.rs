use std::cell::Cell;
use std::marker::PhantomData;

use derive_more::derive::Display;

use crate::{DeviceId, QueueId, Signal};

/// An asynchronous execution queue bound to a device.
///
/// The dispatch mechanism that actually issues work on the queue is outside this crate. From
/// the fence's point of view a stream is only two things: a device/queue identity and the most
/// recently issued outstanding [`Signal`], advanced by the dispatcher via [`mark_pending()`][1]
/// and cleared by reconciliation once the device has caught up.
///
/// Streams are shared: many [`Event`][crate::Event]s may reference the same stream
/// concurrently, none of them owning it. The borrow checker enforces the liveness contract -
/// a stream must outlive every event that has captured it.
///
/// Everything to do with this type is single-threaded. A stream's signal may be read by many
/// events but must only be mutated by one reconciliation path at a time; instead of paying for
/// locks on the hot dispatch path, the type simply cannot leave the thread that drives it.
///
/// # Example
///
/// ```rust
/// use fences::{Signal, Stream};
/// use new_zealand::nz;
///
/// let stream = Stream::new(0, 3);
///
/// // The dispatcher records the newest issued signal after enqueueing work.
/// stream.mark_pending(Signal::new(nz!(1)));
/// assert_eq!(stream.pending(), Some(Signal::new(nz!(1))));
///
/// // Retiring with the matching signal clears the stream back to idle.
/// stream.retire(Signal::new(nz!(1)));
/// assert_eq!(stream.pending(), None);
/// ```
///
/// [1]: Stream::mark_pending
#[derive(Debug, Display)]
#[display("stream {queue} on device {device}")]
pub struct Stream {
    device: DeviceId,
    queue: QueueId,

    /// The most recently issued signal that has not yet been observed as retired.
    /// `None` means the stream has nothing outstanding.
    pending: Cell<Option<Signal>>,

    // Everything to do with this stream is single-threaded.
    _single_threaded: PhantomData<*const ()>,
}

impl Stream {
    /// Creates an idle stream with the given device and queue identity.
    #[must_use]
    pub fn new(device: DeviceId, queue: QueueId) -> Self {
        Self {
            device,
            queue,
            pending: Cell::new(None),
            _single_threaded: PhantomData,
        }
    }

    /// The device this stream issues work on.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[must_use]
    #[inline]
    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// The queue identity of this stream on its device.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[must_use]
    #[inline]
    pub fn queue(&self) -> QueueId {
        self.queue
    }

    /// The most recently issued outstanding signal, or `None` when the stream is idle.
    #[must_use]
    #[inline]
    pub fn pending(&self) -> Option<Signal> {
        self.pending.get()
    }

    /// Records the newest issued signal.
    ///
    /// Called by the dispatch mechanism after issuing asynchronous work. Monotonicity of the
    /// recorded signals is the dispatcher's contract; it is not checked here.
    #[inline]
    pub fn mark_pending(&self, signal: Signal) {
        self.pending.set(Some(signal));
    }

    /// Clears the outstanding signal back to idle if it is still the expected one.
    ///
    /// No-op when the stream has moved on to a newer signal (or is already idle) - the caller
    /// resolved a token that is no longer the live one, and the live one still stands.
    #[inline]
    pub fn retire(&self, expected: Signal) {
        if self.pending.get() == Some(expected) {
            self.pending.set(None);
        }
    }
}
