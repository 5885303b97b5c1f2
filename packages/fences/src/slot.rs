use std::cell::Cell;
use std::ptr;

use crate::{CompletionPolicy, DeviceBackend, Signal, Stream};

/// A snapshot of one stream's outstanding signal, taken when an event was armed.
///
/// The stream reference is fixed at capture time; the captured signal is cleared (only) by
/// reconciliation once the fenced work is known to have completed. The captured signal lives
/// in a `Cell` so that a non-blocking query can resolve slots without exclusive access to the
/// event.
#[derive(Debug)]
pub(crate) struct Slot<'s> {
    stream: &'s Stream,
    captured: Cell<Option<Signal>>,
}

impl<'s> Slot<'s> {
    /// Snapshots the stream's live signal. No need to coordinate with the stream; reading the
    /// signal is all the capture there is.
    pub(crate) fn capture(stream: &'s Stream) -> Self {
        Self {
            stream,
            captured: Cell::new(stream.pending()),
        }
    }

    pub(crate) fn stream(&self) -> &'s Stream {
        self.stream
    }

    /// The captured signal still awaiting completion, or `None` once resolved.
    pub(crate) fn pending(&self) -> Option<Signal> {
        self.captured.get()
    }

    /// Whether this slot belongs to the reconciliation context. No context means every slot
    /// matches; a stream context matches exactly the slots captured from that stream.
    pub(crate) fn matches(&self, context: Option<&Stream>) -> bool {
        context.is_none_or(|stream| ptr::eq(self.stream, stream))
    }

    /// Reconciles the captured signal against the stream's live state.
    ///
    /// Resolves the slot (clears the captured signal) when the stream has nothing outstanding
    /// anymore, or when the policy-selected token has fired on the backend. When the fired
    /// token is the stream's live signal, the stream is retired too, so other slots that
    /// captured the same stream observe it as idle.
    ///
    /// No side effects when the tested token has not fired.
    pub(crate) fn update<B: DeviceBackend>(&self, policy: CompletionPolicy, backend: &B) {
        let Some(captured) = self.captured.get() else {
            return;
        };

        let Some(live) = self.stream.pending() else {
            // The stream already retired everything it had outstanding.
            self.captured.set(None);
            return;
        };

        let tested = match policy {
            CompletionPolicy::WaitCurrent => live,
            CompletionPolicy::WaitPast => captured,
        };

        if backend.has_fired(self.stream.device(), tested) {
            if tested == live {
                self.stream.retire(live);
            }

            self.captured.set(None);
        }
    }
}
