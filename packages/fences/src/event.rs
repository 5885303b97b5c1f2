use std::marker::PhantomData;
use std::thread;

use crate::constants::EVENT_SLOT_COUNT;
use crate::slot::Slot;
use crate::{CompletionPolicy, DeviceBackend, EventBuilder, HostBackend, Stream, WaitStrategy};

/// A reusable completion fence over asynchronous device work.
///
/// Arming the event ([`enqueue()`][1]) snapshots the current [`Signal`][crate::Signal] of a
/// [`Stream`] into one of a fixed number of slots. The event then answers, without blocking
/// ([`query()`][2]) or by blocking the calling thread ([`wait()`][3]), whether everything
/// captured has completed on the device. One event may capture several streams across several
/// devices, and the same event is meant to be rearmed ([`rearm()`][4]) across many dispatch
/// cycles - arming and checking never allocate.
///
/// Streams are borrowed, never owned: the event must not outlive the streams it has captured,
/// which the borrow checker enforces.
///
/// How completion is detected is fixed when the event is built: the
/// [`CompletionPolicy`] selects which token is tested against the backend and the
/// [`WaitStrategy`] selects how [`wait()`][3] blocks. [`Event::new()`] uses the
/// [`HostBackend`] with the default policy and strategy; use [`Event::builder()`] for
/// anything else.
///
/// Everything to do with this type is single-threaded: one thread drives a given event's
/// arm/check sequence at a time, which is what lets the bookkeeping run without locks.
///
/// # Example
///
/// ```rust
/// use fences::{Event, Signal, Stream};
/// use new_zealand::nz;
///
/// let stream = Stream::new(0, 0);
/// let mut event = Event::new();
///
/// // Work was issued on the stream; signal 1 stands for everything issued so far.
/// stream.mark_pending(Signal::new(nz!(1)));
/// event.enqueue(&stream);
///
/// // Block until everything captured has completed (immediate on the host backend).
/// event.wait();
/// assert_eq!(event.expected(), 0);
/// assert!(event.query());
///
/// // The same event is rearmed for the next dispatch cycle.
/// stream.mark_pending(Signal::new(nz!(2)));
/// event.rearm(&stream);
/// assert_eq!(event.expected(), 1);
/// ```
///
/// [1]: Event::enqueue
/// [2]: Event::query
/// [3]: Event::wait
/// [4]: Event::rearm
#[derive(Debug)]
pub struct Event<'s, B: DeviceBackend = HostBackend> {
    /// The slot table. Only the first `expected` entries are active; entries beyond that are
    /// leftovers from earlier cycles and carry no meaning.
    slots: [Option<Slot<'s>>; EVENT_SLOT_COUNT],

    /// How many leading entries of `slots` are active.
    expected: usize,

    backend: B,
    completion_policy: CompletionPolicy,
    wait_strategy: WaitStrategy,

    // Everything to do with this event is single-threaded.
    _single_threaded: PhantomData<*const ()>,
}

impl<'s> Event<'s> {
    /// Creates an event with the default configuration: the [`HostBackend`] and the default
    /// completion policy and wait strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fences::Event;
    ///
    /// let event = Event::new();
    /// assert_eq!(event.expected(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(
            HostBackend,
            CompletionPolicy::default(),
            WaitStrategy::default(),
        )
    }

    /// Starts building an event with a custom backend, completion policy or wait strategy.
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
    /// assert_eq!(event.expected(), 0);
    /// ```
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }
}

impl Default for Event<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, B: DeviceBackend> Event<'s, B> {
    /// The fixed capacity of the slot table: up to [`MAX_DEVICES`][crate::MAX_DEVICES] x
    /// [`MAX_STREAMS_PER_DEVICE`][crate::MAX_STREAMS_PER_DEVICE] captures can be armed at
    /// once.
    pub const CAPACITY: usize = EVENT_SLOT_COUNT;

    pub(crate) fn with_config(
        backend: B,
        completion_policy: CompletionPolicy,
        wait_strategy: WaitStrategy,
    ) -> Self {
        Self {
            slots: [const { None }; EVENT_SLOT_COUNT],
            expected: 0,
            backend,
            completion_policy,
            wait_strategy,
            _single_threaded: PhantomData,
        }
    }

    /// Captures the stream's current signal into the next free slot, extending the fence to
    /// also cover everything issued on that stream so far.
    ///
    /// Slots already armed are preserved; use [`rearm()`][Self::rearm] to start a fresh cycle
    /// instead.
    ///
    /// # Panics
    ///
    /// Panics if all [`CAPACITY`][Self::CAPACITY] slots are already armed. This is a caller
    /// bug (too many concurrently fenced streams), not a runtime condition to recover from.
    pub fn enqueue(&mut self, stream: &'s Stream) {
        assert!(
            self.expected < Self::CAPACITY,
            "all {} event slots are armed - too many concurrently fenced streams",
            Self::CAPACITY
        );

        *self
            .slots
            .get_mut(self.expected)
            .expect("index is below capacity per the assert above") = Some(Slot::capture(stream));

        self.expected = self
            .expected
            .checked_add(1)
            .expect("slot count is bounded by the table capacity");
    }

    /// Discards every previously captured slot and arms the event from scratch with the
    /// stream's current signal.
    ///
    /// Afterwards exactly one slot is armed. This is how an event is reused across dispatch
    /// cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fences::{Event, Signal, Stream};
    /// use new_zealand::nz;
    ///
    /// let stream = Stream::new(0, 0);
    /// let mut event = Event::new();
    ///
    /// stream.mark_pending(Signal::new(nz!(1)));
    /// event.enqueue(&stream);
    /// event.enqueue(&stream);
    ///
    /// event.rearm(&stream);
    /// assert_eq!(event.expected(), 1);
    /// ```
    pub fn rearm(&mut self, stream: &'s Stream) {
        // Scrub stale snapshots in debug builds; release builds only reset the count.
        #[cfg(debug_assertions)]
        self.slots.fill_with(|| None);

        self.expected = 0;
        self.enqueue(stream);
    }

    /// The number of armed slots the event still accounts for.
    ///
    /// [`query()`][Self::query] resolution never shrinks this count; only
    /// [`wait()`][Self::wait] and [`rearm()`][Self::rearm] do.
    #[must_use]
    pub fn expected(&self) -> usize {
        debug_assert!(self.expected <= Self::CAPACITY);
        self.expected
    }

    /// Whether everything captured by the armed slots has completed. Never blocks.
    ///
    /// Returns `true` vacuously when nothing is armed. Slots that have already resolved stay
    /// resolved; a fresh reconciliation pass is run over the rest, so the answer reflects the
    /// device's current progress.
    #[must_use]
    pub fn query(&self) -> bool {
        self.query_matching(None)
    }

    /// Like [`query()`][Self::query], but only inspects slots captured from the given stream.
    ///
    /// Slots belonging to other streams are treated as satisfied by omission for this call -
    /// a `true` answer says nothing about them.
    #[must_use]
    pub fn query_scoped(&self, stream: &Stream) -> bool {
        self.query_matching(Some(stream))
    }

    /// Blocks the calling thread until everything captured by the armed slots has completed,
    /// then removes the completed slots from the event's accounting.
    ///
    /// How the blocking happens is governed by the event's [`WaitStrategy`]. Returns
    /// immediately when nothing is armed.
    pub fn wait(&mut self) {
        self.wait_matching(None);
    }

    /// Like [`wait()`][Self::wait], but only waits for slots captured from the given stream.
    ///
    /// The event's accounting assumes slots complete in the order they were armed: a scoped
    /// wait is only well-defined while the given stream's slots form a prefix of the active
    /// set. Arming several streams and then draining them out of order corrupts the
    /// accounting (stale slots are mistaken for live ones at reused indices).
    pub fn wait_scoped(&mut self, stream: &Stream) {
        self.wait_matching(Some(stream));
    }

    /// The active slots, resolved and unresolved alike.
    fn active_slots(&self) -> impl Iterator<Item = &Slot<'s>> {
        self.slots
            .get(..self.expected)
            .expect("expected never exceeds the slot table capacity")
            .iter()
            .flatten()
    }

    fn query_matching(&self, context: Option<&Stream>) -> bool {
        // Vacuously true when nothing is armed.
        let mut occurred = true;

        for slot in self.active_slots() {
            if slot.matches(context) && slot.pending().is_some() {
                slot.update(self.completion_policy, &self.backend);
                occurred = occurred && slot.pending().is_none();
            }
        }

        occurred
    }

    fn wait_matching(&mut self, context: Option<&Stream>) {
        let mut completed = 0_usize;

        for slot in self.active_slots() {
            let pending_stream = slot.stream().pending();
            let pending_slot = slot.pending();

            let (Some(live), Some(captured)) = (pending_stream, pending_slot) else {
                continue;
            };

            if !slot.matches(context) {
                continue;
            }

            match self.wait_strategy {
                WaitStrategy::SpinYield => loop {
                    slot.update(self.completion_policy, &self.backend);

                    if slot.pending().is_none() {
                        break;
                    }

                    thread::yield_now();
                },
                WaitStrategy::Block => {
                    let tested = match self.completion_policy {
                        CompletionPolicy::WaitCurrent => live,
                        CompletionPolicy::WaitPast => captured,
                    };

                    self.backend.wait_until_fired(slot.stream().device(), tested);

                    if tested == live {
                        slot.stream().retire(live);
                    }

                    // The slot exits through the expected count below; its captured signal
                    // is left as-is.
                }
            }

            completed = completed
                .checked_add(1)
                .expect("completed slots are bounded by the table capacity");
        }

        self.expected = self
            .expected
            .checked_sub(completed)
            .expect("completed more slots than were armed - event bookkeeping is corrupt");
    }
}
