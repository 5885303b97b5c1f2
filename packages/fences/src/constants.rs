/// The maximum number of devices whose streams one [`Event`][crate::Event] can fence at the
/// same time.
pub const MAX_DEVICES: usize = 8;

/// The maximum number of streams per device that one [`Event`][crate::Event] can fence at the
/// same time.
pub const MAX_STREAMS_PER_DEVICE: usize = 16;

/// Today, every event carries a slot table of this fixed size, pre-sized at construction so
/// that arming an event on the hot dispatch path never allocates. Overflowing the table is a
/// caller bug (too many concurrently fenced streams), not a trigger for growth.
pub(crate) const EVENT_SLOT_COUNT: usize = MAX_DEVICES * MAX_STREAMS_PER_DEVICE;
