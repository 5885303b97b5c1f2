/// Identifies a specific device (accelerator) on the system.
///
/// This will match the numeric identifier used by the device runtime that executes the
/// asynchronous work. The values are not guaranteed to be sequential/contiguous or to start
/// from zero (aspects that are also not guaranteed by device runtimes).
pub type DeviceId = u32;

/// Identifies a specific execution queue on a device.
///
/// Queue identifiers are only meaningful relative to the device that owns the queue.
pub type QueueId = u32;
