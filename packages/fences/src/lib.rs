#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Completion fences for asynchronous device work queues.
//!
//! A host thread issues work onto a [`Stream`] - an execution queue bound to a device - and
//! the stream exposes only a monotonically advancing [`Signal`] that stands for "everything
//! issued so far". An [`Event`] captures the current signal of one or more streams at a point
//! in time and later answers whether everything captured has completed: [`Event::query()`]
//! polls without blocking, [`Event::wait()`] blocks the calling thread, and both can be
//! scoped to a single stream when one event spans several devices.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides
//! mechanisms for high-performance hardware-aware programming in Rust.
//!
//! Events are built for the hot dispatch path: the slot table is pre-sized at construction,
//! so arming, polling and waiting never allocate, and the same event is rearmed across many
//! dispatch cycles. What actually issues the device work and what decides whether a signal
//! has fired are collaborators outside this crate; the latter plugs in through the
//! [`DeviceBackend`] trait, with [`HostBackend`] as the built-in fallback for host-only
//! builds.
//!
//! # Example
//!
//! ```rust
//! use fences::{Event, Signal, Stream};
//! use new_zealand::nz;
//!
//! let stream = Stream::new(0, 0);
//! let mut event = Event::new();
//!
//! // The dispatcher issued work on the stream; signal 1 stands for it.
//! stream.mark_pending(Signal::new(nz!(1)));
//! event.enqueue(&stream);
//!
//! // Host-only build: the work has completed the moment we look.
//! assert!(event.query());
//! ```
//!
//! # Multi-stream example
//!
//! ```rust
//! use fences::{Event, Signal, Stream};
//! use new_zealand::nz;
//!
//! let compute = Stream::new(0, 0);
//! let transfer = Stream::new(1, 0);
//! let mut event = Event::new();
//!
//! compute.mark_pending(Signal::new(nz!(1)));
//! transfer.mark_pending(Signal::new(nz!(1)));
//!
//! // One fence over both streams.
//! event.enqueue(&compute);
//! event.enqueue(&transfer);
//!
//! // A scoped poll inspects one stream's share and treats the rest as satisfied.
//! assert!(event.query_scoped(&compute));
//!
//! event.wait();
//! assert!(event.query());
//! ```

mod backend;
mod builder;
mod constants;
mod event;
mod policy;
mod primitive_types;
mod signal;
mod slot;
mod stream;

#[cfg(test)]
mod mocks;

pub use backend::{DeviceBackend, HostBackend};
pub use builder::EventBuilder;
pub use constants::{MAX_DEVICES, MAX_STREAMS_PER_DEVICE};
pub use event::Event;
pub use policy::{CompletionPolicy, WaitStrategy};
pub use primitive_types::{DeviceId, QueueId};
pub use signal::Signal;
pub use stream::Stream;
