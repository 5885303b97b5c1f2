//! One event fencing work on several streams across several devices.
//!
//! A scoped poll inspects a single stream's share of the fence; the unscoped wait drains
//! everything.

use fences::{Event, Signal, Stream};
use new_zealand::nz;

fn main() {
    println!("=== Fences Multi-Stream Example ===");

    let compute = Stream::new(0, 0);
    let transfer = Stream::new(1, 0);
    let mut event = Event::new();

    compute.mark_pending(Signal::new(nz!(1)));
    transfer.mark_pending(Signal::new(nz!(1)));

    event.enqueue(&compute);
    event.enqueue(&transfer);
    println!("Armed slots: {}", event.expected());

    // Only the compute stream's slots are inspected; the transfer stream is someone else's
    // concern for this call.
    println!("Compute share occurred = {}", event.query_scoped(&compute));

    println!("Waiting for everything captured on both devices...");
    event.wait();

    println!("Armed slots remaining: {}", event.expected());
    println!("Example completed successfully!");
}
