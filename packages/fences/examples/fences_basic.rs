//! Basic example of fencing asynchronous work with an event.
//!
//! This example demonstrates the simplest usage pattern of the fences package: arming an
//! event with a stream's current signal, polling for completion and blocking until done.

use fences::{Event, Signal, Stream};
use new_zealand::nz;

fn main() {
    println!("=== Fences Basic Example ===");

    // One execution queue on device 0.
    let stream = Stream::new(0, 0);
    let mut event = Event::new();

    // The dispatcher issued work; signal 1 stands for everything issued so far.
    stream.mark_pending(Signal::new(nz!(1)));

    println!("Arming event with the stream's current signal...");
    event.enqueue(&stream);

    // On the built-in host backend everything has completed the moment we look.
    println!("Polling: occurred = {}", event.query());

    println!("Blocking until everything captured has completed...");
    event.wait();

    println!("Armed slots remaining: {}", event.expected());
    println!("Example completed successfully!");
}
