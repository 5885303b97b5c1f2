//! Demonstrates reusing one event across many dispatch cycles.
//!
//! An event is created once and rearmed for every cycle; arming and checking never allocate.

use fences::{Event, Signal, Stream};
use new_zealand::nz;

fn main() {
    println!("=== Fences Rearm Example ===");

    let stream = Stream::new(0, 0);
    let mut event = Event::new();

    for cycle in 1_u64..=5 {
        // Each cycle issues new work, represented by the next signal.
        let signal = Signal::new(cycle.try_into().expect("cycle counter starts at 1"));
        stream.mark_pending(signal);

        // Rearming discards every capture of the previous cycle.
        event.rearm(&stream);
        println!("Cycle {cycle}: armed with {signal}, occurred = {}", event.query());
    }

    println!("Example completed successfully!");
}
