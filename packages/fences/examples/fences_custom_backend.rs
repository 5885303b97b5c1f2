//! Plugging a device runtime into the fence through the `DeviceBackend` trait.
//!
//! The backend here simulates a device that needs a few polls before the work lands; the
//! event is configured to spin-yield instead of using a blocking primitive.

use std::cell::Cell;

use fences::{DeviceBackend, DeviceId, Event, Signal, Stream, WaitStrategy};
use new_zealand::nz;

/// Reports "fired" once it has been polled a fixed number of times.
#[derive(Debug)]
struct CountdownBackend {
    polls_remaining: Cell<u32>,
}

impl DeviceBackend for CountdownBackend {
    fn has_fired(&self, _device: DeviceId, _signal: Signal) -> bool {
        let remaining = self.polls_remaining.get();

        if remaining == 0 {
            true
        } else {
            self.polls_remaining.set(remaining - 1);
            false
        }
    }

    fn wait_until_fired(&self, device: DeviceId, signal: Signal) {
        while !self.has_fired(device, signal) {
            std::thread::yield_now();
        }
    }
}

fn main() {
    println!("=== Fences Custom Backend Example ===");

    let stream = Stream::new(0, 0);
    stream.mark_pending(Signal::new(nz!(1)));

    let mut event = Event::builder()
        .backend(CountdownBackend {
            polls_remaining: Cell::new(3),
        })
        .wait_strategy(WaitStrategy::SpinYield)
        .build();

    event.enqueue(&stream);

    let mut polls = 0_u32;
    while !event.query() {
        polls += 1;
        println!("Poll {polls}: still outstanding");
    }

    println!("Work completed after {polls} unsuccessful polls");
    println!("Example completed successfully!");
}
