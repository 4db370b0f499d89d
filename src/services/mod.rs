mod dispatcher;
mod filter;
mod load_simulator;
mod primes;

pub use dispatcher::{Mode, PendingUpdate, QueryDispatcher};
pub use filter::UserFilter;
pub use load_simulator::LoadSimulator;
pub use primes::is_prime;

use std::time::{Duration, Instant};

/// Spin the current thread for `duration` of wall-clock time. This is the
/// artificial workload: unlike a sleep it keeps the CPU busy and cannot be
/// interrupted, which is exactly what the demo needs to contend with the UI.
pub fn busy_wait(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    let start = Instant::now();
    while start.elapsed() < duration {
        std::hint::spin_loop();
    }
}
