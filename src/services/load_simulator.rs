use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{busy_wait, is_prime};
use crate::config::DemoConfig;

/// Artificial CPU load: hunts primes in batches, spending a fixed busy-wait on
/// every candidate so each step blocks the UI thread for a noticeable while.
///
/// Stopping only halts ticking; the cursor and the trailing prime window are
/// kept, so a later start resumes the search where it left off.
pub struct LoadSimulator {
    running: bool,
    cursor: u64,
    recent_primes: Vec<u64>,
    last_advance: Option<Instant>,
    tick_interval: Duration,
    candidate_delay: Duration,
    prime_batch: usize,
    recent_primes_cap: usize,
}

impl LoadSimulator {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            running: false,
            cursor: 0,
            recent_primes: Vec::new(),
            last_advance: None,
            tick_interval: config.tick_interval,
            candidate_delay: config.candidate_delay,
            prime_batch: config.prime_batch,
            recent_primes_cap: config.recent_primes_cap,
        }
    }

    /// Resume the search from a given frontier instead of zero.
    pub fn with_cursor(mut self, cursor: u64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            info!("Load generator started at cursor {}", self.cursor);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(
                "Load generator stopped at cursor {} ({} primes in window)",
                self.cursor,
                self.recent_primes.len()
            );
        }
    }

    /// Drive the simulator from the frame loop. Advances at most once per tick
    /// interval, and only while running and foreground-visible; backgrounding
    /// pauses the search without resetting it. Returns whether a step ran.
    pub fn tick(&mut self, now: Instant, foreground: bool) -> bool {
        if !self.running || !foreground {
            return false;
        }
        if let Some(last) = self.last_advance {
            if now.duration_since(last) < self.tick_interval {
                return false;
            }
        }
        self.last_advance = Some(now);
        self.advance();
        true
    }

    /// One load step: find the next `prime_batch` primes above the cursor,
    /// paying the candidate delay on every number examined. The cursor moves
    /// to the last candidate examined, prime or not, so the next step carries
    /// on from the search frontier.
    pub fn advance(&mut self) {
        let mut candidate = self.cursor;
        let mut found = Vec::with_capacity(self.prime_batch);

        while found.len() < self.prime_batch {
            candidate += 1;
            busy_wait(self.candidate_delay);
            if is_prime(candidate) {
                found.push(candidate);
            }
        }

        self.cursor = candidate;
        debug!("Advanced to cursor {}, found {:?}", self.cursor, found);

        self.recent_primes.append(&mut found);
        if self.recent_primes.len() > self.recent_primes_cap {
            let excess = self.recent_primes.len() - self.recent_primes_cap;
            self.recent_primes.drain(..excess);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Most recently discovered primes, oldest first, capped at the window size.
    pub fn recent_primes(&self) -> &[u64] {
        &self.recent_primes
    }
}
