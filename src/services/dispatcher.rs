use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DemoConfig;

/// How keystrokes become the query the filter actually sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mode {
    /// Apply every keystroke synchronously; the frame stalls on the recompute.
    Immediate,
    /// Apply only after a quiet period with no further keystrokes.
    Debounced,
    /// Apply as a low-priority update: the keystroke echo renders first and a
    /// newer keystroke supersedes an update still in flight.
    Deprioritized,
}

impl Mode {
    /// Three-way rotation used by the mode button.
    pub fn cycle(self) -> Self {
        match self {
            Self::Immediate => Self::Debounced,
            Self::Debounced => Self::Deprioritized,
            Self::Deprioritized => Self::Immediate,
        }
    }

    /// Binary toggle between the two extremes.
    pub fn flip(self) -> Self {
        match self {
            Self::Deprioritized => Self::Immediate,
            _ => Self::Deprioritized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate mode",
            Self::Debounced => "Debounce mode",
            Self::Deprioritized => "Concurrent mode",
        }
    }
}

/// A low-priority query update waiting to be committed. Carries the generation
/// it was issued under; a stale generation is discarded at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    value: String,
    generation: u64,
}

/// Owns the search query in both of its forms: the raw value updated on every
/// keystroke, and the authoritative value the filter consumes. The active mode
/// decides when raw becomes authoritative.
pub struct QueryDispatcher {
    mode: Mode,
    raw: String,
    authoritative: String,
    debounce_window: Duration,
    debounce_deadline: Option<Instant>,
    pending: Option<PendingUpdate>,
    generation: u64,
}

impl QueryDispatcher {
    /// Starts out in Deprioritized mode, like the demo.
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            mode: Mode::Deprioritized,
            raw: String::new(),
            authoritative: String::new(),
            debounce_window: config.debounce_window,
            debounce_deadline: None,
            pending: None,
            generation: 0,
        }
    }

    /// Feed one keystroke's worth of input. If the value already matches the
    /// authoritative query, nothing is dispatched and anything still queued
    /// for the old value is dropped.
    pub fn input(&mut self, value: &str, now: Instant) {
        self.raw = value.to_string();

        if value == self.authoritative {
            self.debounce_deadline = None;
            self.pending = None;
            return;
        }

        match self.mode {
            Mode::Immediate => {
                self.authoritative = value.to_string();
            }
            Mode::Debounced => {
                // Restart the quiet period on every keystroke.
                self.debounce_deadline = Some(now + self.debounce_window);
            }
            Mode::Deprioritized => {
                self.generation += 1;
                self.pending = Some(PendingUpdate {
                    value: value.to_string(),
                    generation: self.generation,
                });
            }
        }
    }

    /// Explicit submit: applies unconditionally and synchronously in every
    /// mode, cancelling any queued debounce and orphaning any update still in
    /// flight.
    pub fn submit(&mut self, value: &str) {
        self.raw = value.to_string();
        self.debounce_deadline = None;
        self.pending = None;
        self.generation += 1;
        self.authoritative = value.to_string();
        debug!("Query submitted: {:?}", self.authoritative);
    }

    /// Fire a due debounce deadline. Returns whether the authoritative query
    /// changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debounce_deadline {
            Some(deadline) if now >= deadline => {
                self.debounce_deadline = None;
                if self.raw != self.authoritative {
                    self.authoritative = self.raw.clone();
                    debug!("Debounce fired: {:?}", self.authoritative);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Hand the queued low-priority update to the scheduler. The caller is
    /// expected to render higher-priority work (the keystroke echo) before
    /// committing it.
    pub fn take_pending(&mut self) -> Option<PendingUpdate> {
        self.pending.take()
    }

    /// Commit a previously taken update, unless a newer keystroke or submit
    /// superseded it in the meantime. A stale update is discarded so its value
    /// is never observable.
    pub fn commit(&mut self, update: PendingUpdate) -> bool {
        if update.generation == self.generation {
            self.authoritative = update.value;
            true
        } else {
            debug!("Discarded superseded update: {:?}", update.value);
            false
        }
    }

    /// True while a deprioritized update has been issued but not yet picked up.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True while a debounce quiet period is counting down.
    pub fn is_debouncing(&self) -> bool {
        self.debounce_deadline.is_some()
    }

    /// Switching modes never clears the query, in either form.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn authoritative(&self) -> &str {
        &self.authoritative
    }
}
