use std::time::Duration;

/// Tuning knobs for the demo. The delays are presentation constants chosen to
/// make UI stalls visible to the eye; tests zero them out.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of synthetic users generated at startup.
    pub corpus_size: usize,
    /// Rows shown when the search box is empty.
    pub preview_len: usize,
    /// Simulated cost of one filter recompute.
    pub filter_delay: Duration,
    /// Quiet period before a debounced query applies.
    pub debounce_window: Duration,
    /// How often the load generator takes a step while running.
    pub tick_interval: Duration,
    /// Simulated cost of testing one prime candidate.
    pub candidate_delay: Duration,
    /// Primes collected per load generator step.
    pub prime_batch: usize,
    /// Trailing window of discovered primes kept for display.
    pub recent_primes_cap: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            corpus_size: 1_000,
            preview_len: 100,
            filter_delay: Duration::from_millis(200),
            debounce_window: Duration::from_millis(300),
            tick_interval: Duration::from_millis(100),
            candidate_delay: Duration::from_millis(50),
            prime_batch: 10,
            recent_primes_cap: 50,
        }
    }
}

impl DemoConfig {
    /// Preset with a 10k-user corpus for a heavier filtering pass.
    pub fn large_corpus() -> Self {
        Self {
            corpus_size: 10_000,
            ..Self::default()
        }
    }

    /// Preset with every artificial delay removed, for tests and benches.
    pub fn instant() -> Self {
        Self {
            filter_delay: Duration::ZERO,
            candidate_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
