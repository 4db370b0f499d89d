use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use super::busy_wait;
use crate::config::DemoConfig;
use crate::domain::user::User;

struct Memo {
    corpus_key: usize,
    query: String,
    results: Vec<User>,
}

/// Filters the corpus by the authoritative query, with a deliberate busy-wait
/// standing in for an expensive recompute. Results are memoized on the
/// (corpus, query) pair so an unchanged input never pays the delay twice.
pub struct UserFilter {
    filter_delay: Duration,
    preview_len: usize,
    memo: Option<Memo>,
}

impl UserFilter {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            filter_delay: config.filter_delay,
            preview_len: config.preview_len,
            memo: None,
        }
    }

    /// Visible subset for `query`. Empty query shows a preview of the first
    /// rows without paying the delay; otherwise every record whose name,
    /// email, job or department contains the query (case-insensitive) is
    /// kept, in corpus order, uncapped.
    pub fn filter(&mut self, corpus: &Arc<Vec<User>>, query: &str) -> &[User] {
        let corpus_key = Arc::as_ptr(corpus) as usize;
        let hit = self
            .memo
            .as_ref()
            .is_some_and(|memo| memo.corpus_key == corpus_key && memo.query == query);

        if !hit {
            let results = self.recompute(corpus, query);
            self.memo = Some(Memo {
                corpus_key,
                query: query.to_string(),
                results,
            });
        }

        match self.memo.as_ref() {
            Some(memo) => memo.results.as_slice(),
            None => &[],
        }
    }

    fn recompute(&self, corpus: &[User], query: &str) -> Vec<User> {
        if query.is_empty() {
            return corpus[..corpus.len().min(self.preview_len)].to_vec();
        }

        info!("Filtering {} users for {:?}", corpus.len(), query);
        let started = Instant::now();
        busy_wait(self.filter_delay);

        let needle = query.to_lowercase();
        let results: Vec<User> = corpus
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
                    || user.job.to_lowercase().contains(&needle)
                    || user.department.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        info!(
            "Filtered down to {} users in {}ms",
            results.len(),
            started.elapsed().as_millis()
        );
        results
    }
}
