//! Transient emphasis on a quote anchor after a citation click.
//!
//! Emphasis clears itself `EMPHASIS_DURATION` after the most recent click on
//! the same anchor. Timers are not cancellable; a newer click supersedes an
//! older timer through a per-anchor generation counter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::crossref::anchors::{AnchorHost, QuoteAnchor};
use crate::errors::Degradation;

pub const EMPHASIS_DURATION: Duration = Duration::from_millis(2000);

/// Per-controller registry of running emphasis timers.
#[derive(Debug, Clone, Default)]
pub struct EmphasisTimers {
    generations: Arc<Mutex<HashMap<String, u64>>>,
}

impl EmphasisTimers {
    /// Starts (or restarts) the clear timer for `anchor_id`.
    ///
    /// Returns `None` when called outside a tokio runtime; the caller must
    /// not leave emphasis applied in that case.
    pub fn start<H: AnchorHost>(&self, host: Arc<H>, anchor_id: String) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                debug!(anchor_id = %anchor_id, "No runtime for emphasis timer: {e}");
                return None;
            }
        };

        let generation = self.bump(&anchor_id);
        let timers = self.clone();

        Some(runtime.spawn(async move {
            tokio::time::sleep(EMPHASIS_DURATION).await;

            if !timers.finish(&anchor_id, generation) {
                // a later click owns the anchor now
                return;
            }
            match host.find_anchor(&anchor_id) {
                Some(anchor) => anchor.set_emphasis(false),
                None => {
                    let degradation = Degradation::MissingAnchorElement { anchor_id };
                    debug!("Emphasis timer fired after teardown: {degradation}");
                }
            }
        }))
    }

    /// Number of anchors with a live timer.
    pub fn active(&self) -> usize {
        self.lock().len()
    }

    fn bump(&self, anchor_id: &str) -> u64 {
        let mut generations = self.lock();
        let next = generations.get(anchor_id).map_or(1, |g| g.wrapping_add(1));
        generations.insert(anchor_id.to_string(), next);
        next
    }

    /// Retires the timer if it is still the latest for the anchor.
    fn finish(&self, anchor_id: &str, generation: u64) -> bool {
        let mut generations = self.lock();
        if generations.get(anchor_id) == Some(&generation) {
            generations.remove(anchor_id);
            true
        } else {
            false
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, u64>> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
