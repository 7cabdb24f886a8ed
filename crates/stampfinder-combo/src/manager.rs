//! Background combination searches with last-write-wins publication.
//!
//! Every submitted search gets a generation number and runs on its own
//! thread. A finished search is published only when its generation is newer
//! than the one already published, so a slow search started earlier can
//! never replace the results of a later one.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stampfinder_config::EngineConfig;
use stampfinder_core::Catalog;
use tokio::sync::watch;
use tracing::debug;

use crate::combination::Combination;
use crate::finder::find_combinations;
use crate::options::ComboOptions;

/// Results of one completed search.
#[derive(Debug, Clone)]
pub struct PublishedCombinations {
    pub generation: u64,
    pub options: ComboOptions,
    pub combinations: Arc<Vec<Combination>>,
}

/// Handle to a submitted search.
#[derive(Debug)]
pub struct SearchJob {
    generation: u64,
    handle: JoinHandle<bool>,
}

impl SearchJob {
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the search; returns whether its results were published.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the search thread panicked.
    pub fn join(self) -> thread::Result<bool> {
        self.handle.join()
    }
}

#[derive(Debug)]
struct Shared {
    published: watch::Sender<Option<PublishedCombinations>>,
    running: AtomicUsize,
}

impl Shared {
    fn new() -> Self {
        Self {
            published: watch::Sender::new(None),
            running: AtomicUsize::new(0),
        }
    }

    fn offer(&self, result: PublishedCombinations) -> bool {
        self.published.send_if_modified(|current| {
            let newer = current
                .as_ref()
                .map_or(true, |c| result.generation > c.generation);
            if newer {
                *current = Some(result);
            }
            newer
        })
    }
}

/// Counts a search as running until dropped, including on unwind.
struct RunningGuard(Arc<Shared>);

impl RunningGuard {
    fn enter(shared: Arc<Shared>) -> Self {
        shared.running.fetch_add(1, Ordering::SeqCst);
        Self(shared)
    }
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.running.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Runs searches over one catalog snapshot in the background.
#[derive(Debug)]
pub struct ComboManager {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    next_generation: AtomicU64,
    shared: Arc<Shared>,
}

impl ComboManager {
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        Self {
            catalog,
            config,
            next_generation: AtomicU64::new(1),
            shared: Arc::new(Shared::new()),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Starts a search on its own thread.
    ///
    /// With a configured seed, each generation draws from its own stream
    /// derived from that seed.
    pub fn submit(&self, options: ComboOptions) -> SearchJob {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let catalog = Arc::clone(&self.catalog);
        let config = self.config.clone();
        let guard = RunningGuard::enter(Arc::clone(&self.shared));

        let handle = thread::spawn(move || {
            let shared = Arc::clone(&guard.0);
            let mut rng = match config.random_seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(generation)),
                None => ChaCha8Rng::from_os_rng(),
            };
            let combinations = find_combinations(catalog.stamps(), &options, &config, &mut rng);
            let published = shared.offer(PublishedCombinations {
                generation,
                options,
                combinations: Arc::new(combinations),
            });
            drop(guard);
            debug!(event = "combo_search_published", generation, published);
            published
        });

        SearchJob { generation, handle }
    }

    /// Most recently published results.
    pub fn latest(&self) -> Option<PublishedCombinations> {
        self.shared.published.borrow().clone()
    }

    /// Receiver notified on every publication.
    pub fn subscribe(&self) -> watch::Receiver<Option<PublishedCombinations>> {
        self.shared.published.subscribe()
    }

    /// Whether any submitted search is still running.
    pub fn is_searching(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst) > 0
    }
}
