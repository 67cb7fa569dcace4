//! A [`FitSearch`] that can be resolved from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::FitConfig;
use crate::measure::Measurer;
use crate::primitives::{AvailableSpace, SizeRange};
use crate::search::{FitSearch, FitStats};

/// Cloneable handle to one [`FitSearch`] behind a lock.
///
/// The lock is held for the whole cache lookup, search and cache store, so two
/// callers resolving the same signature never search twice.
#[derive(Clone, Debug, Default)]
pub struct SharedFitSearch {
    inner: Arc<Mutex<FitSearch>>,
}

impl SharedFitSearch {
    pub fn new(config: FitConfig) -> Self {
        Self::from_search(FitSearch::new(config))
    }

    pub fn from_search(search: FitSearch) -> Self {
        Self {
            inner: Arc::new(Mutex::new(search)),
        }
    }

    pub fn resolve<M: Measurer + ?Sized>(
        &self,
        measurer: &mut M,
        text: &str,
        range: SizeRange,
        space: AvailableSpace,
    ) -> u32 {
        self.inner.lock().resolve(measurer, text, range, space)
    }

    pub fn resolve_configured<M: Measurer + ?Sized>(
        &self,
        measurer: &mut M,
        text: &str,
        space: AvailableSpace,
    ) -> u32 {
        self.inner.lock().resolve_configured(measurer, text, space)
    }

    pub fn invalidate(&self) {
        self.inner.lock().invalidate();
    }

    pub fn last_size(&self) -> Option<u32> {
        self.inner.lock().last_size()
    }

    pub fn stats(&self) -> FitStats {
        self.inner.lock().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Measurement;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    #[test]
    fn test_concurrent_resolves_search_once() {
        let shared = SharedFitSearch::new(FitConfig::new(40));
        let calls = Arc::new(AtomicU32::new(0));
        let space = AvailableSpace::new(200.0, 50.0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    let mut measurer = |size: u32, _: &str, _: AvailableSpace| {
                        calls.fetch_add(1, Ordering::Relaxed);
                        if size <= 33 {
                            Measurement::RoomToGrow
                        } else {
                            Measurement::TooLarge
                        }
                    };
                    shared.resolve_configured(&mut measurer, "Hi", space)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 33);
        }

        // One search of [16, 39] for the example threshold takes 4 measurements
        assert_eq!(calls.load(Ordering::Relaxed), 4);

        let stats = shared.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 7);
        assert_eq!(shared.last_size(), Some(33));
    }

    #[test]
    fn test_invalidate_through_handle() {
        let shared = SharedFitSearch::default();
        let space = AvailableSpace::new(10.0, 10.0);
        let mut measurer = |_: u32, _: &str, _: AvailableSpace| Measurement::TooLarge;

        shared.resolve_configured(&mut measurer, "abc", space);
        shared.invalidate();
        shared.resolve_configured(&mut measurer, "abc", space);
        assert_eq!(shared.stats().misses, 2);
    }
}
