//! Largest-fitting size search.
//!
//! [`FitSearch`] runs a bounded binary search over a discrete size range, driving a
//! [`Measurer`], and remembers each result under the signature of the measured
//! text. Typing into a field of fixed size therefore costs one search per distinct
//! text length instead of one per keystroke.
//!
//! The search never fails. Degenerate input is handled by policy:
//! - empty space: nothing is measured and the previous size is returned
//! - reversed range: normalized by [`SizeRange::new`]
//! - non-monotone measurer: the result is still clamped into the range

use crate::cache::{SizeCache, SignatureScheme};
use crate::config::FitConfig;
use crate::measure::{Measurement, Measurer};
use crate::primitives::{AvailableSpace, SizeRange};

/// Counters describing what a [`FitSearch`] has done since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FitStats {
    /// Resolves answered from the cache
    pub hits: u64,
    /// Resolves that ran the binary search
    pub misses: u64,
    /// Total measurer calls
    pub measurements: u64,
    /// Resolves skipped because the space was empty
    pub skipped: u64,
}

/// Find the largest size in `range` reported as fitting by `measurer`.
///
/// The upper bound of the range is never measured; the search covers
/// `[min, max - 1]`. Returns after at most `ceil(log2(range.len()))` measurer
/// calls, and always returns a value inside `range`.
pub fn binary_search<M: Measurer + ?Sized>(
    range: SizeRange,
    measurer: &mut M,
    text: &str,
    space: AvailableSpace,
) -> u32 {
    binary_search_counted(range, measurer, text, space).0
}

fn binary_search_counted<M: Measurer + ?Sized>(
    range: SizeRange,
    measurer: &mut M,
    text: &str,
    space: AvailableSpace,
) -> (u32, u64) {
    let mut calls = 0;
    let mut last_best = range.min();
    let mut low = range.min();
    // min >= 1, so neither this nor `mid - 1` below can underflow
    let mut high = range.max() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        calls += 1;
        let measurement = measurer.test(mid, text, space);
        log::trace!("size {mid} in [{low}, {high}]: {measurement:?}");

        match measurement {
            Measurement::RoomToGrow => {
                last_best = low;
                low = mid + 1;
            }
            Measurement::TooLarge => {
                high = mid - 1;
                last_best = high;
            }
            Measurement::Fits => return (mid, calls),
        }
    }

    // When nothing fits `last_best` ends one below `min`
    (range.clamp(last_best), calls)
}

/// Binary size search with a signature-keyed result cache.
///
/// The search owns its cache. The cache is cleared whenever the space or the
/// range passed to [`FitSearch::resolve`] differs from the previous one, or
/// explicitly through [`FitSearch::invalidate`].
#[derive(Clone, Debug)]
pub struct FitSearch {
    config: FitConfig,
    cache: SizeCache,
    last_space: Option<AvailableSpace>,
    /// Range the cached sizes were searched in
    last_range: Option<SizeRange>,
    last_size: Option<u32>,
    stats: FitStats,
}

impl Default for FitSearch {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}

impl FitSearch {
    pub fn new(config: FitConfig) -> Self {
        Self {
            config,
            cache: SizeCache::new(),
            last_space: None,
            last_range: None,
            last_size: None,
            stats: FitStats::default(),
        }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Candidate range from the configuration.
    pub fn range(&self) -> SizeRange {
        self.config.range()
    }

    pub fn signature_scheme(&self) -> SignatureScheme {
        self.config.signature
    }

    /// Change the smallest candidate size. Cached sizes are dropped.
    pub fn set_min_size(&mut self, min_size: u32) {
        self.config.min_size = min_size;
        self.invalidate();
    }

    /// Change the largest candidate size. Cached sizes are dropped.
    pub fn set_max_size(&mut self, max_size: u32) {
        self.config.max_size = max_size;
        self.invalidate();
    }

    /// Turn caching on or off. Turning it off drops every cached entry.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.config.cache_enabled = enabled;
        if !enabled {
            self.cache.clear();
        }
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    /// Size chosen by the most recent resolve, if any.
    pub fn last_size(&self) -> Option<u32> {
        self.last_size
    }

    pub fn stats(&self) -> FitStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = FitStats::default();
    }

    /// Geometry changed: forget every cached size.
    pub fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            log::debug!("invalidating {} cached sizes", self.cache.len());
        }
        self.cache.clear();
        self.last_space = None;
        self.last_range = None;
    }

    /// Resolve using the configured range.
    pub fn resolve_configured<M: Measurer + ?Sized>(
        &mut self,
        measurer: &mut M,
        text: &str,
        space: AvailableSpace,
    ) -> u32 {
        let range = self.range();
        self.resolve(measurer, text, range, space)
    }

    /// Largest size in `range` at which `text` fits in `space`.
    ///
    /// `text` is the text actually measured (see [`crate::TextSource`]).
    pub fn resolve<M: Measurer + ?Sized>(
        &mut self,
        measurer: &mut M,
        text: &str,
        range: SizeRange,
        space: AvailableSpace,
    ) -> u32 {
        if space.is_empty() {
            self.stats.skipped += 1;
            let size = self.last_size.unwrap_or(range.min());
            log::trace!("empty space {space:?}, keeping size {size}");
            return size;
        }

        if self.last_space != Some(space) {
            if self.last_space.is_some() {
                log::debug!("space changed to {}x{}", space.width, space.height);
            }
            self.invalidate();
            self.last_space = Some(space);
        }

        // Cached sizes are only valid for the range they were searched in
        if self.last_range != Some(range) {
            if self.last_range.is_some() {
                log::debug!("size range changed to {}..={}", range.min(), range.max());
            }
            self.cache.clear();
            self.last_range = Some(range);
        }

        let signature = self.config.signature.signature(text);

        if self.config.cache_enabled {
            if let Some(size) = self.cache.get(signature) {
                self.stats.hits += 1;
                self.last_size = Some(size);
                return size;
            }
        }

        let (size, calls) = binary_search_counted(range, measurer, text, space);
        self.stats.misses += 1;
        self.stats.measurements += calls;
        log::debug!(
            "resolved size {size} for {signature:?} in {calls} measurements (range {}..={})",
            range.min(),
            range.max()
        );

        if self.config.cache_enabled {
            self.cache.insert(signature, size);
        }
        self.last_size = Some(size);
        size
    }
}
