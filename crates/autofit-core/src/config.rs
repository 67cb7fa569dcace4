use crate::cache::SignatureScheme;
use crate::primitives::SizeRange;

/// Smallest candidate size unless configured otherwise.
pub const DEFAULT_MIN_SIZE: u32 = 16;

/// Largest candidate size when the host does not declare one.
pub const DEFAULT_MAX_SIZE: u32 = 64;

/// Options for a [`crate::FitSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitConfig {
    /// Smallest candidate size
    pub min_size: u32,
    /// Largest candidate size, usually the host's declared text size
    pub max_size: u32,
    /// When false every resolve runs the full search and the cache is never touched
    pub cache_enabled: bool,
    /// Cache key derivation
    pub signature: SignatureScheme,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            cache_enabled: true,
            signature: SignatureScheme::TextLength,
        }
    }
}

impl FitConfig {
    /// Default configuration with the given largest size.
    pub fn new(max_size: u32) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn with_signature(mut self, signature: SignatureScheme) -> Self {
        self.signature = signature;
        self
    }

    /// Normalized candidate range.
    pub fn range(&self) -> SizeRange {
        SizeRange::new(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FitConfig::default();
        assert_eq!(config.min_size, 16);
        assert!(config.cache_enabled);
        assert_eq!(config.signature, SignatureScheme::TextLength);
    }

    #[test]
    fn test_range_from_declared_size_below_min() {
        // Declared size smaller than the minimum still yields a usable range
        let config = FitConfig::new(12);
        let range = config.range();
        assert_eq!(range.min(), 12);
        assert_eq!(range.max(), 16);
    }
}
