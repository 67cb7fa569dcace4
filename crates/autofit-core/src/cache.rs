//! Resolved-size cache keyed by an input signature.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Cheap proxy for input identity, used as the cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(pub u64);

/// How a [`Signature`] is derived from the measured text.
///
/// `TextLength` is deliberately coarse: two strings of equal length share an
/// entry even if their glyphs differ in width. Typing into a fixed-size field
/// produces many such states, and the accuracy lost is small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignatureScheme {
    /// Number of Unicode scalar values.
    #[default]
    TextLength,
    /// Hash of the full string.
    ContentHash,
}

impl SignatureScheme {
    pub fn signature(&self, text: &str) -> Signature {
        match self {
            Self::TextLength => Signature(text.chars().count() as u64),
            Self::ContentHash => {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                Signature(hasher.finish())
            }
        }
    }
}

/// Sizes previously chosen by the binary search, keyed by signature.
///
/// Entries are only ever added one at a time and removed all at once, when the
/// available space changes.
#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    sizes: HashMap<Signature, u32>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, signature: Signature) -> Option<u32> {
        self.sizes.get(&signature).copied()
    }

    pub(crate) fn insert(&mut self, signature: Signature, size: u32) {
        self.sizes.insert(signature, size);
    }

    pub(crate) fn clear(&mut self) {
        self.sizes.clear();
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_signature_counts_chars() {
        let scheme = SignatureScheme::TextLength;
        assert_eq!(scheme.signature("abc"), Signature(3));
        assert_eq!(scheme.signature("héé"), Signature(3));
        assert_eq!(scheme.signature(""), Signature(0));
        assert_eq!(scheme.signature("WWW"), scheme.signature("iii"));
    }

    #[test]
    fn test_content_signature_distinguishes_equal_lengths() {
        let scheme = SignatureScheme::ContentHash;
        assert_ne!(scheme.signature("WWW"), scheme.signature("iii"));
        assert_eq!(scheme.signature("abc"), scheme.signature("abc"));
    }

    #[test]
    fn test_cache_insert_and_clear() {
        let mut cache = SizeCache::new();
        assert!(cache.is_empty());

        cache.insert(Signature(2), 33);
        cache.insert(Signature(5), 20);
        assert_eq!(cache.get(Signature(2)), Some(33));
        assert_eq!(cache.get(Signature(3)), None);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(Signature(2)), None);
    }
}
