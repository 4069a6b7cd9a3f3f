/// Sizing knobs for a [`Bdd`][crate::bdd::Bdd] manager.
///
/// Both values are `log2` of the number of entries to pre-allocate. They only
/// affect the initial allocations; the store and the cache grow on demand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BddConfig {
    /// Initial capacity of the node store and the unique table (`2^bits`).
    pub storage_bits: usize,
    /// Initial capacity of the computed cache (`2^bits`).
    pub cache_bits: usize,
}

impl Default for BddConfig {
    fn default() -> Self {
        Self {
            storage_bits: 20,
            cache_bits: 16,
        }
    }
}

impl BddConfig {
    pub fn with_storage_bits(mut self, bits: usize) -> Self {
        assert!(bits <= 31, "Storage bits should be in the range 0..=31");
        self.storage_bits = bits;
        self
    }

    pub fn with_cache_bits(mut self, bits: usize) -> Self {
        assert!(bits <= 31, "Cache bits should be in the range 0..=31");
        self.cache_bits = bits;
        self
    }

    pub(crate) fn storage_capacity(&self) -> usize {
        1 << self.storage_bits
    }

    pub(crate) fn cache_capacity(&self) -> usize {
        1 << self.cache_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = BddConfig::default().with_storage_bits(10).with_cache_bits(8);
        assert_eq!(config.storage_capacity(), 1024);
        assert_eq!(config.cache_capacity(), 256);
    }

    #[test]
    #[should_panic(expected = "Cache bits should be in the range 0..=31")]
    fn test_cache_bits_too_large() {
        let _ = BddConfig::default().with_cache_bits(32);
    }
}
