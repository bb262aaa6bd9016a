const MULTIPLIER: i32 = 31;

/// Polynomial string hasher, `h = h * 31 + c` over UTF-16 code units.
///
/// The accumulator is a 32-bit signed integer that wraps on overflow
/// (two's complement). Indices depend on that wraparound, so it must not be
/// widened.
#[derive(Debug, Default, Clone, Copy)]
pub struct Polynomial31 {
    hash: i32,
}

impl Polynomial31 {
    pub const fn new() -> Self {
        Self { hash: 0 }
    }

    /// Feeds a single UTF-16 code unit
    #[inline]
    pub fn write_unit(&mut self, unit: u16) {
        self.hash = self.hash.wrapping_mul(MULTIPLIER).wrapping_add(unit as i32);
    }

    /// Feeds every UTF-16 code unit of `s`, so feeding a key in pieces
    /// gives the same accumulator as [`hash_str`] on the whole key
    pub fn write_str(&mut self, s: &str) {
        for unit in s.encode_utf16() {
            self.write_unit(unit);
        }
    }

    /// The raw signed accumulator
    pub fn get(&self) -> i32 {
        self.hash
    }
}

/// Hashes `key` code unit by code unit
pub fn hash_str(key: &str) -> i32 {
    let mut h = Polynomial31::new();
    h.write_str(key);
    h.get()
}

/// Maps `key` into `0..capacity`
///
/// # Panics
///
/// Panics if `capacity` is zero, which a [`TableConfig`](crate::TableConfig) rules out
pub fn hash_index(key: &str, capacity: usize) -> usize {
    index_of(hash_str(key), capacity)
}

// `unsigned_abs` so that `i32::MIN` maps to 2^31 instead of overflowing
#[inline]
fn index_of(hash: i32, capacity: usize) -> usize {
    hash.unsigned_abs() as usize % capacity
}
