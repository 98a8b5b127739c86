//! Per-stream symbol table.

use crate::wire::ENTRY_BYTES;

/// Byte-to-byte substitution table with insertion-order iteration.
///
/// One structure serves both directions: the encoder keys it by original
/// symbol and stores codes, the decoder keys it by code and stores
/// symbols. Keys are unique, so the table never exceeds 256 entries.
///
/// Codes are dense: the encode side assigns 0 to the first distinct byte
/// it sees, 1 to the next, and so on, which makes insertion order equal
/// to code order and keeps re-encoding byte-for-byte reproducible.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Value slot per possible key byte.
    slots: [Option<u8>; 256],
    /// `(key, value)` pairs in insertion order.
    order: Vec<(u8, u8)>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: [None; 256],
            order: Vec::new(),
        }
    }

    /// Insert a mapping, refusing duplicates.
    ///
    /// Returns `false` and leaves the table untouched if `key` is already
    /// present.
    pub fn insert(&mut self, key: u8, value: u8) -> bool {
        let slot = &mut self.slots[usize::from(key)];
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.order.push((key, value));
        true
    }

    /// Look up the value mapped to `key`.
    pub fn get(&self, key: u8) -> Option<u8> {
        self.slots[usize::from(key)]
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: u8) -> bool {
        self.slots[usize::from(key)].is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Fixed bit width of every code for a table of this size.
    ///
    /// The smallest width able to tell `len()` values apart. A one-entry
    /// table needs no bits at all: the occurrence count alone reconstructs
    /// the stream.
    pub fn bits_per_entry(&self) -> u8 {
        self.order.len().next_power_of_two().trailing_zeros() as u8
    }

    /// Serialized footprint: one code byte plus one symbol byte per entry.
    pub fn raw_size(&self) -> usize {
        self.order.len() * ENTRY_BYTES
    }

    /// Entries as `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.order.iter().copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = SymbolTable::new();
        assert!(table.insert(b'a', 0));
        assert!(table.insert(b'b', 1));
        assert_eq!(table.get(b'a'), Some(0));
        assert_eq!(table.get(b'b'), Some(1));
        assert_eq!(table.get(b'c'), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_is_refused() {
        let mut table = SymbolTable::new();
        assert!(table.insert(42, 0));
        assert!(!table.insert(42, 9));
        assert_eq!(table.get(42), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut table = SymbolTable::new();
        table.insert(b'z', 0);
        table.insert(b'a', 1);
        table.insert(b'm', 2);
        let entries: Vec<(u8, u8)> = table.iter().collect();
        assert_eq!(entries, vec![(b'z', 0), (b'a', 1), (b'm', 2)]);
    }

    #[test]
    fn test_bits_per_entry() {
        let mut table = SymbolTable::new();
        let widths = [
            (1, 0),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (128, 7),
            (129, 8),
            (256, 8),
        ];
        let mut next = 0usize;
        for (len, expected) in widths {
            while next < len {
                table.insert(next as u8, next as u8);
                next += 1;
            }
            assert_eq!(table.len(), len);
            assert_eq!(table.bits_per_entry(), expected, "len {len}");
        }
    }

    #[test]
    fn test_raw_size() {
        let mut table = SymbolTable::new();
        assert_eq!(table.raw_size(), 0);
        table.insert(0, 0);
        table.insert(1, 1);
        assert_eq!(table.raw_size(), 4);
    }

    #[test]
    fn test_full_alphabet() {
        let mut table = SymbolTable::new();
        for byte in 0..=255u8 {
            assert!(table.insert(byte, byte.wrapping_add(1)));
        }
        assert_eq!(table.len(), 256);
        assert_eq!(table.bits_per_entry(), 8);
        // Everything is taken now
        assert!(!table.insert(17, 0));
    }
}
