//! Word ↔ id lookup table using separate chaining.
//!
//! The graph only ever stores ids; this table is the translation layer between
//! the words read from the vertex list and those ids. Buckets are a fixed-size
//! array of chains, and a chain keeps its entries in insertion order so the
//! earliest entry for a key is always the one a lookup finds.

#[derive(Debug, Clone, PartialEq, Eq)]
struct WordEntry {
    key: String,
    id: usize,
}

/// Hash table mapping each word to a dense id.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    buckets: Vec<Vec<WordEntry>>,
    len: usize,
}

impl SymbolTable {
    /// Creates a table with `bucket_count` chains (at least one).
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            len: 0,
        }
    }

    /// Bucket index for `key`: `h = 37 * h + byte` with 32-bit wraparound,
    /// reduced modulo the bucket count and kept non-negative. Bytes are taken
    /// as signed, so non-ASCII words land where a signed-`char` hash puts them.
    pub fn hash(&self, key: &str) -> usize {
        let mut hash_value: i32 = 0;
        for byte in key.bytes() {
            hash_value = hash_value.wrapping_mul(37).wrapping_add(i32::from(byte as i8)); // 0x80.. count negative
        }
        // bucket counts beyond i32::MAX are not meaningful here
        let size = i64::try_from(self.buckets.len()).unwrap_or(i64::MAX);
        i64::from(hash_value).rem_euclid(size) as usize
    }

    /// Appends `key` to the end of its bucket's chain.
    ///
    /// Duplicate keys are not checked: a second insert of the same key lands
    /// behind the first and is only reachable once the first is removed.
    pub fn insert(&mut self, key: &str, id: usize) {
        let bucket = self.hash(key);
        self.buckets[bucket].push(WordEntry {
            key: key.to_string(),
            id,
        });
        self.len += 1;
    }

    /// Id of the first entry for `key`, scanning its chain in insertion order.
    pub fn search_by_key(&self, key: &str) -> Option<usize> {
        self.buckets[self.hash(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.id)
    }

    /// Word registered under `id`.
    ///
    /// Ids are not indexed, so this walks every chain in bucket order.
    pub fn search_by_index(&self, id: usize) -> Option<&str> {
        self.buckets
            .iter()
            .flatten()
            .find(|entry| entry.id == id)
            .map(|entry| entry.key.as_str())
    }

    /// Unlinks the first entry for `key`. Returns false if the key is absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let bucket = self.hash(key);
        let chain = &mut self.buckets[bucket];
        match chain.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                chain.remove(pos); // keeps the rest of the chain in order
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain; 1 means no collisions at all.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}
