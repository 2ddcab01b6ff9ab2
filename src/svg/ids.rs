//! Unique element identifiers.
//!
//! Ids look like UUIDs but are derived from a blake3 hash of a per-document
//! seed and a counter, so converting the same input twice yields the same
//! output. Every id already present in the document is reserved up front.

use rustc_hash::FxHashSet;

use super::tree::Element;

pub struct IdGenerator {
    seed: blake3::Hash,
    counter: u64,
    taken: FxHashSet<String>,
}

impl IdGenerator {
    /// Generator for the document rooted at `root`, seeded with `seed`
    /// (normally the raw input bytes).
    pub fn new(seed: &[u8], root: &Element) -> Self {
        let mut taken = FxHashSet::default();
        root.walk(&mut |elem| {
            if let Some(id) = elem.get("id") {
                taken.insert(id.to_string());
            }
        });
        Self {
            seed: blake3::hash(seed),
            counter: 0,
            taken,
        }
    }

    /// Next id not yet used in the document.
    pub fn next_id(&mut self) -> String {
        loop {
            let mut hasher = blake3::Hasher::new();
            hasher.update(self.seed.as_bytes());
            hasher.update(&self.counter.to_le_bytes());
            self.counter += 1;

            let hex = hasher.finalize().to_hex();
            let id = format!(
                "{}-{}-{}-{}-{}",
                &hex[0..8],
                &hex[8..12],
                &hex[12..16],
                &hex[16..20],
                &hex[20..32]
            );
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}
