//! Module keeping track of how many sibling file sets have been written per recursion depth.

use std::collections::HashMap;

use crate::{Error, error::missing_suffix_counter};

/// Per-depth file name suffix counters.
///
/// Depth 0 is seeded at construction. Every deeper level must be initialized by the first parent reaching it;
/// later parents re-initializing the same level continue counting from where the previous siblings stopped.
#[derive(Debug)]
pub(crate) struct SuffixCounters {
    counters: HashMap<usize, usize>,
}

impl Default for SuffixCounters {
    fn default() -> Self {
        Self {
            counters: HashMap::from([(0, 0)]),
        }
    }
}

impl SuffixCounters {
    pub(crate) fn get(&self, depth: usize) -> Result<usize, Error> {
        self.counters
            .get(&depth)
            .copied()
            .ok_or_else(|| missing_suffix_counter(depth, "get"))
    }

    pub(crate) fn initialize(&mut self, depth: usize) -> Result<(), Error> {
        if self.counters.contains_key(&depth) {
            self.increment(depth)
        } else {
            self.counters.insert(depth, 0);
            Ok(())
        }
    }

    pub(crate) fn increment(&mut self, depth: usize) -> Result<(), Error> {
        let counter = self
            .counters
            .get_mut(&depth)
            .ok_or_else(|| missing_suffix_counter(depth, "increment"))?;
        *counter += 1;
        Ok(())
    }
}
