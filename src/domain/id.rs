//! Module for the generation of unique, prefixed item identifiers.

use rand::{Rng, SeedableRng, rngs::StdRng};
use uuid::Uuid;

/// Produces identifiers of the form `<prefix><uuid v4>`.
///
/// The UUIDs are drawn from an owned RNG so that a run can be made reproducible by seeding it.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub(crate) fn next_id(&mut self, prefix: &str) -> String {
        format!("{prefix}{}", self.next_uuid())
    }

    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);

        // version 4, RFC 4122 variant
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Uuid::from_bytes(bytes)
    }
}
