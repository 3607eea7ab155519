use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over generator
/// RNG.
///
/// Values are numbered by their position in the sequence, starting at 1. A fake value replaces the
/// real value at its position, but the real generator is still advanced.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }
}

impl Default for ControlledRandomNumberGenerator {
    fn default() -> Self {
        Self::new(Some(0))
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn reseed(&mut self, seed: u64) {
        self.count = 0;
        self.real.reseed(seed);
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        let fake_entry = self.fake_values.entry(self.count);
        match fake_entry {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable.into_iter());
    }

    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(count, value)| (count + self.count, value)),
        );
    }
}

#[cfg(test)]
mod controlled_rng_test {
    use battler_prng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
    };

    use crate::ControlledRandomNumberGenerator;

    #[test]
    fn replaces_values_at_fixed_positions() {
        let mut real = RealPseudoRandomNumberGenerator::new(Some(7));
        let mut controlled = ControlledRandomNumberGenerator::new(Some(7));
        controlled.insert_fake_values([(2, 100), (4, 200)]);
        assert_eq!(controlled.next(), real.next());
        assert_eq!(controlled.next(), 100);
        real.next();
        assert_eq!(controlled.next(), real.next());
        assert_eq!(controlled.next(), 200);
        assert_eq!(controlled.sequence_count(), 4);
    }

    #[test]
    fn inserts_relative_to_current_position() {
        let mut controlled = ControlledRandomNumberGenerator::default();
        controlled.next();
        controlled.next();
        controlled.insert_fake_values_relative_to_sequence_count([(1, 5)]);
        assert_eq!(controlled.next(), 5);
    }
}
