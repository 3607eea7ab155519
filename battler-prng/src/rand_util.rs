use std::mem;

use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
///
/// An empty range always produces `min` without consuming a value.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random value from the given iterator.
pub fn sample_iter<I, T>(prng: &mut dyn PseudoRandomNumberGenerator, iter: I) -> Option<T>
where
    I: Iterator<Item = T>,
{
    let mut items = iter.collect::<Vec<_>>();
    if items.is_empty() {
        return None;
    }
    let index = range(prng, 0, items.len() as u64) as usize;
    Some(items.swap_remove(index))
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}

/// Removes and returns a random element from the given list.
///
/// The last element takes the place of the removed element, so list order is not preserved.
pub fn sample_no_replace<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut Vec<T>) -> Option<T> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        len => {
            let index = range(prng, 0, len as u64) as usize;
            Some(items.swap_remove(index))
        }
    }
}

/// Removes and returns `count` random elements from the given list.
///
/// Returns fewer elements if the list runs out.
pub fn sample_many_no_replace<T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    items: &mut Vec<T>,
    count: usize,
) -> Vec<T> {
    let mut sampled = Vec::with_capacity(count.min(items.len()));
    while sampled.len() < count {
        match sample_no_replace(prng, items) {
            Some(item) => sampled.push(item),
            None => break,
        }
    }
    sampled
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mut start = 0;
    let end = items.len() as u64;
    while start < end - 1 {
        let next = range(prng, start, end);
        if start != next {
            let (head, tail) = items.split_at_mut(next as usize);
            mem::swap(&mut head[start as usize], &mut tail[0]);
        }
        start += 1;
    }
}

#[cfg(test)]
mod rand_util_test {
    use crate::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    };

    #[test]
    fn generates_number_in_range() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        let min = 5;
        let max = 12;
        for _ in 0..50 {
            let n = rand_util::range(&mut prng, min, max);
            assert!(n >= min);
            assert!(n < max);
        }
    }

    #[test]
    fn empty_range_returns_min_without_consuming() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(1));
        let mut reference = RealPseudoRandomNumberGenerator::new(Some(1));
        assert_eq!(rand_util::range(&mut prng, 3, 3), 3);
        assert_eq!(prng.next(), reference.next());
    }

    #[test]
    fn generates_chance() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(100));
        let num = 3;
        let den = 7;
        let want = vec![
            true, true, false, false, false, false, false, true, true, true, false, true, true,
            false, true, false, true, false, false, true, true, true, true, true, false, false,
            true, false, false, false, true, false, false, false, false,
        ];
        let got = (0..35)
            .map(|_| rand_util::chance(&mut prng, num, den))
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(got, want);
    }

    #[test]
    fn shuffles_slice() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(123456789));
        let mut items = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        rand_util::shuffle(&mut prng, &mut items);
        let want = [3, 4, 9, 6, 0, 1, 2, 5, 7, 8];
        assert_eq!(items, want);
    }

    #[test]
    fn shuffle_ignores_empty_slice() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(5));
        let mut items: [u8; 0] = [];
        rand_util::shuffle(&mut prng, &mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn sample_iter_fails_empty_iterator() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(123456789));
        let items: Vec<&str> = Vec::new();
        assert_eq!(rand_util::sample_iter(&mut prng, items.iter()), None);
    }

    #[test]
    fn samples_element_in_slice() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(987654321));
        let items = vec!["a", "b", "c", "d"];
        for _ in 0..20 {
            let sampled = rand_util::sample_slice(&mut prng, &items);
            assert!(sampled.is_some_and(|item| items.contains(item)));
        }
    }

    #[test]
    fn sample_slice_fails_empty_slice() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(987654321));
        let items: Vec<&str> = Vec::new();
        assert_eq!(rand_util::sample_slice(&mut prng, &items), None);
    }

    #[test]
    fn sample_no_replace_drains_every_element_once() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(2024));
        let mut items = (0..10).collect::<Vec<_>>();
        let mut drawn = Vec::new();
        while let Some(item) = rand_util::sample_no_replace(&mut prng, &mut items) {
            drawn.push(item);
        }
        assert!(items.is_empty());
        drawn.sort();
        pretty_assertions::assert_eq!(drawn, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sample_many_no_replace_stops_when_list_runs_out() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(99));
        let mut items = vec!["a", "b", "c"];
        let sampled = rand_util::sample_many_no_replace(&mut prng, &mut items, 5);
        assert_eq!(sampled.len(), 3);
        assert!(items.is_empty());
    }
}
