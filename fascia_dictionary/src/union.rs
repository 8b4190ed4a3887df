// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic set-union of hash maps.

use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Temporary sorted index over a map's entries.
///
/// Parameter dictionaries are small; most indices stay inline.
pub type SortedIndex<'a, K, V> = SmallVec<[(&'a K, &'a V); 16]>;

/// References to the entries of `map`, sorted by key.
///
/// The map itself is not touched; this is the ordered view the union merges over.
pub fn sorted_view<K: Ord, V, S>(map: &HashMap<K, V, S>) -> SortedIndex<'_, K, V> {
    let mut index: SortedIndex<'_, K, V> = map.iter().collect();
    // Keys in a map are unique, so an unstable sort is still deterministic.
    index.sort_unstable_by(|a, b| a.0.cmp(b.0));
    index
}

/// The set-union of two maps, keyed by `K`'s total order.
///
/// The result holds exactly one entry per distinct key of either input. When both inputs hold
/// a key, the entry from `src1` is kept and `src2`'s value is discarded. Neither input is
/// modified, and the result does not depend on the inputs' hash iteration order.
///
/// If either input is empty, the result is a copy of the other. The result uses `src1`'s
/// hasher otherwise.
///
/// ```rust
/// use fascia_dictionary::dictionary_union;
/// use hashbrown::HashMap;
///
/// let a: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let b: HashMap<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
///
/// let ab = dictionary_union(&a, &b);
/// assert_eq!(ab.len(), 3);
/// assert_eq!(ab["b"], 2);
///
/// let ba = dictionary_union(&b, &a);
/// assert_eq!(ba["b"], 3);
/// ```
pub fn dictionary_union<K, V, S>(
    src1: &HashMap<K, V, S>,
    src2: &HashMap<K, V, S>,
) -> HashMap<K, V, S>
where
    K: Ord + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    if src1.is_empty() {
        return src2.clone();
    }
    if src2.is_empty() {
        return src1.clone();
    }

    let first = sorted_view(src1);
    let second = sorted_view(src2);

    let mut dst =
        HashMap::with_capacity_and_hasher(first.len().max(second.len()), src1.hasher().clone());
    let mut emit = |(k, v): (&K, &V)| {
        dst.insert(k.clone(), v.clone());
    };

    let (mut i, mut j) = (0, 0);
    while i < first.len() && j < second.len() {
        match first[i].0.cmp(second[j].0) {
            Ordering::Less => {
                emit(first[i]);
                i += 1;
            }
            Ordering::Greater => {
                emit(second[j]);
                j += 1;
            }
            Ordering::Equal => {
                emit(first[i]);
                i += 1;
                j += 1;
            }
        }
    }
    first[i..].iter().copied().for_each(&mut emit);
    second[j..].iter().copied().for_each(&mut emit);

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::hash::Hasher;

    /// Seeded hasher with only four distinct hash values, so most keys collide.
    #[derive(Clone, Debug)]
    struct Colliding(u64);

    #[derive(Debug)]
    struct CollidingHasher(u64);

    impl Hasher for CollidingHasher {
        fn finish(&self) -> u64 {
            self.0 & 3
        }

        fn write(&mut self, bytes: &[u8]) {
            for b in bytes {
                self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(*b));
            }
        }
    }

    impl BuildHasher for Colliding {
        type Hasher = CollidingHasher;

        fn build_hasher(&self) -> CollidingHasher {
            CollidingHasher(self.0)
        }
    }

    fn seeded(seed: u64, pairs: &[(&'static str, i32)]) -> HashMap<&'static str, i32, Colliding> {
        let mut m = HashMap::with_hasher(Colliding(seed));
        m.extend(pairs.iter().copied());
        m
    }

    fn map(pairs: &[(&'static str, i32)]) -> HashMap<&'static str, i32> {
        pairs.iter().copied().collect()
    }

    fn sorted_keys(m: &HashMap<&'static str, i32>) -> Vec<&'static str> {
        sorted_view(m).iter().map(|(k, _)| **k).collect()
    }

    #[test]
    fn empty_inputs_return_the_other_side() {
        let a = map(&[("a", 1), ("b", 2)]);
        let empty = map(&[]);
        assert_eq!(dictionary_union(&a, &empty), a);
        assert_eq!(dictionary_union(&empty, &a), a);
        assert!(dictionary_union(&empty, &empty).is_empty());
    }

    #[test]
    fn key_sets_commute_values_do_not() {
        let a = map(&[("a", 1), ("b", 2), ("x", 10)]);
        let b = map(&[("b", 3), ("c", 4), ("x", 20)]);
        let ab = dictionary_union(&a, &b);
        let ba = dictionary_union(&b, &a);
        assert_eq!(sorted_keys(&ab), sorted_keys(&ba));
        assert_eq!(sorted_keys(&ab), ["a", "b", "c", "x"]);
        assert_eq!((ab["b"], ab["x"]), (2, 10));
        assert_eq!((ba["b"], ba["x"]), (3, 20));
    }

    #[test]
    fn inputs_are_untouched() {
        let a = map(&[("a", 1)]);
        let b = map(&[("a", 5), ("z", 26)]);
        let _ = dictionary_union(&a, &b);
        assert_eq!(a, map(&[("a", 1)]));
        assert_eq!(b, map(&[("a", 5), ("z", 26)]));
    }

    #[test]
    fn disjoint_inputs_keep_everything() {
        let a = map(&[("m", 1), ("a", 2), ("q", 3)]);
        let b = map(&[("n", 4), ("b", 5), ("z", 6)]);
        let ab = dictionary_union(&a, &b);
        assert_eq!(ab.len(), 6);
        assert_eq!(sorted_keys(&ab), ["a", "b", "m", "n", "q", "z"]);
    }

    #[test]
    fn result_ignores_hash_order_and_seed() {
        let a = [("b", 1), ("d", 2), ("f", 3), ("h", 4), ("shared", 5), ("x", 6)];
        let b = [("a", 10), ("c", 20), ("shared", 50), ("x", 60), ("z", 70)];
        let mut a_rev = a;
        a_rev.reverse();
        let mut b_rev = b;
        b_rev.reverse();

        let expected = [
            ("a", 10),
            ("b", 1),
            ("c", 20),
            ("d", 2),
            ("f", 3),
            ("h", 4),
            ("shared", 5),
            ("x", 6),
            ("z", 70),
        ];
        let runs: [(u64, &[_], &[_]); 4] = [
            (0, &a, &b),
            (7, &a_rev, &b),
            (0x9e37_79b9, &a, &b_rev),
            (1, &a_rev, &b_rev),
        ];
        for (seed, src1, src2) in runs {
            let union = dictionary_union(&seeded(seed, src1), &seeded(seed.rotate_left(17), src2));
            assert_eq!(union, seeded(seed, &expected));
            let entries: Vec<_> = sorted_view(&union)
                .into_iter()
                .map(|(k, v)| (*k, *v))
                .collect();
            assert_eq!(entries, expected);
        }

        let plain = dictionary_union(&map(&a), &map(&b));
        assert_eq!(plain, map(&expected));
    }

    #[test]
    fn sorted_view_spills_past_inline_capacity() {
        let keys: Vec<&'static str> = alloc::vec![
            "t", "s", "r", "q", "p", "o", "n", "m", "l", "k", "j", "i", "h", "g", "f", "e", "d",
            "c", "b", "a",
        ];
        let m: HashMap<&'static str, i32> = keys.iter().map(|&k| (k, 0)).collect();
        let mut expected = keys.clone();
        expected.sort_unstable();
        assert_eq!(sorted_keys(&m), expected);
    }
}
