// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `Rset` container and its iterators.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;

use hashbrown::{DefaultHashBuilder, HashTable};

use crate::error::RsetError;

/// A bidirectional one-to-one association between `K1` and `K2` values.
///
/// Entries keep their insertion order. Both key columns are unique, and each is
/// indexed by hash so either side finds its counterpart in expected O(1).
///
/// Two sets compare equal when they hold the same pairs, in any order; the
/// hasher does not take part in the comparison.
#[derive(Clone)]
pub struct Rset<K1, K2, S = DefaultHashBuilder> {
    entries: Vec<(K1, K2)>,
    // Positions into `entries`, hashed by the first/second key of the entry they point at.
    firsts: HashTable<usize>,
    seconds: HashTable<usize>,
    hash_builder: S,
}

impl<K1, K2> Rset<K1, K2, DefaultHashBuilder> {
    /// Create an empty set with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Create an empty set with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K1, K2, S: Default> Default for Rset<K1, K2, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K1, K2, S> Rset<K1, K2, S> {
    /// Create an empty set that hashes keys with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: Vec::new(),
            firsts: HashTable::new(),
            seconds: HashTable::new(),
            hash_builder,
        }
    }

    /// Create an empty set with room for `capacity` entries, hashing with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            firsts: HashTable::with_capacity(capacity),
            seconds: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Number of associations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no associations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every association, keeping allocated storage.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.firsts.clear();
        self.seconds.clear();
    }

    /// Iterate associations in insertion order.
    pub fn iter(&self) -> Iter<'_, K1, K2> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate first keys in insertion order.
    pub fn firsts(&self) -> impl DoubleEndedIterator<Item = &K1> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k1, _)| k1)
    }

    /// Iterate second keys in insertion order.
    pub fn seconds(&self) -> impl DoubleEndedIterator<Item = &K2> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, k2)| k2)
    }

    /// The hasher used for both key columns.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

impl<K1, K2, S> Rset<K1, K2, S>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
    S: BuildHasher,
{
    /// Build a set from `(first, second)` pairs, failing on the first collision.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, RsetError>
    where
        I: IntoIterator<Item = (K1, K2)>,
        S: Default,
    {
        let pairs = pairs.into_iter();
        let mut set = Self::with_capacity_and_hasher(pairs.size_hint().0, S::default());
        for (k1, k2) in pairs {
            set.push_back(k1, k2)?;
        }
        Ok(set)
    }

    /// Append the association `k1 <-> k2`.
    ///
    /// Fails with [`RsetError::DuplicateFirst`] if another entry already holds `k1`, or
    /// [`RsetError::DuplicateSecond`] if another entry already holds `k2`. The set is
    /// left unchanged on failure.
    pub fn push_back(&mut self, k1: K1, k2: K2) -> Result<(), RsetError> {
        let hash1 = self.hash_builder.hash_one(&k1);
        let hash2 = self.hash_builder.hash_one(&k2);
        if self.first_slot(hash1, &k1).is_some() {
            return Err(RsetError::DuplicateFirst);
        }
        if self.second_slot(hash2, &k2).is_some() {
            return Err(RsetError::DuplicateSecond);
        }

        let idx = self.entries.len();
        self.entries.push((k1, k2));
        let entries = &self.entries;
        let hash_builder = &self.hash_builder;
        self.firsts
            .insert_unique(hash1, idx, |&i| hash_builder.hash_one(&entries[i].0));
        self.seconds
            .insert_unique(hash2, idx, |&i| hash_builder.hash_one(&entries[i].1));
        Ok(())
    }

    /// The first key paired with `k2`.
    pub fn find1<Q>(&self, k2: &Q) -> Result<&K1, RsetError>
    where
        K2: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get1(k2).ok_or(RsetError::NotFound)
    }

    /// The second key paired with `k1`.
    pub fn find2<Q>(&self, k1: &Q) -> Result<&K2, RsetError>
    where
        K1: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get2(k1).ok_or(RsetError::NotFound)
    }

    /// Like [`find1`](Self::find1), but a miss is `None`.
    pub fn get1<Q>(&self, k2: &Q) -> Option<&K1>
    where
        K2: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.second_slot(self.hash_builder.hash_one(k2), k2)?;
        Some(&self.entries[idx].0)
    }

    /// Like [`find2`](Self::find2), but a miss is `None`.
    pub fn get2<Q>(&self, k1: &Q) -> Option<&K2>
    where
        K1: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.first_slot(self.hash_builder.hash_one(k1), k1)?;
        Some(&self.entries[idx].1)
    }

    /// Whether some entry holds `k1` as its first key.
    pub fn contains_first<Q>(&self, k1: &Q) -> bool
    where
        K1: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get2(k1).is_some()
    }

    /// Whether some entry holds `k2` as its second key.
    pub fn contains_second<Q>(&self, k2: &Q) -> bool
    where
        K2: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get1(k2).is_some()
    }

    /// Pair the entry holding `k1` with a new second key, returning the old one.
    ///
    /// This is the indexed assignment `set[k1] = k2`. Fails with
    /// [`RsetError::NotFound`] if no entry holds `k1`, and with
    /// [`RsetError::DuplicateSecond`] if a different entry already holds `k2`.
    /// Rebinding an entry to the second key it already has changes nothing.
    pub fn rebind_second<Q>(&mut self, k1: &Q, k2: K2) -> Result<K2, RsetError>
    where
        K1: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self
            .first_slot(self.hash_builder.hash_one(k1), k1)
            .ok_or(RsetError::NotFound)?;
        let new_hash = self.hash_builder.hash_one(&k2);
        if let Some(holder) = self.second_slot(new_hash, &k2) {
            if holder != idx {
                return Err(RsetError::DuplicateSecond);
            }
            return Ok(mem::replace(&mut self.entries[idx].1, k2));
        }

        let old_hash = self.hash_builder.hash_one(&self.entries[idx].1);
        if let Ok(slot) = self.seconds.find_entry(old_hash, |&i| i == idx) {
            let _ = slot.remove();
        }
        let old = mem::replace(&mut self.entries[idx].1, k2);
        let entries = &self.entries;
        let hash_builder = &self.hash_builder;
        self.seconds
            .insert_unique(new_hash, idx, |&i| hash_builder.hash_one(&entries[i].1));
        Ok(old)
    }

    /// Pair the entry holding `k2` with a new first key, returning the old one.
    ///
    /// Mirror of [`rebind_second`](Self::rebind_second): fails with
    /// [`RsetError::NotFound`] if no entry holds `k2`, and with
    /// [`RsetError::DuplicateFirst`] if a different entry already holds `k1`.
    pub fn rebind_first<Q>(&mut self, k2: &Q, k1: K1) -> Result<K1, RsetError>
    where
        K2: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self
            .second_slot(self.hash_builder.hash_one(k2), k2)
            .ok_or(RsetError::NotFound)?;
        let new_hash = self.hash_builder.hash_one(&k1);
        if let Some(holder) = self.first_slot(new_hash, &k1) {
            if holder != idx {
                return Err(RsetError::DuplicateFirst);
            }
            return Ok(mem::replace(&mut self.entries[idx].0, k1));
        }

        let old_hash = self.hash_builder.hash_one(&self.entries[idx].0);
        if let Ok(slot) = self.firsts.find_entry(old_hash, |&i| i == idx) {
            let _ = slot.remove();
        }
        let old = mem::replace(&mut self.entries[idx].0, k1);
        let entries = &self.entries;
        let hash_builder = &self.hash_builder;
        self.firsts
            .insert_unique(new_hash, idx, |&i| hash_builder.hash_one(&entries[i].0));
        Ok(old)
    }

    /// Remove the entry holding `k1`, returning its pair.
    ///
    /// Later entries keep their relative order. This is O(n) in the number of entries.
    pub fn remove_by_first<Q>(&mut self, k1: &Q) -> Option<(K1, K2)>
    where
        K1: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.first_slot(self.hash_builder.hash_one(k1), k1)?;
        Some(self.remove_at(idx))
    }

    /// Remove the entry holding `k2`, returning its pair.
    ///
    /// Later entries keep their relative order. This is O(n) in the number of entries.
    pub fn remove_by_second<Q>(&mut self, k2: &Q) -> Option<(K1, K2)>
    where
        K2: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.second_slot(self.hash_builder.hash_one(k2), k2)?;
        Some(self.remove_at(idx))
    }

    fn remove_at(&mut self, idx: usize) -> (K1, K2) {
        let hash1 = self.hash_builder.hash_one(&self.entries[idx].0);
        let hash2 = self.hash_builder.hash_one(&self.entries[idx].1);
        if let Ok(slot) = self.firsts.find_entry(hash1, |&i| i == idx) {
            let _ = slot.remove();
        }
        if let Ok(slot) = self.seconds.find_entry(hash2, |&i| i == idx) {
            let _ = slot.remove();
        }
        let pair = self.entries.remove(idx);
        // Positions after `idx` shifted down by one; hashes are unaffected.
        for pos in self.firsts.iter_mut().chain(self.seconds.iter_mut()) {
            if *pos > idx {
                *pos -= 1;
            }
        }
        debug_assert_eq!(
            self.firsts.len(),
            self.entries.len(),
            "first-key index out of sync after removal"
        );
        pair
    }

    fn first_slot<Q>(&self, hash: u64, k1: &Q) -> Option<usize>
    where
        K1: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.firsts
            .find(hash, |&i| <K1 as Borrow<Q>>::borrow(&self.entries[i].0) == k1)
            .copied()
    }

    fn second_slot<Q>(&self, hash: u64, k2: &Q) -> Option<usize>
    where
        K2: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.seconds
            .find(hash, |&i| <K2 as Borrow<Q>>::borrow(&self.entries[i].1) == k2)
            .copied()
    }
}

impl<K1, K2, S> PartialEq for Rset<K1, K2, S>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        // Both sides are one-to-one, so matching lengths plus every pair found in
        // `other` is enough.
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k1, k2)| other.get2(k1) == Some(k2))
    }
}

impl<K1: Hash + Eq, K2: Hash + Eq, S: BuildHasher> Eq for Rset<K1, K2, S> {}

impl<K1: Debug, K2: Debug, S> Debug for Rset<K1, K2, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k1, k2)| (k1, k2)))
            .finish()
    }
}

impl<'a, K1, K2, S> IntoIterator for &'a Rset<K1, K2, S> {
    type Item = (&'a K1, &'a K2);
    type IntoIter = Iter<'a, K1, K2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K1, K2, S> IntoIterator for Rset<K1, K2, S> {
    type Item = (K1, K2);
    type IntoIter = IntoIter<K1, K2>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Borrowing iterator over the associations of an [`Rset`], in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a, K1, K2> {
    inner: core::slice::Iter<'a, (K1, K2)>,
}

impl<'a, K1, K2> Iterator for Iter<'a, K1, K2> {
    type Item = (&'a K1, &'a K2);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k1, k2)| (k1, k2))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K1, K2> DoubleEndedIterator for Iter<'_, K1, K2> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k1, k2)| (k1, k2))
    }
}

impl<K1, K2> ExactSizeIterator for Iter<'_, K1, K2> {}

impl<K1, K2> FusedIterator for Iter<'_, K1, K2> {}

/// Owning iterator over the associations of an [`Rset`], in insertion order.
#[derive(Debug)]
pub struct IntoIter<K1, K2> {
    inner: alloc::vec::IntoIter<(K1, K2)>,
}

impl<K1, K2> Iterator for IntoIter<K1, K2> {
    type Item = (K1, K2);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K1, K2> DoubleEndedIterator for IntoIter<K1, K2> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K1, K2> ExactSizeIterator for IntoIter<K1, K2> {}

impl<K1, K2> FusedIterator for IntoIter<K1, K2> {}
