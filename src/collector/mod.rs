//! Index-addressed collection with tombstone removal.
//!
//! Every element keeps the index it was given by [`Collector::add`] until the
//! collection is cleared or reloaded. Removing an element only marks its slot;
//! removed slots are dropped when the collection is saved.

mod persist;

use std::{
    iter::{Enumerate, FusedIterator, Zip},
    mem,
    ops::Index,
    slice,
};

use crate::{logging::collector_log, option::CollectorOption};

/// Growable collection whose indices stay stable across removals.
///
/// `items`, `removed` always have the same length and `removed_count` is the
/// number of set flags in `removed`.
#[derive(Debug, Clone)]
pub struct Collector<T> {
    items: Vec<T>,
    removed: Vec<bool>,
    removed_count: usize,
    option: CollectorOption,
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::with_option(CollectorOption::default())
    }
}

impl<T> Collector<T> {
    /// Empty collection with default persistence settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collection using `option` for load and save.
    pub fn with_option(option: CollectorOption) -> Self {
        Collector {
            items: Vec::new(),
            removed: Vec::new(),
            removed_count: 0,
            option,
        }
    }

    /// Empty collection with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Collector {
            items: Vec::with_capacity(capacity),
            removed: Vec::with_capacity(capacity),
            removed_count: 0,
            option: CollectorOption::default(),
        }
    }

    /// Persistence settings.
    pub fn option(&self) -> &CollectorOption {
        &self.option
    }

    /// Number of slots, removed ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of removed slots.
    pub fn removed_count(&self) -> usize {
        self.removed_count
    }

    /// Number of slots that are not removed.
    pub fn active_len(&self) -> usize {
        self.items.len() - self.removed_count
    }

    /// Element stored at `index`, whether or not it has been removed.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.check_index(index);
        &self.items[index]
    }

    /// Whether the slot at `index` has been removed.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn is_removed(&self, index: usize) -> bool {
        self.check_index(index);
        self.removed[index]
    }

    /// Append `item` and return its index.
    pub fn add(&mut self, item: T) -> usize {
        let index = self.items.len();
        self.items.push(item);
        self.removed.push(false);
        index
    }

    /// Mark the slot at `index` removed. Returns `false` if it already was.
    ///
    /// The element itself stays in place and [`Collector::len`] is unchanged.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> bool {
        self.check_index(index);
        if self.removed[index] {
            return false;
        }
        self.removed[index] = true;
        self.removed_count += 1;
        true
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// The removal flag of the slot is left untouched.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn update(&mut self, index: usize, item: T) -> T {
        self.check_index(index);
        mem::replace(&mut self.items[index], item)
    }

    /// Drop every slot and reset the removal count.
    pub fn clear(&mut self) {
        collector_log!(
            log::Level::Debug,
            "collection_cleared",
            "slots={} removed={}",
            self.items.len(),
            self.removed_count
        );
        self.items.clear();
        self.removed.clear();
        self.removed_count = 0;
    }

    /// Every slot in index order as `(index, element, removed)`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().zip(self.removed.iter()).enumerate(),
        }
    }

    /// Slots that are not removed, as `(index, element)`.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.iter()
            .filter(|(_, _, removed)| !removed)
            .map(|(index, item, _)| (index, item))
    }

    #[track_caller]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {} out of bounds for collector of length {}",
            index,
            self.items.len()
        );
    }

    fn invariant(&self) -> bool {
        self.items.len() == self.removed.len()
            && self.removed_count == self.removed.iter().filter(|removed| **removed).count()
    }
}

impl<T> Index<usize> for Collector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> Extend<T> for Collector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for Collector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collector = Collector::new();
        collector.extend(iter);
        collector
    }
}

impl<'a, T> IntoIterator for &'a Collector<T> {
    type Item = (usize, &'a T, bool);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the slots of a [`Collector`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Enumerate<Zip<slice::Iter<'a, T>, slice::Iter<'a, bool>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T, bool);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, (item, removed))| (index, item, *removed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
