//! Finite carriers: the enumerated domains that make set quantifiers decidable.
//!
//! A carrier is an ordered, duplicate-free list of domain elements. Each
//! element gets a compact index (its position), so a subset of the carrier
//! has a canonical *extent*: the bitmap of indices of its members.
//!
//! - `index_of(x)` → position of `x` (if it belongs to the carrier)
//! - `get(idx)` → the element at a position
//! - `extent(s)` → bitmap of members of `s` that lie in the carrier
//!
//! Every "for all x" in the filter layer runs over a carrier, and every
//! "for all sets" runs over its powerset (bounded by [`Limits`]).

use crate::config::Limits;
use crate::error::{FilterError, Result};
use crate::set::{Mapping, PredSet};
use indexmap::IndexSet;
use roaring::RoaringBitmap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Bounds required of carrier elements.
pub trait Element: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync + 'static> Element for T {}

/// A finite enumeration of domain elements.
///
/// Cloning is cheap: the element index is shared.
#[derive(Clone, Debug)]
pub struct Carrier<T> {
    /// Position → element (and via IndexSet, element → position)
    elements: Arc<IndexSet<T>>,
    /// Bounds on powerset enumeration
    limits: Limits,
}

impl<T: Element> Carrier<T> {
    /// Create a carrier from elements; duplicates keep their first position
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: Arc::new(elements.into_iter().collect()),
            limits: Limits::default(),
        }
    }

    /// Replace the decision limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the element at a position
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.elements.get_index(idx)
    }

    /// Look up the position of an element (if it belongs to the carrier)
    pub fn index_of(&self, x: &T) -> Option<usize> {
        self.elements.get_index_of(x)
    }

    pub fn contains(&self, x: &T) -> bool {
        self.elements.contains(x)
    }

    /// Iterate over elements in position order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }

    /// Whether two carriers hold the same elements (positions may differ)
    pub fn compatible(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements) || *self.elements == *other.elements
    }

    /// Fail unless `other` is compatible with `self`
    pub(crate) fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.compatible(other) {
            Ok(())
        } else {
            Err(FilterError::CarrierMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }

    /// The carrier itself, as a predicate set
    pub fn whole(&self) -> PredSet<T> {
        let elements = Arc::clone(&self.elements);
        PredSet::new(move |x| elements.contains(x))
    }

    /// `s ⊆ t`, decided pointwise over the carrier
    pub fn subset(&self, s: &PredSet<T>, t: &PredSet<T>) -> bool {
        self.iter().all(|x| !s.member(x) || t.member(x))
    }

    /// Extensional equality on the carrier
    pub fn set_eq(&self, s: &PredSet<T>, t: &PredSet<T>) -> bool {
        self.iter().all(|x| s.member(x) == t.member(x))
    }

    /// Whether `s` contains every carrier element
    pub fn is_universal(&self, s: &PredSet<T>) -> bool {
        self.iter().all(|x| s.member(x))
    }

    /// Whether `s` contains no carrier element
    pub fn is_void(&self, s: &PredSet<T>) -> bool {
        !self.iter().any(|x| s.member(x))
    }

    /// Bitmap of positions of the carrier elements that belong to `s`
    pub fn extent(&self, s: &PredSet<T>) -> RoaringBitmap {
        self.iter()
            .enumerate()
            .filter(|(_, x)| s.member(x))
            .map(|(idx, _)| idx as u32)
            .collect()
    }

    /// Sorted positions of the carrier elements that belong to `s`
    pub fn indices(&self, s: &PredSet<T>) -> Vec<u32> {
        self.extent(s).iter().collect()
    }

    /// The subset of the carrier whose positions are set in `extent`
    pub fn set_of(&self, extent: &RoaringBitmap) -> PredSet<T> {
        let elements = Arc::clone(&self.elements);
        let extent = extent.clone();
        PredSet::new(move |x| {
            elements
                .get_index_of(x)
                .is_some_and(|idx| extent.contains(idx as u32))
        })
    }

    /// Bit-mask form of an extent. Only meaningful below 64 elements, which
    /// [`Limits`] guarantees for any carrier admitted to powerset enumeration.
    pub(crate) fn mask_of(&self, s: &PredSet<T>) -> u64 {
        self.iter()
            .take(u64::BITS as usize)
            .enumerate()
            .filter(|(_, x)| s.member(x))
            .fold(0, |mask, (idx, _)| mask | (1 << idx))
    }

    /// The subset of the carrier whose positions are set in `mask`
    pub(crate) fn set_of_mask(&self, mask: u64) -> PredSet<T> {
        let elements = Arc::clone(&self.elements);
        PredSet::new(move |x| {
            elements
                .get_index_of(x)
                .is_some_and(|idx| idx < u64::BITS as usize && mask & (1 << idx) != 0)
        })
    }

    /// Enumerate every subset of the carrier as `(mask, set)`.
    ///
    /// Fails with `CarrierTooLarge` when the carrier exceeds the powerset limit.
    pub fn powerset(&self) -> Result<PowerSet<'_, T>> {
        self.limits.admit_powerset(self.len())?;
        Ok(PowerSet {
            carrier: self,
            next: 0,
            end: 1u64 << self.len(),
        })
    }

    /// `image(f, s)(y) = ∃x ∈ carrier, s(x) ∧ f(x) = y`
    pub fn image<U>(&self, f: &Mapping<T, U>, s: &PredSet<T>) -> PredSet<U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        let images: Vec<U> = self.iter().filter(|x| s.member(x)).map(|x| f(x)).collect();
        PredSet::new(move |y| images.contains(y))
    }

    /// Fail unless `f` sends every element of `self` into `target`
    pub fn check_maps_into<U: Element>(&self, f: &Mapping<T, U>, target: &Carrier<U>) -> Result<()> {
        match self.iter().position(|x| !target.contains(&f(x))) {
            Some(index) => Err(FilterError::EscapesCarrier { index }),
            None => Ok(()),
        }
    }
}

/// Iterator over every subset of a carrier, in mask order.
pub struct PowerSet<'a, T> {
    carrier: &'a Carrier<T>,
    next: u64,
    end: u64,
}

impl<'a, T: Element> Iterator for PowerSet<'a, T> {
    type Item = (u64, PredSet<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some((mask, self.carrier.set_of_mask(mask)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

/// Positions set in a mask, for error reporting
pub(crate) fn mask_indices(mask: u64) -> Vec<u32> {
    (0..u64::BITS).filter(|bit| mask & (1 << bit) != 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_basic() {
        let carrier = Carrier::new(['a', 'b', 'c', 'a']);
        assert_eq!(carrier.len(), 3);
        assert_eq!(carrier.index_of(&'c'), Some(2));
        assert_eq!(carrier.get(1), Some(&'b'));
        assert!(!carrier.contains(&'z'));
    }

    #[test]
    fn test_extent_roundtrip() {
        let carrier = Carrier::new(0u32..8);
        let odd = PredSet::new(|x: &u32| x % 2 == 1);
        let extent = carrier.extent(&odd);
        assert_eq!(extent.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
        assert!(carrier.set_eq(&carrier.set_of(&extent), &odd));
    }

    #[test]
    fn test_subset_is_relative_to_carrier() {
        let carrier = Carrier::new(0u32..4);
        let s = PredSet::from_elements([1u32, 2, 100]);
        let t = PredSet::from_elements([1u32, 2, 3]);
        assert!(carrier.subset(&s, &t));
        assert!(!carrier.subset(&t, &s));
    }

    #[test]
    fn test_powerset_count() {
        let carrier = Carrier::new(0u32..4);
        let sets: Vec<_> = carrier.powerset().unwrap().collect();
        assert_eq!(sets.len(), 16);
        for (mask, set) in &sets {
            assert_eq!(carrier.mask_of(set), *mask);
        }
    }

    #[test]
    fn test_powerset_refused_past_limit() {
        let carrier = Carrier::new(0u32..5).with_limits(Limits::new(4));
        assert!(matches!(
            carrier.powerset(),
            Err(FilterError::CarrierTooLarge { size: 5, max_bits: 4 })
        ));
    }

    #[test]
    fn test_image() {
        let carrier = Carrier::new(0u32..5);
        let square: Mapping<u32, u32> = Arc::new(|x: &u32| x * x);
        let img = carrier.image(&square, &PredSet::from_elements([1u32, 3]));
        assert!(img.member(&1) && img.member(&9));
        assert!(!img.member(&3) && !img.member(&4));
    }

    #[test]
    fn test_check_maps_into() {
        let source = Carrier::new(0u32..3);
        let target = Carrier::new(0u32..5);
        let double: Mapping<u32, u32> = Arc::new(|x: &u32| 2 * x);
        let triple: Mapping<u32, u32> = Arc::new(|x: &u32| 3 * x);
        assert!(source.check_maps_into(&double, &target).is_ok());
        assert_eq!(
            source.check_maps_into(&triple, &target),
            Err(FilterError::EscapesCarrier { index: 2 })
        );
    }

    #[test]
    fn test_mask_indices() {
        assert_eq!(mask_indices(0b1011), vec![0, 1, 3]);
    }
}
