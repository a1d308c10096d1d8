//! Predicate sets: subsets of a domain represented as membership tests.
//!
//! A `PredSet<T>` is a total function `T → bool`. Sets are immutable and
//! cheap to clone (the predicate is shared behind an `Arc`), so combinators
//! build new sets by composing closures rather than materializing anything.
//!
//! Equality is extensional and not decidable over an unbounded domain; the
//! decidable forms (subset, equality, image) live on [`Carrier`], which fixes
//! a finite enumeration of the domain.
//!
//! [`Carrier`]: crate::carrier::Carrier

use std::fmt;
use std::sync::Arc;

/// A shared function from `S` to `T`, used for preimages and pushforwards.
pub type Mapping<S, T> = Arc<dyn Fn(&S) -> T + Send + Sync>;

/// The identity mapping on `T`
pub fn identity<T: Clone + 'static>() -> Mapping<T, T> {
    Arc::new(|x: &T| x.clone())
}

/// A subset of `T`, given by its membership test.
pub struct PredSet<T> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Clone for PredSet<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for PredSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredSet(<predicate>)")
    }
}

impl<T: 'static> PredSet<T> {
    /// Create a set from a membership test
    pub fn new(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// The set with no members
    pub fn empty() -> Self {
        Self::new(|_| false)
    }

    /// The set of every element of `T`
    pub fn universal() -> Self {
        Self::new(|_| true)
    }

    /// Element-in-set membership
    #[inline]
    pub fn member(&self, x: &T) -> bool {
        (self.test)(x)
    }

    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |x| a.member(x) || b.member(x))
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |x| a.member(x) && b.member(x))
    }

    pub fn complement(&self) -> Self {
        let a = self.clone();
        Self::new(move |x| !a.member(x))
    }

    /// Members of `self` that are not members of `other`
    pub fn difference(&self, other: &Self) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |x| a.member(x) && !b.member(x))
    }

    /// Union over an explicit family. The empty family yields the empty set.
    pub fn union_all(family: impl IntoIterator<Item = PredSet<T>>) -> Self {
        let family: Vec<_> = family.into_iter().collect();
        Self::new(move |x| family.iter().any(|s| s.member(x)))
    }

    /// Intersection over an explicit family. The empty family yields the
    /// universal set.
    pub fn intersection_all(family: impl IntoIterator<Item = PredSet<T>>) -> Self {
        let family: Vec<_> = family.into_iter().collect();
        Self::new(move |x| family.iter().all(|s| s.member(x)))
    }

    /// `preimage(f, self)(x) = member(f(x), self)`
    pub fn preimage<S: 'static>(&self, f: &Mapping<S, T>) -> PredSet<S> {
        let t = self.clone();
        let f = Arc::clone(f);
        PredSet::new(move |x| t.member(&f(x)))
    }
}

impl<T: PartialEq + Send + Sync + 'static> PredSet<T> {
    /// The set `{x}`
    pub fn singleton(x: T) -> Self {
        Self::new(move |y| *y == x)
    }

    /// `self ∪ {x}`
    pub fn insert(&self, x: T) -> Self {
        let a = self.clone();
        Self::new(move |y| *y == x || a.member(y))
    }

    /// The finite set listing exactly `elements`
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let elements: Vec<T> = elements.into_iter().collect();
        Self::new(move |y| elements.contains(y))
    }
}
