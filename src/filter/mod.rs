//! Filters: families of sets closed under supersets and finite intersections.
//!
//! A filter on a carrier accepts or rejects each subset of it. Every filter
//! value satisfies three closure laws:
//!
//! 1. the whole carrier is accepted;
//! 2. supersets of accepted sets are accepted;
//! 3. intersections of two accepted sets are accepted.
//!
//! Filters are immutable and can only be produced by law-preserving
//! combinators, or by [`Filter::from_predicate`], which validates an arbitrary
//! membership predicate before accepting it.
//!
//! # Architecture
//!
//! - **closure**: infimum of a family of filters, filter generated by a base
//! - **map**: pushforward along a function
//! - **laws**: exhaustive law checking and validated construction
//! - **classify**: neBot and the ultrafilter tag
//!
//! Membership is decided on the *trace* of a set on the carrier; elements
//! outside the carrier never affect the answer. On a finite carrier every
//! filter is principal on its [`kernel`](Filter::kernel), which gives O(n)
//! decisions for equality and ordering.

mod classify;
mod closure;
mod laws;
mod map;

pub use classify::{Ultrafilter, UltrafilterExtension};
pub use closure::GeneratedFilter;
pub use map::Pushforward;

use crate::carrier::{Carrier, Element};
use crate::error::{FilterError, Result};
use crate::set::PredSet;
use roaring::{RoaringBitmap, RoaringTreemap};
use std::fmt;
use std::sync::Arc;

/// Set-in-filter membership.
///
/// This is the seam through which a pushforward hides the type of the filter
/// it was pushed from.
pub trait Membership<T>: Send + Sync {
    /// Whether `set` is accepted
    fn contains(&self, set: &PredSet<T>) -> bool;
}

/// A filter over a finite carrier.
#[derive(Clone)]
pub struct Filter<T> {
    carrier: Carrier<T>,
    node: Arc<Node<T>>,
}

/// How a filter decides membership.
pub(crate) enum Node<T> {
    /// Supersets of the generator
    Principal(PredSet<T>),
    /// Only the whole carrier
    Bot,
    /// Sets accepted by every member
    Infimum(Vec<Filter<T>>),
    /// Supersets of finite intersections of a base family
    Generated(GeneratedFilter<T>),
    /// Sets whose preimage is accepted upstream
    Pushforward(Arc<dyn Membership<T>>),
    /// Accepted masks of a validated predicate
    Validated(RoaringTreemap),
}

impl<T> Node<T> {
    fn kind(&self) -> &'static str {
        match self {
            Node::Principal(_) => "principal",
            Node::Bot => "bot",
            Node::Infimum(_) => "infimum",
            Node::Generated(_) => "generated",
            Node::Pushforward(_) => "pushforward",
            Node::Validated(_) => "validated",
        }
    }
}

impl<T: Element> Filter<T> {
    pub(crate) fn from_node(carrier: Carrier<T>, node: Node<T>) -> Self {
        tracing::debug!(kind = node.kind(), carrier_len = carrier.len(), "built filter");
        Self {
            carrier,
            node: Arc::new(node),
        }
    }

    /// The principal filter of `s`: exactly the supersets of `s`
    pub fn principal(carrier: Carrier<T>, s: PredSet<T>) -> Self {
        Self::from_node(carrier, Node::Principal(s))
    }

    /// The degenerate filter, whose only member is the whole carrier
    pub fn bot(carrier: Carrier<T>) -> Self {
        Self::from_node(carrier, Node::Bot)
    }

    /// Neighbourhood filter of a point: `principal({x})`.
    ///
    /// Fails with `NotInCarrier` if `x` is not an element of the carrier,
    /// whose trace would otherwise be empty.
    pub fn nhds(carrier: Carrier<T>, x: T) -> Result<Self> {
        if !carrier.contains(&x) {
            return Err(FilterError::NotInCarrier);
        }
        Ok(Self::principal(carrier, PredSet::singleton(x)))
    }

    pub fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    /// The base family, if this filter was built by `generated_from`
    pub fn generated(&self) -> Option<&GeneratedFilter<T>> {
        match &*self.node {
            Node::Generated(g) => Some(g),
            _ => None,
        }
    }

    /// Set-in-filter membership
    pub fn contains(&self, set: &PredSet<T>) -> bool {
        match &*self.node {
            Node::Principal(s) => self.carrier.subset(s, set),
            Node::Bot => self.carrier.is_universal(set),
            Node::Infimum(filters) => filters.iter().all(|f| f.contains(set)),
            Node::Generated(g) => g.contains(set),
            Node::Pushforward(p) => p.contains(set),
            Node::Validated(accepted) => accepted.contains(self.carrier.mask_of(set)),
        }
    }

    /// The intersection of all accepted sets.
    ///
    /// `x` is in the kernel iff the carrier minus `{x}` is rejected. The
    /// filter is then exactly the principal filter of its kernel.
    pub fn kernel(&self) -> PredSet<T> {
        let whole = self.carrier.whole();
        let extent: RoaringBitmap = self
            .carrier
            .iter()
            .enumerate()
            .filter(|(_, x)| !self.contains(&whole.difference(&PredSet::singleton((*x).clone()))))
            .map(|(idx, _)| idx as u32)
            .collect();
        tracing::trace!(kind = self.node.kind(), kernel = ?extent, "computed kernel");
        self.carrier.set_of(&extent)
    }

    /// Whether every set accepted by `self` is accepted by `other`
    pub fn is_coarser_than(&self, other: &Filter<T>) -> Result<bool> {
        self.carrier.ensure_compatible(&other.carrier)?;
        Ok(self.carrier.subset(&other.kernel(), &self.kernel()))
    }

    /// Extensional equality: both filters accept exactly the same sets
    pub fn equivalent(&self, other: &Filter<T>) -> Result<bool> {
        self.carrier.ensure_compatible(&other.carrier)?;
        Ok(self.carrier.set_eq(&self.kernel(), &other.kernel()))
    }
}

impl<T: Element> Membership<T> for Filter<T> {
    fn contains(&self, set: &PredSet<T>) -> bool {
        Filter::contains(self, set)
    }
}

impl<T: Element> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("kind", &self.node.kind())
            .field("carrier_len", &self.carrier.len())
            .finish()
    }
}
