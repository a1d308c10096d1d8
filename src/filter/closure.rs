//! Closure generation: infima of filter families and filters generated by a base.
//!
//! The filter generated by a base family B is specified as the infimum of all
//! filters containing B. That quantifies over every filter, so instead we use
//! the finite-intersection form: t is accepted iff some finite subfamily
//! s₁ … sₙ of B has s₁ ∩ … ∩ sₙ ⊆ t (the empty subfamily giving the whole
//! carrier).
//!
//! Intersection is antitone, so for a finite base some subfamily works iff the
//! whole base does. Membership is therefore one subset check against the
//! intersection of the base, which is materialized once at construction.

use super::{Filter, Node};
use crate::carrier::{Carrier, Element};
use crate::error::Result;
use crate::set::PredSet;

/// The smallest filter accepting every set of a finite base family.
#[derive(Clone, Debug)]
pub struct GeneratedFilter<T> {
    carrier: Carrier<T>,
    base: Vec<PredSet<T>>,
    /// Intersection of the whole base, restricted to the carrier
    meet: PredSet<T>,
}

impl<T: Element> GeneratedFilter<T> {
    fn new(carrier: Carrier<T>, base: Vec<PredSet<T>>) -> Self {
        let extent = carrier.extent(&PredSet::intersection_all(base.iter().cloned()));
        let meet = carrier.set_of(&extent);
        Self {
            carrier,
            base,
            meet,
        }
    }

    /// The base family, in the order given
    pub fn base(&self) -> &[PredSet<T>] {
        &self.base
    }

    pub fn contains(&self, set: &PredSet<T>) -> bool {
        self.carrier.subset(&self.meet, set)
    }

    /// An inclusion-minimal subfamily (indices into the base) whose
    /// intersection lies inside `set`, or `None` if `set` is not accepted.
    pub fn witness(&self, set: &PredSet<T>) -> Option<Vec<usize>> {
        if !self.contains(set) {
            return None;
        }

        let mut chosen: Vec<usize> = (0..self.base.len()).collect();
        let mut i = 0;
        while i < chosen.len() {
            let trial: Vec<usize> = chosen
                .iter()
                .enumerate()
                .filter(|&(pos, _)| pos != i)
                .map(|(_, &idx)| idx)
                .collect();
            let meet = PredSet::intersection_all(trial.iter().map(|&idx| self.base[idx].clone()));
            if self.carrier.subset(&meet, set) {
                chosen = trial;
            } else {
                i += 1;
            }
        }

        tracing::trace!(witness = ?chosen, base_len = self.base.len(), "found generating subfamily");
        Some(chosen)
    }
}

impl<T: Element> Filter<T> {
    /// Infimum of a family: accepts the sets accepted by every member.
    ///
    /// All members must share the carrier. The empty family accepts every set.
    pub fn infimum(
        carrier: Carrier<T>,
        filters: impl IntoIterator<Item = Filter<T>>,
    ) -> Result<Self> {
        let filters: Vec<_> = filters.into_iter().collect();
        for f in &filters {
            carrier.ensure_compatible(f.carrier())?;
        }
        Ok(Self::from_node(carrier, Node::Infimum(filters)))
    }

    /// The smallest filter accepting every set of `base`
    pub fn generated_from(carrier: Carrier<T>, base: impl IntoIterator<Item = PredSet<T>>) -> Self {
        let generated = GeneratedFilter::new(carrier.clone(), base.into_iter().collect());
        Self::from_node(carrier, Node::Generated(generated))
    }
}
