//! Exhaustive closure-law checking and validated construction.
//!
//! Both operations enumerate the powerset of the carrier, so they are bounded
//! by the carrier's [`Limits`](crate::config::Limits).

use super::{Filter, Node};
use crate::carrier::{mask_indices, Carrier, Element};
use crate::error::{ClosureLaw, FilterError, Result};
use crate::set::PredSet;
use roaring::RoaringTreemap;

impl<T: Element> Filter<T> {
    /// Masks of every accepted subset of the carrier
    pub fn accepted_masks(&self) -> Result<RoaringTreemap> {
        accepted_masks(&self.carrier, |set| self.contains(set))
    }

    /// Verify the three closure laws over every subset of the carrier
    pub fn check_laws(&self) -> Result<()> {
        check_family(self.carrier.len(), &self.accepted_masks()?)
    }

    /// Build a filter from an arbitrary set-membership predicate.
    ///
    /// The predicate is evaluated once on every subset of the carrier and
    /// rejected with `LawViolation` unless the accepted family is a filter.
    pub fn from_predicate(
        carrier: Carrier<T>,
        predicate: impl Fn(&PredSet<T>) -> bool,
    ) -> Result<Self> {
        let accepted = accepted_masks(&carrier, predicate)?;
        if let Err(e) = check_family(carrier.len(), &accepted) {
            tracing::debug!(error = %e, "rejected membership predicate");
            return Err(e);
        }
        Ok(Self::from_node(carrier, Node::Validated(accepted)))
    }
}

fn accepted_masks<T: Element>(
    carrier: &Carrier<T>,
    predicate: impl Fn(&PredSet<T>) -> bool,
) -> Result<RoaringTreemap> {
    let mut accepted = RoaringTreemap::new();
    for (mask, set) in carrier.powerset()? {
        if predicate(&set) {
            accepted.insert(mask);
        }
    }
    Ok(accepted)
}

fn violation(law: ClosureLaw, masks: &[u64]) -> FilterError {
    FilterError::LawViolation {
        law,
        sets: masks.iter().map(|&m| mask_indices(m)).collect(),
    }
}

/// Check the closure laws on a family of subsets of an `n`-element carrier.
fn check_family(n: usize, accepted: &RoaringTreemap) -> Result<()> {
    let full = (1u64 << n) - 1;
    if !accepted.contains(full) {
        return Err(violation(ClosureLaw::UniversalMember, &[full]));
    }

    // Adding one element at a time reaches every superset
    for a in accepted.iter() {
        for bit in 0..n {
            let b = a | (1 << bit);
            if !accepted.contains(b) {
                return Err(violation(ClosureLaw::UpwardClosed, &[a, b]));
            }
        }
    }

    // Upward closure holds, so pairs of minimal members suffice
    let minimal: Vec<u64> = accepted
        .iter()
        .filter(|&a| (0..n).all(|bit| a & (1 << bit) == 0 || !accepted.contains(a & !(1 << bit))))
        .collect();
    for (i, &a) in minimal.iter().enumerate() {
        for &b in &minimal[i + 1..] {
            if !accepted.contains(a & b) {
                return Err(violation(ClosureLaw::IntersectionClosed, &[a, b]));
            }
        }
    }

    Ok(())
}
