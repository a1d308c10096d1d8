//! Classification: degenerate filters and ultrafilters.

use super::Filter;
use crate::carrier::{mask_indices, Carrier, Element};
use crate::error::{FilterError, Result};
use crate::set::PredSet;
use std::fmt;
use std::ops::Deref;

impl<T: Element> Filter<T> {
    /// Neither `bot` nor the filter of all sets.
    ///
    /// `bot` accepts only the whole carrier, so on a non-empty carrier it
    /// rejects the empty set too. Rejecting ∅ alone does not rule it out.
    pub fn is_ne_bot(&self) -> bool {
        !self.contains(&PredSet::empty()) && !self.is_bot()
    }

    /// Whether this filter accepts only the whole carrier
    pub fn is_bot(&self) -> bool {
        self.carrier.is_universal(&self.kernel())
    }
}

/// A filter verified to be an ultrafilter: neBot, and for every subset S of
/// the carrier it accepts S or the complement of S.
#[derive(Clone)]
pub struct Ultrafilter<T>(Filter<T>);

impl<T: Element> Ultrafilter<T> {
    /// Verify the ultrafilter property over every subset of the carrier.
    pub fn try_from_filter(filter: Filter<T>) -> Result<Self> {
        if !filter.is_ne_bot() {
            return Err(FilterError::Degenerate);
        }
        for (mask, set) in filter.carrier().powerset()? {
            if !filter.contains(&set) && !filter.contains(&set.complement()) {
                return Err(FilterError::NotUltra {
                    undecided: mask_indices(mask),
                });
            }
        }
        Ok(Self(filter))
    }

    /// The ultrafilter of all sets containing `x`
    pub fn principal_at(carrier: Carrier<T>, x: T) -> Result<Self> {
        Self::try_from_filter(Filter::nhds(carrier, x)?)
    }

    pub fn as_filter(&self) -> &Filter<T> {
        &self.0
    }

    pub fn into_filter(self) -> Filter<T> {
        self.0
    }
}

impl<T: Element> fmt::Debug for Ultrafilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ultrafilter").field(&self.0).finish()
    }
}

impl<T> Deref for Ultrafilter<T> {
    type Target = Filter<T>;

    fn deref(&self) -> &Filter<T> {
        &self.0
    }
}

/// Extension of a filter to an ultrafilter containing it.
///
/// Existence of such an extension rests on a maximal-chain (choice) argument
/// and has no constructive witness in general. This crate provides no
/// implementation; callers that can produce extensions for their own carriers
/// may implement it, and must return an error rather than guess.
pub trait UltrafilterExtension<T: Element> {
    /// An ultrafilter accepting every set `filter` accepts
    fn extend(&self, filter: &Filter<T>) -> Result<Ultrafilter<T>>;
}
