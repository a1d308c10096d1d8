//! The convergence relation between filters.
//!
//! `tendsto(f, F, G)` holds when every set accepted by the pushforward of `F`
//! along `f` is accepted by `G`:
//!
//! ```text
//! ∀ t, F.contains(preimage(f, t)) ⟹ G.contains(t)
//! ```
//!
//! "F converges to x" is `tendsto(identity, F, nhds(x))`.

use crate::carrier::Element;
use crate::error::Result;
use crate::filter::Filter;
use crate::set::{identity, Mapping};

/// Decide `tendsto(f, source, target)`.
///
/// Both sides are principal on their kernels, so the quantifier over sets
/// reduces to `kernel(target) ⊆ kernel(map(f, source))`. Fails with
/// `EscapesCarrier` if `f` leaves the target's carrier.
pub fn tendsto<S: Element, T: Element>(
    f: &Mapping<S, T>,
    source: &Filter<S>,
    target: &Filter<T>,
) -> Result<bool> {
    let pushed = source.map(f, target.carrier())?;
    let holds = pushed.is_coarser_than(target)?;
    tracing::trace!(holds, "decided tendsto");
    Ok(holds)
}

/// Decide `tendsto(f, source, target)` by checking every subset of the
/// target's carrier. Bounded by the target carrier's limits.
pub fn tendsto_exhaustive<S: Element, T: Element>(
    f: &Mapping<S, T>,
    source: &Filter<S>,
    target: &Filter<T>,
) -> Result<bool> {
    source.carrier().check_maps_into(f, target.carrier())?;
    for (_, t) in target.carrier().powerset()? {
        if source.contains(&t.preimage(f)) && !target.contains(&t) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether `filter` converges to `x`: `tendsto(identity, filter, nhds(x))`.
///
/// Fails with `NotInCarrier` if `x` is not an element of the filter's carrier.
pub fn converges_to<T: Element>(filter: &Filter<T>, x: T) -> Result<bool> {
    let nhds = Filter::nhds(filter.carrier().clone(), x)?;
    tendsto(&identity(), filter, &nhds)
}
