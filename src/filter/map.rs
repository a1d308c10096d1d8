//! Pushforward of a filter along a function.
//!
//! `map(f, F)` accepts `t` iff `F` accepts `preimage(f, t)`. Preimage commutes
//! with intersection and sends the whole target carrier to the whole source
//! carrier (provided f stays inside the target), so all three laws carry over.

use super::{Filter, Membership, Node};
use crate::carrier::{Carrier, Element};
use crate::error::Result;
use crate::set::{Mapping, PredSet};
use std::sync::Arc;

/// A filter on `T` obtained by pushing a filter on `S` along `f`.
pub struct Pushforward<S, T> {
    source: Filter<S>,
    f: Mapping<S, T>,
}

impl<S: Element, T: 'static> Membership<T> for Pushforward<S, T> {
    fn contains(&self, set: &PredSet<T>) -> bool {
        self.source.contains(&set.preimage(&self.f))
    }
}

impl<S: Element> Filter<S> {
    /// Push this filter along `f` onto `target`.
    ///
    /// Fails with `EscapesCarrier` if `f` sends a carrier element outside
    /// `target`.
    pub fn map<T: Element>(&self, f: &Mapping<S, T>, target: &Carrier<T>) -> Result<Filter<T>> {
        self.carrier().check_maps_into(f, target)?;
        let pushed = Pushforward {
            source: self.clone(),
            f: Arc::clone(f),
        };
        Ok(Filter::from_node(target.clone(), Node::Pushforward(Arc::new(pushed))))
    }
}
