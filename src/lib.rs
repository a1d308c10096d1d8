//! Setfilter: predicate sets and filters over finite carriers
//!
//! Sets are membership predicates; filters are families of sets that contain
//! the whole domain and are closed under supersets and finite intersections.
//! Filters generalize "eventually" and "arbitrarily close to", and the
//! [`tendsto()`] relation built on them expresses limits without sequences.
//!
//! Filters are immutable values built only by law-preserving combinators:
//! principal and degenerate filters, infima, filters generated by a base
//! family, and pushforwards along functions. Every quantifier over elements
//! runs over a finite [`Carrier`], which makes membership, ordering and
//! equality decidable.

pub mod carrier;
pub mod config;
pub mod error;
pub mod filter;
pub mod set;
pub mod tendsto;

pub use carrier::{Carrier, Element, PowerSet};
pub use config::Limits;
pub use error::{ClosureLaw, FilterError, Result};
pub use filter::{Filter, GeneratedFilter, Membership, Pushforward, Ultrafilter, UltrafilterExtension};
pub use set::{identity, Mapping, PredSet};
pub use tendsto::{converges_to, tendsto, tendsto_exhaustive};
