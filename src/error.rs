//! Error types for filter construction and decision procedures.

use std::fmt;

/// One of the three closure laws every filter satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClosureLaw {
    /// The whole carrier is a member.
    UniversalMember,
    /// Supersets of members are members.
    UpwardClosed,
    /// Intersections of two members are members.
    IntersectionClosed,
}

impl fmt::Display for ClosureLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureLaw::UniversalMember => write!(f, "universal set is not a member"),
            ClosureLaw::UpwardClosed => write!(f, "membership is not closed upward"),
            ClosureLaw::IntersectionClosed => {
                write!(f, "membership is not closed under intersection")
            }
        }
    }
}

/// Errors raised by filter constructors and decision procedures.
///
/// Sets are reported by their extents: sorted carrier indices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A membership predicate failed validation.
    #[error("{law}: witness sets {sets:?}")]
    LawViolation { law: ClosureLaw, sets: Vec<Vec<u32>> },

    /// The carrier is too large to enumerate its powerset.
    #[error("carrier of {size} elements exceeds the powerset limit of 2^{max_bits}")]
    CarrierTooLarge { size: usize, max_bits: u32 },

    /// Two filters that must share a carrier do not.
    #[error("carrier mismatch: {left} elements vs {right} elements")]
    CarrierMismatch { left: usize, right: usize },

    /// A function sends a carrier element outside the target carrier.
    #[error("carrier element #{index} is mapped outside the target carrier")]
    EscapesCarrier { index: usize },

    /// A point is not an element of the carrier.
    #[error("point is not an element of the carrier")]
    NotInCarrier,

    /// The filter is `bot` or contains the empty set.
    #[error("filter is degenerate: it is bot or contains the empty set")]
    Degenerate,

    /// The filter decides neither a set nor its complement.
    #[error("filter decides neither {undecided:?} nor its complement")]
    NotUltra { undecided: Vec<u32> },
}

pub type Result<T> = std::result::Result<T, FilterError>;
