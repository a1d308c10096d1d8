//! Decision limits.
//!
//! Operations that quantify over every subset of a carrier (law checking,
//! ultrafilter verification, exhaustive tendsto) enumerate 2ⁿ sets. These
//! limits bound n.

use crate::error::{FilterError, Result};

/// Default bound on carrier size for powerset enumeration.
pub const DEFAULT_MAX_POWERSET_BITS: u32 = 16;

/// Masks are `u64`, and enumeration past 2³⁰ sets is never practical.
pub const HARD_MAX_POWERSET_BITS: u32 = 30;

/// Environment variable read by [`Limits::from_env`].
pub const MAX_POWERSET_BITS_ENV: &str = "SETFILTER_MAX_POWERSET_BITS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Largest carrier (in elements) whose powerset may be enumerated
    pub max_powerset_bits: u32,
}

impl Limits {
    /// Create limits, clamping to [`HARD_MAX_POWERSET_BITS`]
    pub fn new(max_powerset_bits: u32) -> Self {
        Self {
            max_powerset_bits: max_powerset_bits.min(HARD_MAX_POWERSET_BITS),
        }
    }

    /// Read limits from [`MAX_POWERSET_BITS_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(MAX_POWERSET_BITS_ENV) {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(bits) => Self::new(bits),
                Err(e) => {
                    tracing::warn!(
                        var = MAX_POWERSET_BITS_ENV,
                        value = %raw,
                        error = %e,
                        "ignoring invalid powerset limit"
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Check that a carrier of `size` elements may have its powerset enumerated
    pub fn admit_powerset(&self, size: usize) -> Result<()> {
        if size > self.max_powerset_bits as usize {
            return Err(FilterError::CarrierTooLarge {
                size,
                max_bits: self.max_powerset_bits,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_powerset_bits: DEFAULT_MAX_POWERSET_BITS,
        }
    }
}
