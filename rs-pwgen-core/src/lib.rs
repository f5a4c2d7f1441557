//! Constrained random string generation.
//!
//! This crate builds fixed-length passwords and tokens from configurable
//! character sets:
//! - Every configured set contributes at least one character
//! - No character repeats more than a configurable number of times
//! - All randomness comes from a cryptographically secure source
//! - Entropy helpers characterize the generated strings
//!
//! ```no_run
//! use rs_pwgen_core::model::charset::CharacterSet;
//! use rs_pwgen_core::model::generator::Generator;
//!
//! let password = Generator::password().generate();
//! assert_eq!(password.chars().count(), 16);
//!
//! let hex = CharacterSet::from_chars("0123456789abcdef".chars());
//! let token = Generator::new(32, 0, vec![hex])?.generate();
//! # Ok::<(), rs_pwgen_core::Error>(())
//! ```

/// Character sets, generator and stored profiles.
pub mod model;

/// Cryptographically secure random source used for every draw.
pub mod random;

/// Shannon and theoretical entropy estimation.
///
/// Diagnostic only: generation never depends on it.
pub mod entropy;

/// Feasibility checks run whenever a configuration is built.
pub mod validation;

pub mod error;

/// File helpers for profile storage.
///
/// Not exposed
pub(crate) mod io;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
