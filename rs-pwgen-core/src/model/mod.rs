//! Top-level module for string generation.
//!
//! Contains:
//! - Character sets to draw from (`CharacterSet`)
//! - The transient buffer a string is assembled in (`OutputBuffer`)
//! - The generation algorithm (`Generator`)
//! - Persistent generator configuration (`Profile`)

/// Explicit and range-based character sets, plus the default alphabet.
pub mod charset;

/// Slot buffer filled during a single generation.
///
/// This module is not exposed publicly.
mod buffer;

/// Fixed-length string generator with coverage and repetition constraints.
///
/// Supports single and multithreaded batch generation.
pub mod generator;

/// Generator configuration stored on disk with `postcard`.
pub mod profile;
