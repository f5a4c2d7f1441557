use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::charset::CharacterSet;

/// Total number of characters across all sets.
///
/// Sets are not merged: a character present in two sets is counted twice.
pub fn alphabet_size(character_sets: &[CharacterSet]) -> usize {
	character_sets.iter().map(CharacterSet::count).sum()
}

/// Number of different characters across all sets.
///
/// Equal to `alphabet_size` when the sets are disjoint.
pub fn distinct_characters(character_sets: &[CharacterSet]) -> usize {
	character_sets.iter().flat_map(CharacterSet::chars).collect::<HashSet<char>>().len()
}

/// Checks that a generator configuration can always be satisfied.
///
/// # Errors
/// - `Error::NoCharacterSets` if `character_sets` is empty
/// - `Error::EmptyCharacterSet` for the first set with no character
/// - `Error::InsufficientAlphabet` if `max_repeating > 0` and
///   `length >= distinct_characters * max_repeating`: past that bound the
///   repetition repair could never settle. Characters shared by several sets
///   are only counted once.
///
/// A `max_repeating` of 0 means no cap and accepts any length.
pub fn validate(
	length: usize,
	max_repeating: usize,
	character_sets: &[CharacterSet],
) -> Result<()> {
	if character_sets.is_empty() {
		return Err(Error::NoCharacterSets);
	}
	if let Some(position) = character_sets.iter().position(CharacterSet::is_empty) {
		return Err(Error::EmptyCharacterSet(position));
	}

	if max_repeating > 0 {
		let alphabet_size = distinct_characters(character_sets);
		if length >= alphabet_size.saturating_mul(max_repeating) {
			return Err(Error::InsufficientAlphabet { length, max_repeating, alphabet_size });
		}
	}

	Ok(())
}
