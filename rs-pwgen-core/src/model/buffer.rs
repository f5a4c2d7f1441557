use std::collections::{HashMap, HashSet};

/// Fixed-size buffer being filled during one generation.
///
/// Each slot is either empty (`None`) or holds its final character.
#[derive(Debug)]
pub(crate) struct OutputBuffer {
	slots: Vec<Option<char>>,
}

/// A buffer whose every slot holds a character.
///
/// Only obtainable through `OutputBuffer::into_filled`, so the repetition
/// repair never sees an empty slot.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FilledBuffer {
	chars: Vec<char>,
}

impl OutputBuffer {
	pub(crate) fn new(length: usize) -> Self {
		Self { slots: vec![None; length] }
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}

	/// Indices of the slots already holding a character.
	pub(crate) fn filled_indices(&self) -> HashSet<usize> {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(index, slot)| slot.map(|_| index))
			.collect()
	}

	pub(crate) fn set(&mut self, index: usize, c: char) {
		self.slots[index] = Some(c);
	}

	/// Returns the filled buffer, or gives `self` back if a slot is still empty.
	pub(crate) fn into_filled(self) -> Result<FilledBuffer, Self> {
		if self.slots.iter().any(Option::is_none) {
			return Err(self);
		}
		Ok(FilledBuffer { chars: self.slots.into_iter().flatten().collect() })
	}
}

impl FilledBuffer {
	/// First slot belonging to a character seen more than `max_repeating` times.
	///
	/// Groups are visited in order of first appearance and indices ascending,
	/// which is the same as the lowest index whose character is over the cap.
	pub(crate) fn first_over_cap(&self, max_repeating: usize) -> Option<usize> {
		let mut occurrences: HashMap<char, usize> = HashMap::new();
		for c in &self.chars {
			*occurrences.entry(*c).or_insert(0) += 1;
		}
		self.chars.iter().position(|c| occurrences[c] > max_repeating)
	}

	pub(crate) fn replace(&mut self, index: usize, c: char) {
		self.chars[index] = c;
	}

	pub(crate) fn into_string(self) -> String {
		self.chars.into_iter().collect()
	}
}
