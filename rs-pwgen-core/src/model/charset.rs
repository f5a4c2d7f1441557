use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Symbols of the default alphabet (every printable ASCII punctuation character).
pub const DEFAULT_SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// A finite, ordered, deduplicated collection of characters that can be drawn
/// from uniformly at random.
///
/// Two variants exist:
/// - an explicit list of characters (`from_chars`)
/// - a contiguous, inclusive code-point range (`from_range`)
///
/// ## Invariants
/// - Characters of an explicit set are distinct and kept in order of first occurrence
/// - A range set always satisfies `start < end` and only covers valid `char`s,
///   so its `count` is at least 2
/// - An explicit set may be empty; drawing from it is a programming error
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "CharacterSetRepr", into = "CharacterSetRepr")]
pub struct CharacterSet {
	kind: Kind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
	Explicit(Vec<char>),
	Range { start: u32, end: u32 },
}

/// Wire form of a `CharacterSet`.
///
/// Decoding goes back through the public constructors, so a stored set is
/// deduplicated and range-checked again before it can be used.
#[derive(Serialize, Deserialize)]
enum CharacterSetRepr {
	Explicit(Vec<char>),
	Range { start: u32, end: u32 },
}

impl CharacterSet {
	/// Builds an explicit set, dropping duplicates and keeping the order in which
	/// characters first appear.
	pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
		let mut seen = HashSet::new();
		let chars = chars.into_iter().filter(|c| seen.insert(*c)).collect();
		Self { kind: Kind::Explicit(chars) }
	}

	/// Builds a set covering the inclusive code-point interval `[start, end]`.
	///
	/// # Errors
	/// - `Error::InvalidRange` if `start >= end`
	/// - `Error::NotACharacter` if the interval reaches into the surrogate block
	///   or past `char::MAX`
	pub fn from_range(start: u32, end: u32) -> Result<Self> {
		if start >= end {
			return Err(Error::InvalidRange { start, end });
		}
		let crosses_surrogates = start <= *SURROGATES.end() && end >= *SURROGATES.start();
		if end > char::MAX as u32 || crosses_surrogates {
			return Err(Error::NotACharacter { start, end });
		}
		Ok(Self { kind: Kind::Range { start, end } })
	}

	/// Same as `from_range`, with the bounds given as characters.
	pub fn from_char_range(start: char, end: char) -> Result<Self> {
		Self::from_range(start as u32, end as u32)
	}

	/// Number of distinct characters in the set.
	pub fn count(&self) -> usize {
		match &self.kind {
			Kind::Explicit(chars) => chars.len(),
			Kind::Range { start, end } => (end - start) as usize + 1,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}

	pub fn contains(&self, c: char) -> bool {
		match &self.kind {
			Kind::Explicit(chars) => chars.contains(&c),
			Kind::Range { start, end } => (*start..=*end).contains(&(c as u32)),
		}
	}

	/// Iterates over the characters in set order.
	pub fn chars(&self) -> Box<dyn Iterator<Item = char> + '_> {
		match &self.kind {
			Kind::Explicit(chars) => Box::new(chars.iter().copied()),
			Kind::Range { start, end } => Box::new((*start..=*end).filter_map(char::from_u32)),
		}
	}

	/// Draws one character uniformly (modulo reduction) from the set.
	///
	/// # Panics
	/// Panics if the set is empty. Generators refuse empty sets at configuration
	/// time, so reaching this is an internal fault.
	pub fn random_char<R: RandomSource + ?Sized>(&self, source: &R) -> char {
		let count = self.count();
		assert!(count > 0, "cannot draw a character from an empty character set");

		let offset = source.next_uint() as usize % count;
		match &self.kind {
			Kind::Explicit(chars) => chars[offset],
			Kind::Range { start, .. } => char::from_u32(start + offset as u32)
				.unwrap_or_else(|| unreachable!("range bounds are validated on construction")),
		}
	}

	/// Ranges known at compile time to be valid.
	fn ascii_range(start: char, end: char) -> Self {
		Self { kind: Kind::Range { start: start as u32, end: end as u32 } }
	}
}

/// The default alphabet, in configuration order:
/// lowercase latin, uppercase latin, digits, then `DEFAULT_SYMBOLS`.
pub fn default_sets() -> Vec<CharacterSet> {
	vec![
		CharacterSet::ascii_range('a', 'z'),
		CharacterSet::ascii_range('A', 'Z'),
		CharacterSet::ascii_range('0', '9'),
		CharacterSet::from_chars(DEFAULT_SYMBOLS.chars()),
	]
}

impl TryFrom<CharacterSetRepr> for CharacterSet {
	type Error = Error;

	fn try_from(repr: CharacterSetRepr) -> Result<Self> {
		match repr {
			CharacterSetRepr::Explicit(chars) => Ok(Self::from_chars(chars)),
			CharacterSetRepr::Range { start, end } => Self::from_range(start, end),
		}
	}
}

impl From<CharacterSet> for CharacterSetRepr {
	fn from(set: CharacterSet) -> Self {
		match set.kind {
			Kind::Explicit(chars) => CharacterSetRepr::Explicit(chars),
			Kind::Range { start, end } => CharacterSetRepr::Range { start, end },
		}
	}
}
