use thiserror::Error;

/// Errors raised while building character sets, configuring a generator
/// or persisting a profile.
///
/// None of these can be returned by `Generator::generate`: every check
/// happens synchronously when the configuration is built.
#[derive(Error, Debug)]
pub enum Error {
	/// A code-point range whose start is not strictly lower than its end.
	#[error("invalid character range: start {start:#x} must be lower than end {end:#x}")]
	InvalidRange { start: u32, end: u32 },

	/// A code-point range containing values that are not Unicode scalar values
	/// (the surrogate block `0xD800..=0xDFFF` or anything past `char::MAX`).
	#[error(
		"character range {start:#x}..={end:#x} contains code points that are not valid characters"
	)]
	NotACharacter { start: u32, end: u32 },

	/// The repetition cap cannot be honoured with the configured alphabet.
	///
	/// `alphabet_size` counts distinct characters across all sets.
	#[error(
		"not enough unique characters to satisfy the maximum repeating character constraint \
		 (length {length}, max repeating {max_repeating}, alphabet size {alphabet_size})"
	)]
	InsufficientAlphabet {
		length: usize,
		max_repeating: usize,
		alphabet_size: usize,
	},

	#[error("no character set configured")]
	NoCharacterSets,

	/// The character set at this position of the configured list is empty.
	#[error("character set #{0} is empty")]
	EmptyCharacterSet(usize),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("profile encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
