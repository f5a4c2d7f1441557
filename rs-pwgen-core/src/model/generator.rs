use std::sync::mpsc;
use std::thread;

use crate::entropy;
use crate::error::Result;
use crate::model::buffer::{FilledBuffer, OutputBuffer};
use crate::model::charset::{default_sets, CharacterSet};
use crate::model::profile::Profile;
use crate::random::{RandomSource, SystemRandom};
use crate::validation;

/// Length used by both default flavours.
pub const DEFAULT_LENGTH: usize = 16;

/// Repetition cap of the password flavour.
pub const PASSWORD_MAX_REPEATING: usize = 16;

/// Repetition cap of the token flavour (0 = unbounded).
pub const TOKEN_MAX_REPEATING: usize = 0;

/// Fixed-length random string generator.
///
/// # Responsibilities
/// - Hold an immutable, validated configuration (length, repetition cap, character sets)
/// - Produce independent strings where every configured set contributes at least
///   one character and no character repeats more than the cap
///
/// # Invariants
/// - `character_sets` is non-empty and every set has at least one character
/// - if `max_repeating > 0`, `length < distinct_characters * max_repeating`,
///   characters shared by several sets being counted once
///
/// Generation never mutates the generator, so one instance can serve any number
/// of calls, from several threads when `R` is `Sync`.
#[derive(Clone, Debug)]
pub struct Generator<R = SystemRandom> {
	length: usize,
	max_repeating: usize,
	character_sets: Vec<CharacterSet>,
	source: R,
}

impl Generator<SystemRandom> {
	/// Creates a generator backed by the system CSPRNG.
	///
	/// # Errors
	/// Any configuration error reported by `validation::validate`.
	pub fn new(
		length: usize,
		max_repeating: usize,
		character_sets: Vec<CharacterSet>,
	) -> Result<Self> {
		Self::with_random_source(length, max_repeating, character_sets, SystemRandom)
	}

	/// Password flavour: 16 characters, each repeated at most 16 times,
	/// drawn from the default sets.
	pub fn password() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			max_repeating: PASSWORD_MAX_REPEATING,
			character_sets: default_sets(),
			source: SystemRandom,
		}
	}

	/// Token flavour: 16 characters from the default sets, no repetition cap.
	pub fn token() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			max_repeating: TOKEN_MAX_REPEATING,
			character_sets: default_sets(),
			source: SystemRandom,
		}
	}

	/// Builds a generator from a stored profile.
	///
	/// # Errors
	/// Returns the profile's validation error, if any.
	pub fn from_profile(profile: Profile) -> Result<Self> {
		Self::new(profile.length, profile.max_repeating, profile.character_sets)
	}
}

impl Default for Generator<SystemRandom> {
	fn default() -> Self {
		Self::password()
	}
}

impl<R: RandomSource> Generator<R> {
	/// Creates a generator drawing from `source`.
	///
	/// # Errors
	/// Any configuration error reported by `validation::validate`.
	pub fn with_random_source(
		length: usize,
		max_repeating: usize,
		character_sets: Vec<CharacterSet>,
		source: R,
	) -> Result<Self> {
		validation::validate(length, max_repeating, &character_sets)?;
		log::debug!(
			"generator configured: length {}, max repeating {}, {} character sets",
			length,
			max_repeating,
			character_sets.len()
		);
		Ok(Self { length, max_repeating, character_sets, source })
	}

	/// Replaces the configuration.
	///
	/// `None` selects the default character sets. On error the previous
	/// configuration is left untouched.
	///
	/// # Errors
	/// Any configuration error reported by `validation::validate`.
	pub fn configure(
		&mut self,
		length: usize,
		max_repeating: usize,
		character_sets: Option<Vec<CharacterSet>>,
	) -> Result<()> {
		let character_sets = character_sets.unwrap_or_else(default_sets);
		validation::validate(length, max_repeating, &character_sets)?;
		log::debug!(
			"generator reconfigured: length {}, max repeating {}, {} character sets",
			length,
			max_repeating,
			character_sets.len()
		);
		self.length = length;
		self.max_repeating = max_repeating;
		self.character_sets = character_sets;
		Ok(())
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn max_repeating(&self) -> usize {
		self.max_repeating
	}

	pub fn character_sets(&self) -> &[CharacterSet] {
		&self.character_sets
	}

	/// Sum of the sizes of the configured sets.
	pub fn alphabet_size(&self) -> usize {
		validation::alphabet_size(&self.character_sets)
	}

	/// Entropy in bits of the configured alphabet and length.
	pub fn theoretical_entropy(&self) -> f64 {
		entropy::theoretical_entropy(self.alphabet_size(), self.length)
	}

	/// Generates one string.
	///
	/// Runs three phases over a fresh buffer:
	/// 1. one character from each set, in configuration order, at a random empty slot
	/// 2. every remaining slot, in random order, from a uniformly chosen set
	/// 3. while a character occurs more than `max_repeating` times, redraw its
	///    first occurrence (skipped when the cap is 0)
	///
	/// Sets are chosen uniformly regardless of their size, so characters of
	/// small sets are more frequent than those of large ones.
	pub fn generate(&self) -> String {
		let mut buffer = OutputBuffer::new(self.length);
		self.seed_coverage(&mut buffer);
		let mut buffer = self.fill_remaining(buffer);
		self.repair_repetitions(&mut buffer);
		buffer.into_string()
	}

	/// Places one character of each set.
	///
	/// When the buffer has fewer slots than there are sets, the sets left over
	/// once it is full are skipped.
	fn seed_coverage(&self, buffer: &mut OutputBuffer) {
		for character_set in &self.character_sets {
			let filled = buffer.filled_indices();
			let Some(index) = self.source.next_index_in_range(0, buffer.len(), &filled) else {
				break;
			};
			buffer.set(index, character_set.random_char(&self.source));
		}
	}

	/// Fills every empty slot with a character from a random set.
	fn fill_remaining(&self, mut buffer: OutputBuffer) -> FilledBuffer {
		loop {
			let filled = buffer.filled_indices();
			match self.source.next_index_in_range(0, buffer.len(), &filled) {
				Some(index) => buffer.set(index, self.char_from_random_set()),
				None => break,
			}
		}

		match buffer.into_filled() {
			Ok(buffer) => buffer,
			// The loop above only ends once no index is left to pick.
			Err(_) => unreachable!("buffer still has empty slots after being filled"),
		}
	}

	/// Redraws over-represented characters until none exceeds the cap.
	///
	/// Termination is probabilistic: the configuration bound, taken over distinct
	/// characters, guarantees that a valid assignment exists, and each redraw has
	/// a fair chance to land on a character that is still under the cap.
	fn repair_repetitions(&self, buffer: &mut FilledBuffer) {
		if self.max_repeating == 0 {
			return;
		}

		let mut repairs = 0usize;
		while let Some(index) = buffer.first_over_cap(self.max_repeating) {
			buffer.replace(index, self.char_from_random_set());
			repairs += 1;
		}

		if repairs > 0 {
			log::trace!("{} characters redrawn to honour the repetition cap", repairs);
		}
	}

	fn char_from_random_set(&self) -> char {
		let index = self.source.next_uint() as usize % self.character_sets.len();
		self.character_sets[index].random_char(&self.source)
	}
}

impl<R: RandomSource + Sync> Generator<R> {
	/// Generates `count` independent strings on several threads.
	///
	/// # Behavior
	/// - Splits the work into one chunk per CPU (at most `count` chunks)
	/// - Each worker generates its chunk with the shared, read-only configuration
	/// - Results are collected through an MPSC channel; their order carries no meaning
	pub fn generate_batch(&self, count: usize) -> Vec<String> {
		if count == 0 {
			return Vec::new();
		}

		let workers = num_cpus::get().clamp(1, count);
		let chunk_size = count.div_ceil(workers);
		log::debug!("generating {} strings on {} workers", count, workers);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			let mut remaining = count;
			while remaining > 0 {
				let size = chunk_size.min(remaining);
				remaining -= size;

				let tx = tx.clone();
				scope.spawn(move || {
					let chunk: Vec<String> = (0..size).map(|_| self.generate()).collect();
					tx.send(chunk).expect("Failed to send from thread");
				});
			}
		});
		drop(tx);

		rx.iter().flatten().collect()
	}
}
