use std::collections::HashSet;

use rand::RngCore;

/// Source of cryptographically secure random numbers.
///
/// Implementors only provide raw bytes; the integer helpers are derived from them
/// so every source reduces values the same way.
///
/// ## Sampling
/// Selection uses modulo reduction of a 31-bit value, not rejection sampling.
/// For alphabets and buffers of a few hundred entries the bias is in the order of
/// `range / 2^31`, which is accepted.
pub trait RandomSource {
	/// Fills `dest` with random bytes.
	fn fill_bytes(&self, dest: &mut [u8]);

	/// Draws four bytes, reads them as a signed little-endian integer and
	/// returns its absolute value.
	///
	/// The minimum signed value has no positive counterpart in `i32`; it maps to
	/// `2^31` instead of overflowing.
	fn next_uint(&self) -> u32 {
		let mut buffer = [0u8; 4];
		self.fill_bytes(&mut buffer);
		i32::from_le_bytes(buffer).unsigned_abs()
	}

	/// Picks one index uniformly from `[start, end)` minus `excluded`.
	///
	/// Returns `None` when every index of the range is excluded.
	fn next_index_in_range(
		&self,
		start: usize,
		end: usize,
		excluded: &HashSet<usize>,
	) -> Option<usize> {
		let candidates: Vec<usize> =
			(start..end).filter(|index| !excluded.contains(index)).collect();
		if candidates.is_empty() {
			return None;
		}
		let pick = self.next_uint() as usize % candidates.len();
		Some(candidates[pick])
	}
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
	fn fill_bytes(&self, dest: &mut [u8]) {
		(**self).fill_bytes(dest)
	}
}

/// Operating-system backed generator.
///
/// Every draw goes through `rand::rng()`, the thread-local ChaCha-based CSPRNG
/// seeded and periodically reseeded from the OS. The handle is looked up per call,
/// so `SystemRandom` itself carries no state and is freely shared across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
	fn fill_bytes(&self, dest: &mut [u8]) {
		rand::rng().fill_bytes(dest);
	}
}
