use std::collections::HashMap;

/// Shannon entropy, in bits per character, of the character distribution
/// observed in `token`.
///
/// Computed as `-Σ p * log2(p)` with `p` the relative frequency of each
/// distinct character. An empty string or a string made of a single repeated
/// character has an entropy of 0.
pub fn per_character_entropy(token: &str) -> f64 {
	let length = token.chars().count();
	if length == 0 {
		return 0.0;
	}

	let mut frequencies: HashMap<char, usize> = HashMap::new();
	for c in token.chars() {
		*frequencies.entry(c).or_insert(0) += 1;
	}

	frequencies
		.values()
		.map(|&occurrence| occurrence as f64 / length as f64)
		.fold(0.0, |entropy, probability| entropy - probability * probability.log2())
}

/// Entropy, in bits, of a string of `length` characters drawn from an alphabet
/// of `alphabet_size` characters: `log2(alphabet_size ^ length)`.
///
/// Evaluated as `length * log2(alphabet_size)` so large lengths do not overflow.
pub fn theoretical_entropy(alphabet_size: usize, length: usize) -> f64 {
	if length == 0 {
		return 0.0;
	}
	length as f64 * (alphabet_size as f64).log2()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn test_distinct_characters() {
		assert!((per_character_entropy("abcd") - 2.0).abs() < EPSILON);
		assert!((per_character_entropy("0123456789abcdef") - 4.0).abs() < EPSILON);
	}

	#[test]
	fn test_repeated_character_has_no_entropy() {
		assert_eq!(per_character_entropy("a"), 0.0);
		assert_eq!(per_character_entropy("zzzzzzzz"), 0.0);
		assert_eq!(per_character_entropy(""), 0.0);
	}

	#[test]
	fn test_uneven_distribution() {
		assert!((per_character_entropy("aabb") - 1.0).abs() < EPSILON);
		// p = {1/2, 1/4, 1/4}
		assert!((per_character_entropy("aabc") - 1.5).abs() < EPSILON);
	}

	#[test]
	fn test_counts_characters_not_bytes() {
		assert!((per_character_entropy("éàçü") - 2.0).abs() < EPSILON);
	}

	#[test]
	fn test_theoretical_entropy() {
		assert!((theoretical_entropy(2, 8) - 8.0).abs() < EPSILON);
		assert!((theoretical_entropy(94, 16) - 16.0 * 94f64.log2()).abs() < EPSILON);
		assert_eq!(theoretical_entropy(94, 0), 0.0);
	}

	#[test]
	fn test_theoretical_entropy_does_not_overflow() {
		let bits = theoretical_entropy(94, 100_000);
		assert!(bits.is_finite());
		assert!((bits - 100_000.0 * 94f64.log2()).abs() < 1e-6);
	}

	proptest! {
		#[test]
		fn distinct_string_entropy_is_log2_of_length(n in 1u32..500) {
			let token: String = (0..n).filter_map(|i| char::from_u32(0x4E00 + i)).collect();
			prop_assert!((per_character_entropy(&token) - (n as f64).log2()).abs() < EPSILON);
		}

		#[test]
		fn theoretical_is_length_times_log2(range in 1usize..10_000, length in 1usize..1_000) {
			let expected = length as f64 * (range as f64).log2();
			prop_assert!((theoretical_entropy(range, length) - expected).abs() < 1e-6);
		}
	}
}
