use std::collections::{HashMap, HashSet};

use rs_pwgen_core::entropy::{per_character_entropy, theoretical_entropy};
use rs_pwgen_core::model::charset::{default_sets, CharacterSet, DEFAULT_SYMBOLS};
use rs_pwgen_core::model::generator::Generator;
use rs_pwgen_core::Error;

fn has_lower(s: &str) -> bool {
	s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_upper(s: &str) -> bool {
	s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(s: &str) -> bool {
	s.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(s: &str) -> bool {
	s.chars().any(|c| DEFAULT_SYMBOLS.contains(c))
}

fn max_occurrence(s: &str) -> usize {
	let mut occurrences: HashMap<char, usize> = HashMap::new();
	for c in s.chars() {
		*occurrences.entry(c).or_insert(0) += 1;
	}
	occurrences.into_values().max().unwrap_or(0)
}

#[test]
fn custom_options_are_honoured() {
	let generator = Generator::new(24, 2, default_sets()).unwrap();

	for _ in 0..10_000 {
		let token = generator.generate();
		assert_eq!(token.chars().count(), 24);
		assert!(has_lower(&token), "{token}");
		assert!(has_upper(&token), "{token}");
		assert!(has_digit(&token), "{token}");
		assert!(has_symbol(&token), "{token}");
		assert!(max_occurrence(&token) <= 2, "{token}");
	}
}

#[test]
fn default_options_are_honoured() {
	for generator in [Generator::password(), Generator::token()] {
		for _ in 0..10_000 {
			let token = generator.generate();
			assert_eq!(token.chars().count(), 16);
			assert!(has_lower(&token) && has_upper(&token), "{token}");
			assert!(has_digit(&token) && has_symbol(&token), "{token}");
		}
	}
}

#[test]
fn infeasible_repetition_cap_is_rejected() {
	let abc = vec![CharacterSet::from_chars("abc".chars())];
	let result = Generator::new(6, 1, abc);
	assert!(matches!(
		result,
		Err(Error::InsufficientAlphabet { length: 6, max_repeating: 1, alphabet_size: 3 })
	));
}

#[test]
fn uncapped_generation_may_repeat() {
	let abc = vec![CharacterSet::from_chars("abc".chars())];
	let generator = Generator::new(6, 0, abc).unwrap();

	let mut repeated = false;
	for _ in 0..100 {
		let token = generator.generate();
		assert_eq!(token.chars().count(), 6);
		assert!(token.chars().all(|c| "abc".contains(c)));
		repeated |= max_occurrence(&token) > 1;
	}
	// Six slots over three characters always repeat something.
	assert!(repeated);
}

#[test]
fn every_set_is_covered() {
	let sets = vec![
		CharacterSet::from_char_range('a', 'z').unwrap(),
		CharacterSet::from_chars("€£¥".chars()),
		CharacterSet::from_char_range('0', '1').unwrap(),
	];
	let generator = Generator::new(5, 2, sets.clone()).unwrap();

	for _ in 0..5_000 {
		let token = generator.generate();
		for set in &sets {
			assert!(token.chars().any(|c| set.contains(c)), "{token}");
		}
		assert!(max_occurrence(&token) <= 2);
	}
}

#[test]
fn entropy_of_generated_strings() {
	let generator = Generator::new(32, 1, default_sets()).unwrap();
	let token = generator.generate();

	// All characters are distinct with a cap of 1.
	assert!((per_character_entropy(&token) - 5.0).abs() < 1e-9);
	assert!((generator.theoretical_entropy() - theoretical_entropy(94, 32)).abs() < 1e-9);
}

/// Smoke test for randomness quality: 200k default tokens carry about 105 bits
/// each, a collision would point at a broken source.
#[test]
fn default_tokens_are_unique() {
	let generator = Generator::token();
	let tokens = generator.generate_batch(200_000);
	assert_eq!(tokens.len(), 200_000);

	let unique: HashSet<&String> = tokens.iter().collect();
	assert_eq!(unique.len(), tokens.len());
}
