use std::cell::RefCell;
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::random::RandomSource;

/// Replays a fixed list of signed integers, one per 4-byte draw.
///
/// Panics once the script is exhausted so a test notices unexpected draws.
pub(crate) struct ScriptedRandom {
	values: RefCell<VecDeque<i32>>,
}

impl ScriptedRandom {
	pub(crate) fn new(values: &[i32]) -> Self {
		Self { values: RefCell::new(values.iter().copied().collect()) }
	}

	pub(crate) fn remaining(&self) -> usize {
		self.values.borrow().len()
	}
}

impl RandomSource for ScriptedRandom {
	fn fill_bytes(&self, dest: &mut [u8]) {
		assert_eq!(dest.len(), 4, "scripted source only serves 4-byte draws");
		let value = self.values.borrow_mut().pop_front().expect("random script exhausted");
		dest.copy_from_slice(&value.to_le_bytes());
	}
}

/// Deterministic source for reproducible runs.
pub(crate) struct SeededRandom {
	rng: RefCell<StdRng>,
}

impl SeededRandom {
	pub(crate) fn new(seed: u64) -> Self {
		Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
	}
}

impl RandomSource for SeededRandom {
	fn fill_bytes(&self, dest: &mut [u8]) {
		self.rng.borrow_mut().fill_bytes(dest);
	}
}
