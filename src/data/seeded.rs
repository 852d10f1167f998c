//! Stable seeded pseudo-random values.
//!
//! Layout code draws distances and angles from here so that the same
//! `(key, index)` pair always produces the same value, making layouts
//! reproducible across renders for the same edge ordering.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Unit-interval value derived deterministically from `key` and `index`.
fn seeded_unit(key: &str, index: usize) -> f64 {
	let mut hasher = DefaultHasher::new();
	key.hash(&mut hasher);
	index.hash(&mut hasher);
	let seed = (hasher.finish() % 233_280) as u64;
	let x = (seed + 1) * 9301 + 49297;
	(x % 233_280) as f64 / 233_280.0
}

/// Deterministic value in `[low, high)` for the given `(index, key)` pair.
pub fn rand_range(low: f64, high: f64, index: usize, key: &str) -> f64 {
	low + seeded_unit(key, index) * (high - low)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_value() {
		assert_eq!(rand_range(0.0, 1.0, 7, "abc"), rand_range(0.0, 1.0, 7, "abc"));
	}

	#[test]
	fn values_stay_in_range() {
		for index in 0..100 {
			let value = rand_range(100.0, 180.0, index, "ring");
			assert!((100.0..180.0).contains(&value), "out of range: {}", value);
		}
	}

	#[test]
	fn index_and_key_both_vary_the_value() {
		let base = rand_range(0.0, 1.0, 0, "abc");
		assert!((0..50).any(|i| rand_range(0.0, 1.0, i, "abc") != base));
		assert!((0..50).any(|i| rand_range(0.0, 1.0, 0, &format!("k{}", i)) != base));
	}

	#[test]
	fn degenerate_range_collapses() {
		assert_eq!(rand_range(42.0, 42.0, 3, "abc"), 42.0);
	}
}
