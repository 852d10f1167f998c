//! Influence weights per email.

use indexmap::IndexMap;

use crate::data::{ReferralRecord, identity};

/// Weight a referrer occurrence adds.
pub const REFERRER_WEIGHT: f64 = 10.0;
/// Weight a referral occurrence adds.
pub const REFERRAL_WEIGHT: f64 = 2.0;

/// One word of the cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct WordWeight {
	pub text: String,
	pub value: f64,
}

/// Cumulative influence per identity: +10 per record filed, +2 per mention
/// as a referral. Every email that appears gets an entry; nothing is dropped
/// for being light.
pub fn accumulate_influence(records: &[ReferralRecord]) -> Vec<WordWeight> {
	let mut weights: IndexMap<String, WordWeight> = IndexMap::new();
	for record in records.iter().filter(|r| r.is_well_formed()) {
		for email in record.emails() {
			weights.entry(identity(email)).or_insert_with(|| WordWeight {
				text: email.to_string(),
				value: 0.0,
			});
		}
		for (email, weight) in [
			(&record.referrer, REFERRER_WEIGHT),
			(&record.referral1, REFERRAL_WEIGHT),
			(&record.referral2, REFERRAL_WEIGHT),
		] {
			if let Some(word) = weights.get_mut(&identity(email)) {
				word.value += weight;
			}
		}
	}
	weights.into_values().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(referrer: &str, referral1: &str, referral2: &str) -> ReferralRecord {
		ReferralRecord {
			referrer: referrer.into(),
			referral1: referral1.into(),
			referral2: referral2.into(),
		}
	}

	#[test]
	fn weights_are_linear_and_additive() {
		let mut records = vec![record("a@x.com", "b@x.com", "c@x.com")];
		let words = accumulate_influence(&records);
		assert_eq!(words.len(), 3);
		let value = |words: &[WordWeight], text: &str| {
			words.iter().find(|w| w.text == text).unwrap().value
		};
		assert_eq!(value(&words, "a@x.com"), 10.0);
		assert_eq!(value(&words, "b@x.com"), 2.0);
		assert_eq!(value(&words, "c@x.com"), 2.0);

		records.push(record("a@x.com", "d@x.com", "e@x.com"));
		let words = accumulate_influence(&records);
		assert_eq!(value(&words, "a@x.com"), 20.0);
	}

	#[test]
	fn case_variants_accumulate_on_one_entry() {
		let records = [
			record("Ann@x.com", "bob@x.com", "cleo@x.com"),
			record("ANN@x.com", "bob@x.com", "cleo@x.com"),
		];
		let words = accumulate_influence(&records);
		assert_eq!(words.len(), 3);
		assert_eq!(words[0].text, "Ann@x.com");
		assert_eq!(words[0].value, 20.0);
	}

	#[test]
	fn an_email_that_both_refers_and_is_referred_sums_both_roles() {
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "a@x.com", "d@x.com"),
		];
		let words = accumulate_influence(&records);
		let a = words.iter().find(|w| w.text == "a@x.com").unwrap();
		assert_eq!(a.value, 12.0);
	}
}
