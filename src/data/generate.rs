//! Deterministic synthetic referral dataset.
//!
//! Referrers come from a small slice of the pool so that referral chains of
//! length two exist, and spellings vary in case so the views' identity
//! handling is exercised by real data.

use super::ReferralRecord;
use super::seeded::rand_range;

const NAMES: &[&str] = &[
	"amelia", "bruno", "carmen", "dmitri", "elena", "farid", "greta", "hiro", "imogen", "jonas",
	"keiko", "liam", "maria", "nadia", "oscar", "priya", "quentin", "rosa", "stefan", "tara",
	"umar", "vera", "wendell", "xiomara",
];
const DOMAINS: &[&str] = &["example.com", "mailbox.org", "post.net", "inbox.io"];

/// Pool slot to a canonical lower-case email.
fn email(slot: usize) -> String {
	let name = NAMES[slot % NAMES.len()];
	let domain = DOMAINS[(slot / NAMES.len()) % DOMAINS.len()];
	format!("{}@{}", name, domain)
}

/// Vary the spelling without changing the identity.
fn with_casing(email: String, coin: f64) -> String {
	if coin < 0.15 {
		email.to_uppercase()
	} else if coin < 0.35 {
		let mut chars = email.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
			None => email,
		}
	} else {
		email
	}
}

/// Referrers are drawn from the front of the pool; referrals from anywhere.
const REFERRER_SLOTS: usize = 24;

fn pool_size() -> usize {
	NAMES.len() * DOMAINS.len()
}

/// Generate `count` referral records. The same `count` always yields the
/// same dataset.
pub fn generate_records(count: usize) -> Vec<ReferralRecord> {
	(0..count)
		.map(|i| {
			let referrer = rand_range(0.0, REFERRER_SLOTS as f64, i, "referrer") as usize;
			let mut referral1 = rand_range(0.0, pool_size() as f64, i, "referral1") as usize;
			let mut referral2 = rand_range(0.0, pool_size() as f64, i, "referral2") as usize;
			// A record never refers the referrer or the same person twice.
			if referral1 == referrer {
				referral1 = (referral1 + 1) % pool_size();
			}
			if referral2 == referrer || referral2 == referral1 {
				referral2 = (referral2 + 1) % pool_size();
				if referral2 == referrer || referral2 == referral1 {
					referral2 = (referral2 + 1) % pool_size();
				}
			}
			ReferralRecord {
				referrer: with_casing(email(referrer), rand_range(0.0, 1.0, i, "case-referrer")),
				referral1: with_casing(email(referral1), rand_range(0.0, 1.0, i, "case-referral1")),
				referral2: with_casing(email(referral2), rand_range(0.0, 1.0, i, "case-referral2")),
			}
		})
		.collect()
}
