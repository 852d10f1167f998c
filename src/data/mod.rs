//! Referral records and the dataset operations the dashboard shell needs.

pub mod generate;
pub mod seeded;

use std::collections::HashSet;

use indexmap::IndexMap;

/// One referral: a referrer and the two people they referred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralRecord {
	pub referrer: String,
	pub referral1: String,
	pub referral2: String,
}

impl ReferralRecord {
	/// A record with an empty field carries no usable identity and is skipped
	/// by every transform.
	pub fn is_well_formed(&self) -> bool {
		!self.referrer.is_empty() && !self.referral1.is_empty() && !self.referral2.is_empty()
	}

	/// The three emails in field order.
	pub fn emails(&self) -> [&str; 3] {
		[&self.referrer, &self.referral1, &self.referral2]
	}
}

/// The lower-cased form of an email, the unique identity shared by all views.
/// Display labels keep whichever spelling was seen first.
pub fn identity(email: &str) -> String {
	email.to_lowercase()
}

/// Every distinct email in the dataset, labelled by its first-seen spelling
/// and sorted by identity. Drives the email selector.
pub fn distinct_emails(records: &[ReferralRecord]) -> Vec<String> {
	let mut emails: IndexMap<String, String> = IndexMap::new();
	for record in records.iter().filter(|r| r.is_well_formed()) {
		for email in record.emails() {
			emails.entry(identity(email)).or_insert_with(|| email.to_string());
		}
	}
	emails.sort_keys();
	emails.into_values().collect()
}

/// Records reachable from `referrer`: the selected email's own records plus
/// every record filed by one of its referrals. Matching is by identity, and
/// reapplying the filter with the same argument is a no-op.
pub fn filter_by_referrer(records: &[ReferralRecord], referrer: &str) -> Vec<ReferralRecord> {
	let root = identity(referrer);
	let mut reachable: HashSet<String> = HashSet::new();
	for record in records.iter().filter(|r| r.is_well_formed()) {
		if identity(&record.referrer) == root {
			for email in record.emails() {
				reachable.insert(identity(email));
			}
		}
	}
	records
		.iter()
		.filter(|record| reachable.contains(&identity(&record.referrer)))
		.cloned()
		.collect()
}
