//! Referral activity tallies.

use indexmap::IndexMap;

use crate::data::{ReferralRecord, identity};

/// Activity of one email: records filed as referrer, times named as a
/// referral.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRow {
	pub label: String,
	pub records_filed: u32,
	pub times_referred: u32,
}

/// Per-identity activity, sorted by records filed descending, then identity.
pub fn summarize_activity(records: &[ReferralRecord]) -> Vec<ActivityRow> {
	let mut rows: IndexMap<String, ActivityRow> = IndexMap::new();
	for record in records.iter().filter(|r| r.is_well_formed()) {
		for email in record.emails() {
			rows.entry(identity(email)).or_insert_with(|| ActivityRow {
				label: email.to_string(),
				records_filed: 0,
				times_referred: 0,
			});
		}
		if let Some(row) = rows.get_mut(&identity(&record.referrer)) {
			row.records_filed += 1;
		}
		for referral in [&record.referral1, &record.referral2] {
			if let Some(row) = rows.get_mut(&identity(referral)) {
				row.times_referred += 1;
			}
		}
	}

	let mut rows: Vec<ActivityRow> = rows.into_values().collect();
	rows.sort_by(|a, b| {
		b.records_filed
			.cmp(&a.records_filed)
			.then_with(|| identity(&a.label).cmp(&identity(&b.label)))
	});
	rows
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
	fn tallies_both_roles() {
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "a@x.com", "c@x.com"),
		];
		let rows = summarize_activity(&records);
		let row = |label: &str| rows.iter().find(|r| r.label == label).unwrap();
		assert_eq!((row("a@x.com").records_filed, row("a@x.com").times_referred), (1, 1));
		assert_eq!((row("b@x.com").records_filed, row("b@x.com").times_referred), (1, 1));
		assert_eq!((row("c@x.com").records_filed, row("c@x.com").times_referred), (0, 2));
	}

	#[test]
	fn case_variants_merge_into_one_row() {
		let records = [
			record("Ann@x.com", "bob@x.com", "cleo@x.com"),
			record("ANN@x.com", "bob@x.com", "dan@x.com"),
		];
		let rows = summarize_activity(&records);
		assert_eq!(rows.len(), 4);
		assert_eq!(rows[0].label, "Ann@x.com");
		assert_eq!(rows[0].records_filed, 2);
	}

	#[test]
	fn rows_sort_by_activity_then_identity() {
		let records = [
			record("z@x.com", "a@x.com", "b@x.com"),
			record("z@x.com", "c@x.com", "d@x.com"),
			record("m@x.com", "a@x.com", "b@x.com"),
		];
		let rows = summarize_activity(&records);
		assert_eq!(rows[0].label, "z@x.com");
		assert_eq!(rows[1].label, "m@x.com");
		// The rest are inactive referrals in identity order.
		let tail: Vec<&str> = rows[2..].iter().map(|r| r.label.as_str()).collect();
		assert_eq!(tail, ["a@x.com", "b@x.com", "c@x.com", "d@x.com"]);
	}
}
