//! Referral records to degree buckets and a star-shaped link set.

use indexmap::IndexMap;

use crate::data::{ReferralRecord, identity};

/// Number of concentric rings: root, direct referrals, indirect referrals.
pub const DEGREE_RINGS: usize = 3;

/// A ring member. `count` tracks repeat appearances across buckets and only
/// scales the rendered radius.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeNode {
	pub id: String,
	pub label: String,
	pub degree: usize,
	pub count: u32,
}

/// A star edge from the root to one ring member, tagged with the bucket that
/// produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeLink {
	pub source: String,
	pub target: String,
	pub degree: usize,
}

/// Derived node/link structures. The root, when present, is `nodes[0]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DegreeGraphData {
	pub nodes: Vec<DegreeNode>,
	pub links: Vec<DegreeLink>,
}

/// Degree buckets keyed by identity, deduplicated per bucket only. An
/// identity already present in an earlier bucket is not removed from a later
/// one; `build_graph` collapses such repeats onto the first node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DegreeBuckets {
	pub buckets: [Vec<String>; DEGREE_RINGS],
	pub labels: IndexMap<String, String>,
}

fn push_unique(bucket: &mut Vec<String>, id: String) {
	if !bucket.contains(&id) {
		bucket.push(id);
	}
}

/// For every record filed by `email`, put the referrer into
/// `buckets[referrer_degree]` and both referrals into
/// `buckets[referral_degree]`, remembering first-seen spellings.
fn add_relationships(
	email: &str,
	records: &[ReferralRecord],
	buckets: &mut DegreeBuckets,
	referrer_degree: usize,
	referral_degree: usize,
) {
	let email_id = identity(email);
	for record in records.iter().filter(|r| r.is_well_formed()) {
		for field in record.emails() {
			buckets
				.labels
				.entry(identity(field))
				.or_insert_with(|| field.to_string());
		}
		if identity(&record.referrer) == email_id {
			push_unique(&mut buckets.buckets[referrer_degree], identity(&record.referrer));
			push_unique(&mut buckets.buckets[referral_degree], identity(&record.referral1));
			push_unique(&mut buckets.buckets[referral_degree], identity(&record.referral2));
		}
	}
}

/// Two-hop bucketing from `root`: bucket 0 is the root, bucket 1 its direct
/// referrals, bucket 2 the referrals of every bucket-1 email. If `root`
/// never files a record all buckets come back empty.
pub fn bucket_by_degree(records: &[ReferralRecord], root: &str) -> DegreeBuckets {
	let mut buckets = DegreeBuckets::default();
	add_relationships(root, records, &mut buckets, 0, 1);
	let direct = buckets.buckets[1].clone();
	for email in &direct {
		add_relationships(email, records, &mut buckets, 1, 2);
	}
	buckets
}

/// Flatten buckets into nodes and star links. A repeated identity collapses
/// onto its first node and increments that node's count; every bucket entry
/// of degree 1 and 2 still gets its own root link.
pub fn build_graph(buckets: &DegreeBuckets) -> DegreeGraphData {
	let mut nodes: Vec<DegreeNode> = Vec::new();
	let mut slot_by_id: IndexMap<String, usize> = IndexMap::new();

	for (degree, bucket) in buckets.buckets.iter().enumerate() {
		for id in bucket {
			match slot_by_id.get(id) {
				Some(&slot) => nodes[slot].count += 1,
				None => {
					slot_by_id.insert(id.clone(), nodes.len());
					nodes.push(DegreeNode {
						id: id.clone(),
						label: buckets.labels.get(id).cloned().unwrap_or_else(|| id.clone()),
						degree,
						count: 0,
					});
				}
			}
		}
	}

	let mut links = Vec::new();
	if let Some(root) = nodes.first() {
		for (degree, bucket) in buckets.buckets.iter().enumerate().skip(1) {
			for id in bucket {
				links.push(DegreeLink {
					source: root.id.clone(),
					target: id.clone(),
					degree,
				});
			}
		}
	}

	DegreeGraphData { nodes, links }
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
	fn buckets_follow_two_hop_reachability() {
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "d@x.com", "e@x.com"),
			record("z@x.com", "q@x.com", "r@x.com"),
		];
		let buckets = bucket_by_degree(&records, "a@x.com");
		assert_eq!(buckets.buckets[0], ["a@x.com"]);
		assert_eq!(buckets.buckets[1], ["b@x.com", "c@x.com"]);
		assert_eq!(buckets.buckets[2], ["d@x.com", "e@x.com"]);
	}

	#[test]
	fn buckets_dedup_internally() {
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("A@X.com", "B@x.com", "d@x.com"),
		];
		let buckets = bucket_by_degree(&records, "a@x.com");
		assert_eq!(buckets.buckets[0], ["a@x.com"]);
		assert_eq!(buckets.buckets[1], ["b@x.com", "c@x.com", "d@x.com"]);
	}

	#[test]
	fn root_match_is_case_insensitive() {
		let records = [record("Ann@mail.com", "bob@mail.com", "cleo@mail.com")];
		let buckets = bucket_by_degree(&records, "ann@MAIL.com");
		assert_eq!(buckets.buckets[0], ["ann@mail.com"]);
	}

	#[test]
	fn cross_bucket_repeats_collapse_with_a_count() {
		// c is both a direct referral of a and a referral of b.
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "c@x.com", "d@x.com"),
		];
		let graph = build_graph(&bucket_by_degree(&records, "a@x.com"));

		let c = graph.nodes.iter().find(|n| n.id == "c@x.com").unwrap();
		assert_eq!(c.degree, 1);
		assert_eq!(c.count, 1);
		assert_eq!(graph.nodes.len(), 4);

		// One link per bucket entry: b and c at degree 1, c and d at degree 2.
		let to_c: Vec<usize> = graph
			.links
			.iter()
			.filter(|l| l.target == "c@x.com")
			.map(|l| l.degree)
			.collect();
		assert_eq!(to_c, [1, 2]);
		assert_eq!(graph.links.len(), 4);
	}

	#[test]
	fn root_is_the_first_node_and_links_fan_out_from_it() {
		let records = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "d@x.com", "e@x.com"),
		];
		let graph = build_graph(&bucket_by_degree(&records, "a@x.com"));
		assert_eq!(graph.nodes[0].id, "a@x.com");
		assert_eq!(graph.nodes[0].degree, 0);
		assert!(graph.links.iter().all(|l| l.source == "a@x.com"));
	}

	#[test]
	fn unknown_root_yields_an_empty_graph() {
		let records = [record("a@x.com", "b@x.com", "c@x.com")];
		let graph = build_graph(&bucket_by_degree(&records, "nobody@x.com"));
		assert!(graph.nodes.is_empty());
		assert!(graph.links.is_empty());
	}

	#[test]
	fn labels_keep_the_first_seen_spelling() {
		let records = [
			record("a@x.com", "Bea@x.com", "c@x.com"),
			record("a@x.com", "BEA@x.com", "d@x.com"),
		];
		let graph = build_graph(&bucket_by_degree(&records, "a@x.com"));
		let bea = graph.nodes.iter().find(|n| n.id == "bea@x.com").unwrap();
		assert_eq!(bea.label, "Bea@x.com");
	}
}
