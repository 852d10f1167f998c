//! Referral records to a weighted undirected relationship graph.

use indexmap::IndexMap;

use crate::data::{ReferralRecord, identity};

/// Weights for the edges a record derives.
#[derive(Clone, Copy, Debug)]
pub struct RelationshipWeights {
	/// Weight of each referrer-to-referral edge.
	pub first_degree: f64,
	/// Weight of the referral-to-referral edge.
	pub second_degree: f64,
	/// Whether the referral-to-referral edge is derived at all.
	pub include_second_degree: bool,
}

impl Default for RelationshipWeights {
	fn default() -> Self {
		Self {
			first_degree: 5.0,
			second_degree: 2.0,
			include_second_degree: false,
		}
	}
}

/// A node per distinct email identity.
#[derive(Clone, Debug, PartialEq)]
pub struct RelationNode {
	pub id: String,
	pub label: String,
	pub group: u32,
}

/// An undirected link between two identities with its accumulated weight.
#[derive(Clone, Debug, PartialEq)]
pub struct RelationLink {
	pub source: String,
	pub target: String,
	pub value: f64,
}

/// Derived node/link structures, recomputed wholesale from the input records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationGraph {
	pub nodes: Vec<RelationNode>,
	pub links: Vec<RelationLink>,
}

/// Canonical key for an unordered identity pair. Both orders of the same two
/// emails map to the same key.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
	let (a, b) = (identity(a), identity(b));
	if a <= b { (a, b) } else { (b, a) }
}

/// The weighted pairs one record contributes.
fn record_pairs<'a>(
	record: &'a ReferralRecord,
	weights: &RelationshipWeights,
) -> Vec<(&'a str, &'a str, f64)> {
	let mut pairs = vec![
		(record.referrer.as_str(), record.referral1.as_str(), weights.first_degree),
		(record.referrer.as_str(), record.referral2.as_str(), weights.first_degree),
	];
	if weights.include_second_degree {
		pairs.push((record.referral1.as_str(), record.referral2.as_str(), weights.second_degree));
	}
	pairs
}

/// Build the relationship graph. One node per identity (first-seen spelling
/// as label), one link per unordered pair with weights summed across
/// repeated occurrences.
pub fn build_graph(records: &[ReferralRecord], weights: &RelationshipWeights) -> RelationGraph {
	let mut nodes: IndexMap<String, RelationNode> = IndexMap::new();
	let mut links: IndexMap<(String, String), RelationLink> = IndexMap::new();

	for record in records.iter().filter(|r| r.is_well_formed()) {
		for email in record.emails() {
			nodes.entry(identity(email)).or_insert_with(|| RelationNode {
				id: identity(email),
				label: email.to_string(),
				group: 1,
			});
		}

		for (a, b, weight) in record_pairs(record, weights) {
			let (source, target) = pair_key(a, b);
			if source == target {
				// A self pair would feed the spring a zero-length edge.
				continue;
			}
			links
				.entry((source.clone(), target.clone()))
				.or_insert_with(|| RelationLink { source, target, value: 0.0 })
				.value += weight;
		}
	}

	RelationGraph {
		nodes: nodes.into_values().collect(),
		links: links.into_values().collect(),
	}
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
	fn every_email_becomes_exactly_one_node() {
		let records = [
			record("Ann@mail.com", "bob@mail.com", "Cleo@mail.com"),
			record("ann@mail.com", "dan@mail.com", "BOB@mail.com"),
		];
		let graph = build_graph(&records, &RelationshipWeights::default());
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["ann@mail.com", "bob@mail.com", "cleo@mail.com", "dan@mail.com"]);
	}

	#[test]
	fn pair_key_is_symmetric() {
		assert_eq!(pair_key("Ann@mail.com", "bob@mail.com"), pair_key("bob@mail.com", "Ann@mail.com"));
		assert_eq!(pair_key("a@x", "b@x"), ("a@x".into(), "b@x".into()));
	}

	#[test]
	fn repeated_pairs_accumulate_into_one_link() {
		// Two records over the same three people, referral order swapped.
		let records = [
			record("A@mail.com", "B@mail.com", "C@mail.com"),
			record("A@mail.com", "C@mail.com", "B@mail.com"),
		];
		let graph = build_graph(&records, &RelationshipWeights::default());
		assert_eq!(graph.nodes.len(), 3);
		assert_eq!(graph.links.len(), 2);
		for link in &graph.links {
			assert_eq!(link.source, "a@mail.com");
			assert_eq!(link.value, 10.0);
		}
	}

	#[test]
	fn accumulated_weights_are_order_independent() {
		let forward = [
			record("a@x.com", "b@x.com", "c@x.com"),
			record("b@x.com", "a@x.com", "d@x.com"),
			record("a@x.com", "c@x.com", "b@x.com"),
		];
		let mut reversed = forward.clone();
		reversed.reverse();

		let weight_map = |records: &[ReferralRecord]| {
			let mut weights: Vec<(String, String, f64)> = build_graph(records, &RelationshipWeights::default())
				.links
				.into_iter()
				.map(|l| (l.source, l.target, l.value))
				.collect();
			weights.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
			weights
		};
		assert_eq!(weight_map(&forward), weight_map(&reversed));
	}

	#[test]
	fn second_degree_links_are_opt_in() {
		let records = [record("a@x.com", "b@x.com", "c@x.com")];

		let first_only = build_graph(&records, &RelationshipWeights::default());
		assert_eq!(first_only.links.len(), 2);

		let weights = RelationshipWeights { include_second_degree: true, ..Default::default() };
		let with_second = build_graph(&records, &weights);
		assert_eq!(with_second.links.len(), 3);
		let second = with_second
			.links
			.iter()
			.find(|l| l.source == "b@x.com" && l.target == "c@x.com")
			.unwrap();
		assert_eq!(second.value, 2.0);
	}

	#[test]
	fn first_seen_spelling_labels_the_node() {
		let records = [
			record("Ann@mail.com", "bob@mail.com", "cleo@mail.com"),
			record("ANN@mail.com", "bob@mail.com", "cleo@mail.com"),
		];
		let graph = build_graph(&records, &RelationshipWeights::default());
		assert_eq!(graph.nodes[0].label, "Ann@mail.com");
	}

	#[test]
	fn malformed_records_contribute_nothing() {
		let records = [record("a@x.com", "", "c@x.com")];
		let graph = build_graph(&records, &RelationshipWeights::default());
		assert!(graph.nodes.is_empty());
		assert!(graph.links.is_empty());
	}
}
