use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::transform::DegreeGraphData;
use crate::data::seeded::rand_range;

pub const BASE_NODE_RADIUS: f64 = 13.0;

/// Seed keys for the radial placement. Fixed, so the same link ordering
/// reproduces the same layout on every render.
const DISTANCE_SEED: &str = "degree-distance";
const ANGLE_SEED: &str = "degree-angle";

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug, Default)]
pub struct DegreeNodeInfo {
	pub label: String,
	pub degree: usize,
	pub count: u32,
}

/// Per-link payload: the bucket that produced the edge. Controls line style
/// and color only.
#[derive(Clone, Debug, Default)]
pub struct DegreeLinkInfo {
	pub degree: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

pub struct DegreeState {
	pub graph: ForceGraph<DegreeNodeInfo, DegreeLinkInfo>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	pub zone_radius: f64,
	pub zone_width: f64,
	root_idx: Option<DefaultNodeIdx>,
}

impl DegreeState {
	/// Build the star around the root. Every node is anchored at a seeded
	/// position inside its ring band; the root sits at the origin. Dragging
	/// moves an anchor, so rings survive any amount of interaction.
	pub fn new(
		data: &DegreeGraphData,
		width: f64,
		height: f64,
		zone_radius: f64,
		zone_width: f64,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 5.0,
			force_spring: 0.01,
			force_max: 50.0,
			node_speed: 1000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx: HashMap<String, DefaultNodeIdx> = HashMap::new();

		for node in &data.nodes {
			let idx = graph.add_node(NodeData {
				x: 0.0,
				y: 0.0,
				mass: 10.0,
				is_anchor: true,
				user_data: DegreeNodeInfo {
					label: node.label.clone(),
					degree: node.degree,
					count: node.count,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}
		let root_idx = data.nodes.first().and_then(|root| id_to_idx.get(&root.id)).copied();

		let mut placed: HashSet<DefaultNodeIdx> = HashSet::new();
		if let Some(root) = root_idx {
			placed.insert(root);
		}
		for (i, link) in data.links.iter().enumerate() {
			let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			else {
				continue;
			};
			graph.add_edge(src, tgt, EdgeData { user_data: DegreeLinkInfo { degree: link.degree } });

			// The first link to reach a node decides its ring position.
			if placed.insert(tgt) {
				let low = link.degree as f64 * zone_radius + zone_width * 0.2;
				let high = link.degree as f64 * zone_radius + zone_width * 0.8;
				let radius = rand_range(low, high, i, DISTANCE_SEED);
				let angle = rand_range(0.0, 2.0 * PI, i, ANGLE_SEED);
				graph.visit_nodes_mut(|node| {
					if node.index() == tgt {
						node.data.x = (radius * angle.cos()) as f32;
						node.data.y = (radius * angle.sin()) as f32;
					}
				});
			}
		}

		Self {
			graph,
			drag: DragState::default(),
			width,
			height,
			zone_radius,
			zone_width,
			root_idx,
		}
	}

	/// Canvas coordinates to simulation coordinates (origin at the center).
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(sx - self.width / 2.0, sy - self.height / 2.0)
	}

	/// The nearest node to a canvas position, if any node exists.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut best: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = dx * dx + dy * dy;
			if best.is_none_or(|(_, nearest)| dist < nearest) {
				best = Some((node.index(), dist));
			}
		});
		best.map(|(idx, _)| idx)
	}

	pub fn root_position(&self) -> Option<(f64, f64)> {
		let root = self.root_idx?;
		let mut position = None;
		self.graph.visit_nodes(|node| {
			if node.index() == root {
				position = Some((node.x() as f64, node.y() as f64));
			}
		});
		position
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
