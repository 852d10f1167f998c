use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, RelationshipState};
use crate::components::scale::link_stroke_width;

pub fn render(state: &RelationshipState, ctx: &CanvasRenderingContext2d, labels_visible: bool) {
	ctx.set_fill_style_str("#fafafa");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.width / 2.0, state.height / 2.0);
	draw_links(state, ctx);
	draw_nodes(state, ctx, labels_visible);
	ctx.restore();
}

fn draw_links(state: &RelationshipState, ctx: &CanvasRenderingContext2d) {
	let dimming = state.hover.node.is_some();

	state.graph.visit_edges(|n1, n2, edge| {
		let highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		let alpha = if dimming && !highlighted { 0.15 } else { 0.6 };

		ctx.set_stroke_style_str(&format!("rgba(153, 153, 153, {})", alpha));
		ctx.set_line_width(link_stroke_width(edge.user_data.value).max(0.5));
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &RelationshipState, ctx: &CanvasRenderingContext2d, labels_visible: bool) {
	let dimming = state.hover.node.is_some();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let hovered = state.hover.node == Some(idx);
		let dimmed = dimming && !state.is_highlighted(idx);

		ctx.set_global_alpha(if dimmed { 0.3 } else { 1.0 });
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();
		ctx.set_stroke_style_str("#fff");
		ctx.set_line_width(1.5);
		ctx.stroke();

		if hovered {
			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 2.5, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("#333");
			ctx.stroke();
		}

		if labels_visible {
			ctx.set_fill_style_str(if hovered { "#111" } else { "#555" });
			ctx.set_font("10px sans-serif");
			let _ = ctx.fill_text(&node.data.user_data.label, x + NODE_RADIUS + 3.0, y + 3.0);
		}
		ctx.set_global_alpha(1.0);
	});
}
