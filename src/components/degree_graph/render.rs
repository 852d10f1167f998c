use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{BASE_NODE_RADIUS, DegreeState};

const LINK_DEGREE_COLORS: &[&str] = &["#000", "#999", "#999", "#aaa"];
const ZONE_COLORS: &[&str] = &["#ccf", "#cfc", "#fff"];
const ROOT_COLOR: &str = "#0a0";

pub fn render(state: &DegreeState, ctx: &CanvasRenderingContext2d, labels_visible: bool) {
	ctx.set_fill_style_str("#fff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.width / 2.0, state.height / 2.0);
	draw_zones(state, ctx);
	draw_links(state, ctx);
	draw_nodes(state, ctx, labels_visible);
	ctx.restore();
}

/// Concentric ring zones, centered on the root, outermost first.
fn draw_zones(state: &DegreeState, ctx: &CanvasRenderingContext2d) {
	let Some((x, y)) = state.root_position() else {
		return;
	};
	let radii = [
		state.zone_radius * 2.0 + state.zone_width,
		state.zone_radius + state.zone_width,
		state.zone_radius,
	];
	for (radius, color) in radii.into_iter().zip(ZONE_COLORS) {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
	}
}

fn draw_links(state: &DegreeState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_edges(|n1, n2, edge| {
		let degree = edge.user_data.degree;
		ctx.begin_path();
		ctx.set_line_width((3_f64 - degree as f64).max(1.0));
		ctx.set_stroke_style_str(LINK_DEGREE_COLORS[degree.min(LINK_DEGREE_COLORS.len() - 1)]);
		let dash = if degree > 1 {
			js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0))
		} else {
			js_sys::Array::new()
		};
		let _ = ctx.set_line_dash(&dash);
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

/// White discs sized by repeat count, numbered in visit order. The root is
/// outlined in green.
fn draw_nodes(state: &DegreeState, ctx: &CanvasRenderingContext2d, labels_visible: bool) {
	let mut ordinal = 0usize;
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let radius = BASE_NODE_RADIUS + node.data.user_data.count as f64 * 2.0;
		let is_root = ordinal == 0;

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#fff");
		ctx.fill();
		ctx.set_stroke_style_str(if is_root { ROOT_COLOR } else { "#666" });
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_font("12px Arial");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(if is_root { ROOT_COLOR } else { "#333" });
		let _ = ctx.fill_text(&ordinal.to_string(), x, y);

		if labels_visible {
			ctx.set_font("11px Arial");
			let _ = ctx.fill_text(&node.data.user_data.label, x, y - 20.0);
		}
		ordinal += 1;
	});
}
