use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::{PlacedWord, layout_words};
use super::transform::accumulate_influence;
use crate::components::scale::group_color;
use crate::data::ReferralRecord;

/// Word cloud of referral influence. A static paint per data change; no
/// simulation runs behind it.
#[component]
pub fn InfluenceGraph(
	#[prop(into)] data: Signal<Vec<ReferralRecord>>,
	#[prop(default = 960.0)] width: f64,
	#[prop(default = 550.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let words = accumulate_influence(&data.get());
		let measure = |text: &str, size: f64| {
			ctx.set_font(&format!("{}px Arial", size));
			ctx.measure_text(text)
				.map(|metrics| metrics.width())
				.unwrap_or(text.chars().count() as f64 * size * 0.6)
		};
		let placed = layout_words(&words, width, height, measure);
		debug!("influence cloud: {} of {} words placed", placed.len(), words.len());
		draw(&ctx, width, height, &placed);
	});

	view! {
		<div class="influence-graph">
			<canvas node_ref=canvas_ref />
		</div>
	}
}

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, placed: &[PlacedWord]) {
	ctx.set_fill_style_str("#fff");
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.save();
	let _ = ctx.translate(width / 2.0, height / 2.0);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (i, word) in placed.iter().enumerate() {
		ctx.set_font(&format!("{}px Arial", word.size));
		ctx.set_fill_style_str(group_color(i as u32));
		let _ = ctx.fill_text(&word.text, word.x, word.y);
	}
	ctx.restore();
}
