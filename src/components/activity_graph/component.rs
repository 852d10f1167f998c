use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::transform::{ActivityRow, summarize_activity};
use crate::components::scale::COLORS;
use crate::data::ReferralRecord;

const ROW_HEIGHT: f64 = 22.0;
const LABEL_GUTTER: f64 = 220.0;
const COUNT_GUTTER: f64 = 90.0;

/// Per-referrer activity bars. Rows beyond the canvas height are dropped.
#[component]
pub fn ActivityGraph(
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

		let rows = summarize_activity(&data.get());
		debug!("activity view: {} rows", rows.len());
		draw(&ctx, width, height, &rows);
	});

	view! {
		<div class="activity-graph">
			<canvas node_ref=canvas_ref />
		</div>
	}
}

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, rows: &[ActivityRow]) {
	ctx.set_fill_style_str("#fff");
	ctx.fill_rect(0.0, 0.0, width, height);

	let heaviest = rows.iter().map(|r| r.records_filed).max().unwrap_or(0).max(1) as f64;
	let bar_span = width - LABEL_GUTTER - COUNT_GUTTER;
	let visible = (height / ROW_HEIGHT) as usize;

	ctx.set_text_baseline("middle");
	for (i, row) in rows.iter().take(visible).enumerate() {
		let y = i as f64 * ROW_HEIGHT;

		ctx.set_font("11px Arial");
		ctx.set_text_align("right");
		ctx.set_fill_style_str("#333");
		let _ = ctx.fill_text(&row.label, LABEL_GUTTER - 8.0, y + ROW_HEIGHT / 2.0);

		let bar = bar_span * row.records_filed as f64 / heaviest;
		ctx.set_fill_style_str(COLORS[0]);
		ctx.fill_rect(LABEL_GUTTER, y + 4.0, bar, ROW_HEIGHT - 8.0);

		ctx.set_text_align("left");
		ctx.set_fill_style_str("#666");
		let _ = ctx.fill_text(
			&format!("{} filed, {} referred", row.records_filed, row.times_referred),
			LABEL_GUTTER + bar + 6.0,
			y + ROW_HEIGHT / 2.0,
		);
	}
}
