use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::RelationshipState;
use super::transform::{RelationshipWeights, build_graph};
use crate::data::ReferralRecord;

/// Force-directed view of referral relationships.
///
/// Derives its node/link structures from scratch whenever `data` changes and
/// hands them to the force simulation. Dragging pins a node until release;
/// hovering highlights a node and its neighbors.
#[component]
pub fn RelationshipGraph(
	#[prop(into)] data: Signal<Vec<ReferralRecord>>,
	#[prop(default = 960.0)] width: f64,
	#[prop(default = 550.0)] height: f64,
	#[prop(default = true)] is_email_label_visible: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<RelationshipState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, running_anim) = (state.clone(), animate.clone(), running.clone());

	on_cleanup(move || running.store(false, Ordering::Relaxed));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let graph = build_graph(&data.get(), &RelationshipWeights::default());
		debug!("relationship graph: {} nodes, {} links", graph.nodes.len(), graph.links.len());
		*state_init.borrow_mut() = Some(RelationshipState::new(&graph, width, height));

		// One animation loop per canvas, kept across data changes.
		if animate_init.borrow().is_some() {
			return;
		}
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (state_anim, animate_inner, running) =
			(state_init.clone(), animate_init.clone(), running_anim.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Unmounted: stop requesting frames.
			if !running.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx, is_email_label_visible);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				return;
			}

			if let Some(idx) = s.drag.node_idx {
				let (nx, ny) = (
					s.drag.node_start_x + (x - s.drag.start_x) as f32,
					s.drag.node_start_y + (y - s.drag.start_y) as f32,
				);
				s.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			// Release the pin so the simulation re-settles the node.
			if let Some(idx) = s.drag.node_idx {
				s.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.is_anchor = false;
					}
				});
			}
			s.drag.active = false;
			s.drag.node_idx = None;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if let Some(idx) = s.drag.node_idx {
				s.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.is_anchor = false;
					}
				});
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="relationship-graph"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
