use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::{self, SankeyConfig};
use super::render;
use super::state::{Hover, SankeyState, TooltipContent, tooltip_position};
use super::types::FlowGraph;

/// The flow diagram: a canvas that relays out and repaints when `data`
/// changes, with hover tooltips over nodes and links.
#[component]
pub fn SankeyCanvas(
	/// The graph to draw; a rejected dataset clears the canvas.
	#[prop(into)]
	data: Signal<FlowGraph>,
	/// Canvas dimensions and layout tuning.
	#[prop(default = SankeyConfig::default())]
	config: SankeyConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SankeyState>>> = Rc::new(RefCell::new(None));
	let context: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let (tooltip, set_tooltip) = signal(None::<(f64, f64, TooltipContent)>);

	let (state_init, context_init, config_init) = (state.clone(), context.clone(), config.clone());
	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(config_init.width as u32);
		canvas.set_height(config_init.height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		match layout::compute(&graph, &config_init) {
			Ok(layout) => {
				let fresh = SankeyState::new(layout);
				render::render(&fresh, &config_init, &ctx);
				*state_init.borrow_mut() = Some(fresh);
				*context_init.borrow_mut() = Some(ctx);
			}
			Err(err) => {
				log::error!("rejecting flow dataset: {err}");
				*state_init.borrow_mut() = None;
			}
		}
	});

	let (state_mm, context_mm, config_mm) = (state.clone(), context.clone(), config.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		// the canvas is CSS-scaled, so map client pixels back to canvas
		// units before subtracting the diagram margins
		let pointer_x = ev.client_x() as f64 - rect.left();
		let pointer_y = ev.client_y() as f64 - rect.top();
		let scale_x = config_mm.width / rect.width();
		let scale_y = config_mm.height / rect.height();
		let x = pointer_x * scale_x - config_mm.margin.left;
		let y = pointer_y * scale_y - config_mm.margin.top;

		let mut state = state_mm.borrow_mut();
		let Some(s) = state.as_mut() else {
			return;
		};
		let hover_changed = s.set_hover(s.hit_test(x, y));
		if hover_changed {
			if let Some(ctx) = context_mm.borrow().as_ref() {
				render::render(s, &config_mm, ctx);
			}
		}
		match s.tooltip() {
			Some(content) => {
				// the wrap is the positioning context, so offsets from the
				// canvas corner are already CSS-local
				let (left, top) = tooltip_position(pointer_x, pointer_y);
				set_tooltip.set(Some((left, top, content)));
			}
			None if hover_changed => set_tooltip.set(None),
			None => {}
		}
	};

	let (state_ml, context_ml, config_ml) = (state.clone(), context.clone(), config.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.set_hover(Hover::None) {
				if let Some(ctx) = context_ml.borrow().as_ref() {
					render::render(s, &config_ml, ctx);
				}
			}
		}
		set_tooltip.set(None);
	};

	view! {
		<div class="sankey-wrap">
			<canvas
				node_ref=canvas_ref
				class="sankey-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
			/>
			{move || {
				tooltip.get().map(|(left, top, content)| {
					view! {
						<div
							class="sankey-tooltip"
							style=format!("left: {left:.0}px; top: {top:.0}px;")
						>
							<div class="sankey-tooltip-title">{content.title}</div>
							<div class="sankey-tooltip-detail">{content.detail}</div>
						</div>
					}
				})
			}}
		</div>
	}
}
