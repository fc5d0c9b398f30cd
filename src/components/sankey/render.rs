use web_sys::CanvasRenderingContext2d;

use super::layout::SankeyConfig;
use super::state::SankeyState;
use super::types::NodeKind;
use crate::theme;

const LINK_ALPHA: f64 = 0.4;
const LINK_ALPHA_HOVER: f64 = 0.8;
const NODE_ALPHA_HOVER: f64 = 0.8;
const NODE_CORNER_RADIUS: f64 = 4.0;
const LABEL_OFFSET: f64 = 6.0;

pub fn render(state: &SankeyState, config: &SankeyConfig, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(theme::CANVAS_BG);
	ctx.fill_rect(0.0, 0.0, config.width, config.height);
	ctx.save();
	let _ = ctx.translate(config.margin.left, config.margin.top);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
}

fn draw_links(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	for (i, link) in state.layout.links.iter().enumerate() {
		let alpha = if state.is_link_hovered(i) {
			LINK_ALPHA_HOVER
		} else {
			LINK_ALPHA
		};
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&link.color);
		ctx.set_line_width(link.stroke_width());

		let cx = (link.x0 + link.x1) / 2.0;
		ctx.begin_path();
		ctx.move_to(link.x0, link.y0);
		ctx.bezier_curve_to(cx, link.y0, cx, link.y1, link.x1, link.y1);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	for (i, node) in state.layout.nodes.iter().enumerate() {
		if state.is_node_hovered(i) {
			ctx.set_global_alpha(NODE_ALPHA_HOVER);
		}
		ctx.set_fill_style_str(&node.color);
		fill_rounded_rect(
			ctx,
			node.x0,
			node.y0,
			node.width(),
			node.height(),
			NODE_CORNER_RADIUS,
		);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_labels(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(theme::LABEL);
	ctx.set_font("12px sans-serif");
	ctx.set_text_baseline("middle");
	for node in &state.layout.nodes {
		// source labels sit right of their bar, target labels left of it
		let (x, align) = match node.kind {
			NodeKind::Source => (node.x1 + LABEL_OFFSET, "left"),
			NodeKind::Target => (node.x0 - LABEL_OFFSET, "right"),
		};
		ctx.set_text_align(align);
		let _ = ctx.fill_text(&node.name, x, node.center_y());
	}
}

fn fill_rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, radius: f64) {
	let r = corner_radius(w, h, radius);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
	ctx.fill();
}

// arc_to misbehaves when the radius outgrows a side, so clamp like SVG rx
fn corner_radius(w: f64, h: f64, radius: f64) -> f64 {
	radius.min(w / 2.0).min(h / 2.0).max(0.0)
}
