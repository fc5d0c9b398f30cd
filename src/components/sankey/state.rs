//! Hover tracking over a computed layout: hit-testing, tooltip text, and
//! tooltip placement.

use super::layout::SankeyLayout;

/// Extra tolerance around a link's stroke when hit-testing, so hairline
/// flows are still hoverable.
pub const LINK_HIT_SLACK: f64 = 4.0;

// offset between the pointer and the tooltip corner, in CSS pixels
const TOOLTIP_DX: f64 = 10.0;
const TOOLTIP_DY: f64 = -28.0;

/// Place the tooltip a few pixels right of and above the pointer, so it
/// follows the cursor instead of sticking to the hovered geometry.
pub fn tooltip_position(pointer_x: f64, pointer_y: f64) -> (f64, f64) {
	(pointer_x + TOOLTIP_DX, pointer_y + TOOLTIP_DY)
}

/// What the pointer is currently over, in paint order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hover {
	/// Nothing under the pointer.
	#[default]
	None,
	/// A node bar, by index into [`SankeyLayout::nodes`].
	Node(usize),
	/// A link band, by index into [`SankeyLayout::links`].
	Link(usize),
}

/// Text shown in the floating tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
	/// Bold first line.
	pub title: String,
	/// Second line.
	pub detail: String,
}

/// Interactive state layered over one computed layout.
pub struct SankeyState {
	/// The geometry being hovered.
	pub layout: SankeyLayout,
	/// Current hover target.
	pub hover: Hover,
}

impl SankeyState {
	/// Wrap a layout with nothing hovered.
	pub fn new(layout: SankeyLayout) -> Self {
		Self {
			layout,
			hover: Hover::None,
		}
	}

	/// Find what sits under a point in diagram coordinates (margins already
	/// subtracted). Node bars are drawn on top of links, so they win; within
	/// a kind the later-drawn element wins, matching paint order.
	pub fn hit_test(&self, x: f64, y: f64) -> Hover {
		let mut found = Hover::None;
		for (i, link) in self.layout.links.iter().enumerate() {
			if link.distance_to(x, y) <= link.stroke_width() / 2.0 + LINK_HIT_SLACK {
				found = Hover::Link(i);
			}
		}
		for (i, node) in self.layout.nodes.iter().enumerate() {
			if node.contains(x, y) {
				found = Hover::Node(i);
			}
		}
		found
	}

	/// Update the hover target; returns whether anything changed so the
	/// caller can skip redundant repaints.
	pub fn set_hover(&mut self, hover: Hover) -> bool {
		if self.hover == hover {
			return false;
		}
		self.hover = hover;
		true
	}

	/// Whether the node at `index` is the hover target.
	pub fn is_node_hovered(&self, index: usize) -> bool {
		self.hover == Hover::Node(index)
	}

	/// Whether the link at `index` is the hover target.
	pub fn is_link_hovered(&self, index: usize) -> bool {
		self.hover == Hover::Link(index)
	}

	/// Tooltip text for the current hover target, if any.
	pub fn tooltip(&self) -> Option<TooltipContent> {
		match self.hover {
			Hover::None => None,
			Hover::Node(i) => {
				let node = self.layout.nodes.get(i)?;
				Some(TooltipContent {
					title: node.name.clone(),
					detail: node.description.clone(),
				})
			}
			Hover::Link(i) => {
				let link = self.layout.links.get(i)?;
				let source = self.layout.nodes.get(link.source)?;
				let target = self.layout.nodes.get(link.target)?;
				Some(TooltipContent {
					title: format!("{} → {}", source.name, target.name),
					detail: format!("Flow: {} connections", link.value),
				})
			}
		}
	}

}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sankey::layout::{SankeyConfig, compute};
	use crate::components::sankey::types::{FlowGraph, FlowLink, FlowNode, NodeKind};

	fn state() -> SankeyState {
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("a", "A", NodeKind::Source).with_description("left vocabulary"),
				FlowNode::new("b", "B", NodeKind::Source),
				FlowNode::new("c", "C", NodeKind::Target).with_description("right collection"),
			],
			vec![
				FlowLink::new("a", "c", 10.0),
				FlowLink::new("b", "c", 5.0),
			],
		);
		SankeyState::new(compute(&graph, &SankeyConfig::default()).unwrap())
	}

	#[test]
	fn default_hover_is_none() {
		let state = state();
		assert_eq!(state.hover, Hover::None);
		assert!(state.tooltip().is_none());
	}

	#[test]
	fn tooltip_stays_beside_the_pointer() {
		let (x, y) = tooltip_position(36.5, 395.1);
		assert!(x > 36.5);
		assert!(y < 395.1);
		// a hand's width from the cursor, never across the canvas
		assert!((x - 36.5).hypot(y - 395.1) < 40.0);
	}

	#[test]
	fn nodes_win_over_links() {
		let state = state();
		// a link band anchors on the source bar, but the bar is on top
		let a = &state.layout.nodes[0];
		let hit = state.hit_test((a.x0 + a.x1) / 2.0, a.center_y());
		assert_eq!(hit, Hover::Node(0));
	}

	#[test]
	fn links_are_hit_along_their_curve() {
		let state = state();
		let (mx, my) = state.layout.links[0].point_at(0.5);
		assert_eq!(state.hit_test(mx, my), Hover::Link(0));
	}

	#[test]
	fn empty_space_hits_nothing() {
		let state = state();
		assert_eq!(state.hit_test(-50.0, -50.0), Hover::None);
	}

	#[test]
	fn set_hover_reports_changes_only() {
		let mut state = state();
		assert!(state.set_hover(Hover::Node(1)));
		assert!(!state.set_hover(Hover::Node(1)));
		assert!(state.set_hover(Hover::None));
	}

	#[test]
	fn node_tooltip_shows_name_and_description() {
		let mut state = state();
		state.set_hover(Hover::Node(0));
		let tip = state.tooltip().unwrap();
		assert_eq!(tip.title, "A");
		assert_eq!(tip.detail, "left vocabulary");
	}

	#[test]
	fn link_tooltip_shows_flow_between_endpoints() {
		let mut state = state();
		state.set_hover(Hover::Link(0));
		let tip = state.tooltip().unwrap();
		assert_eq!(tip.title, "A → C");
		assert_eq!(tip.detail, "Flow: 10 connections");
	}

	#[test]
	fn fractional_flows_keep_their_decimals() {
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("a", "A", NodeKind::Source),
				FlowNode::new("c", "C", NodeKind::Target),
			],
			vec![FlowLink::new("a", "c", 2.5)],
		);
		let mut state = SankeyState::new(compute(&graph, &SankeyConfig::default()).unwrap());
		state.set_hover(Hover::Link(0));
		assert_eq!(state.tooltip().unwrap().detail, "Flow: 2.5 connections");
	}

	#[test]
	fn hover_predicates_track_the_target() {
		let mut state = state();
		state.set_hover(Hover::Link(1));
		assert!(state.is_link_hovered(1));
		assert!(!state.is_link_hovered(0));
		assert!(!state.is_node_hovered(0));
	}
}
