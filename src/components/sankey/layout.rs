//! Sankey layout for the bipartite CodeSystem -> ValueSet flow diagram.
//!
//! The layout pass is a pure function from an immutable [`FlowGraph`] to a
//! positioned [`SankeyLayout`]; nothing here touches the DOM. The algorithm:
//!
//! - source nodes form the left column, target nodes the right column
//! - node height is the incident value sum scaled so the fullest column
//!   exactly fills the canvas minus inter-node padding
//! - columns start stacked in dataset order, then a fixed number of
//!   weighted relaxation sweeps pulls nodes toward their neighbors, with
//!   collision resolution keeping the padding gap and the canvas bounds
//! - each link gets a contiguous band on both of its node edges and a
//!   horizontal cubic curve between them
//!
//! Every step is deterministic, so the same input always yields the same
//! layout.

use super::types::{FlowGraph, FlowNode, GraphError, NodeKind};
use crate::theme;

/// Hairline floor for link strokes: near-zero flows stay visible.
pub const MIN_LINK_STROKE: f64 = 1.0;

/// Samples used when measuring the distance from a point to a link curve.
const CURVE_SAMPLES: usize = 32;

/// Empty space around the diagram, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
	/// Gap above the diagram.
	pub top: f64,
	/// Gap right of the diagram.
	pub right: f64,
	/// Gap below the diagram.
	pub bottom: f64,
	/// Gap left of the diagram.
	pub left: f64,
}

/// Tunables for one layout pass.
///
/// The defaults reproduce the shipped diagram: a 1000x600 canvas with wide
/// side margins, 15-unit node bars and a 20-unit minimum gap between nodes
/// in a column.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyConfig {
	/// Canvas width in logical units.
	pub width: f64,
	/// Canvas height in logical units.
	pub height: f64,
	/// Margins reserved around the drawable area.
	pub margin: Margins,
	/// Horizontal thickness of every node bar.
	pub node_width: f64,
	/// Minimum vertical gap between nodes sharing a column.
	pub node_padding: f64,
	/// Relaxation sweeps; zero keeps the plain stacked ordering.
	pub iterations: usize,
}

impl Default for SankeyConfig {
	fn default() -> Self {
		Self {
			width: 1000.0,
			height: 600.0,
			margin: Margins {
				top: 20.0,
				right: 120.0,
				bottom: 20.0,
				left: 120.0,
			},
			node_width: 15.0,
			node_padding: 20.0,
			iterations: 6,
		}
	}
}

impl SankeyConfig {
	/// Drawable width between the side margins.
	pub fn inner_width(&self) -> f64 {
		self.width - self.margin.left - self.margin.right
	}

	/// Drawable height between the top and bottom margins.
	pub fn inner_height(&self) -> f64 {
		self.height - self.margin.top - self.margin.bottom
	}
}

/// A node plus its computed rectangle, derived fresh on every pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Dataset id.
	pub id: String,
	/// Display name drawn next to the bar.
	pub name: String,
	/// Column assignment, also used to pick the label side.
	pub kind: NodeKind,
	/// Tooltip text.
	pub description: String,
	/// Resolved fill color.
	pub color: String,
	/// Incident value sum that determined the height.
	pub value: f64,
	/// Left edge.
	pub x0: f64,
	/// Top edge.
	pub y0: f64,
	/// Right edge.
	pub x1: f64,
	/// Bottom edge.
	pub y1: f64,
}

impl LayoutNode {
	/// Bar height.
	pub fn height(&self) -> f64 {
		self.y1 - self.y0
	}

	/// Bar width.
	pub fn width(&self) -> f64 {
		self.x1 - self.x0
	}

	/// Vertical center.
	pub fn center_y(&self) -> f64 {
		(self.y0 + self.y1) / 2.0
	}

	/// Whether a point (in diagram coordinates) falls inside the bar.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
	}
}

/// A link plus its band offsets and curve geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutLink {
	/// Index of the source node in [`SankeyLayout::nodes`].
	pub source: usize,
	/// Index of the target node in [`SankeyLayout::nodes`].
	pub target: usize,
	/// Flow magnitude from the dataset.
	pub value: f64,
	/// Band thickness (`value` times the vertical scale), before clamping.
	pub width: f64,
	/// Horizontal start, on the source bar's right edge.
	pub x0: f64,
	/// Horizontal end, on the target bar's left edge.
	pub x1: f64,
	/// Vertical center of the band on the source edge.
	pub y0: f64,
	/// Vertical center of the band on the target edge.
	pub y1: f64,
	/// Stroke color, inherited from the source node fill.
	pub color: String,
}

impl LayoutLink {
	/// Stroke width for drawing: the flow width, but never thinner than a
	/// hairline so tiny flows remain visible.
	pub fn stroke_width(&self) -> f64 {
		self.width.max(MIN_LINK_STROKE)
	}

	/// Point on the cubic curve at parameter `t` in `[0, 1]`.
	///
	/// Control points sit at the horizontal midpoint, which keeps the curve
	/// horizontal at both node edges.
	pub fn point_at(&self, t: f64) -> (f64, f64) {
		let cx = (self.x0 + self.x1) / 2.0;
		let u = 1.0 - t;
		let x = u * u * u * self.x0
			+ 3.0 * u * u * t * cx
			+ 3.0 * u * t * t * cx
			+ t * t * t * self.x1;
		let y = u * u * u * self.y0
			+ 3.0 * u * u * t * self.y0
			+ 3.0 * u * t * t * self.y1
			+ t * t * t * self.y1;
		(x, y)
	}

	/// Approximate distance from a point to the curve centerline, by
	/// sampling the curve as a polyline.
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		let mut best = f64::INFINITY;
		let mut prev = self.point_at(0.0);
		for i in 1..=CURVE_SAMPLES {
			let next = self.point_at(i as f64 / CURVE_SAMPLES as f64);
			best = best.min(segment_distance(prev, next, (x, y)));
			prev = next;
		}
		best
	}
}

/// Distance from point `p` to the segment `a`-`b`.
fn segment_distance(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
	let (ax, ay) = a;
	let (bx, by) = b;
	let (px, py) = p;
	let (dx, dy) = (bx - ax, by - ay);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq > 0.0 {
		(((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
	} else {
		0.0
	};
	let (cx, cy) = (ax + t * dx, ay + t * dy);
	((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// The positioned diagram produced by one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyLayout {
	/// Positioned nodes, in dataset order.
	pub nodes: Vec<LayoutNode>,
	/// Positioned links, in dataset order.
	pub links: Vec<LayoutLink>,
}

/// Run a full layout pass over a validated copy of `graph`.
///
/// The graph is validated first; a dangling link endpoint or a non-positive
/// value rejects the whole dataset.
pub fn compute(graph: &FlowGraph, config: &SankeyConfig) -> Result<SankeyLayout, GraphError> {
	graph.validate()?;

	let width = config.inner_width();
	let height = config.inner_height();

	let mut nodes = position_columns(graph, config, width);
	let (in_sum, out_sum) = incident_sums(graph, &nodes);
	for (i, node) in nodes.iter_mut().enumerate() {
		node.value = in_sum[i].max(out_sum[i]);
	}

	let left: Vec<usize> = indices_of(&nodes, NodeKind::Source);
	let right: Vec<usize> = indices_of(&nodes, NodeKind::Target);
	let ky = vertical_scale(&nodes, &[&left, &right], height, config.node_padding);

	initialize_column(&mut nodes, &left, ky, height, config.node_padding);
	initialize_column(&mut nodes, &right, ky, height, config.node_padding);

	let link_ends: Vec<(usize, usize)> = graph
		.links
		.iter()
		.map(|l| {
			// validate() guarantees both endpoints resolve
			let s = graph.node_index(&l.source).unwrap_or_default();
			let t = graph.node_index(&l.target).unwrap_or_default();
			(s, t)
		})
		.collect();

	relax(
		&mut nodes,
		&left,
		&right,
		&link_ends,
		&graph.links.iter().map(|l| l.value).collect::<Vec<_>>(),
		height,
		config,
	);

	let links = position_links(graph, &nodes, &link_ends, ky);
	Ok(SankeyLayout { nodes, links })
}

/// Build the layout nodes with column x-extents and resolved colors.
fn position_columns(graph: &FlowGraph, config: &SankeyConfig, width: f64) -> Vec<LayoutNode> {
	let mut source_ordinal = 0usize;
	graph
		.nodes
		.iter()
		.map(|node| {
			let (x0, x1) = match node.kind {
				NodeKind::Source => (0.0, config.node_width),
				NodeKind::Target => (width - config.node_width, width),
			};
			let palette_slot = match node.kind {
				NodeKind::Source => {
					let slot = source_ordinal;
					source_ordinal += 1;
					Some(slot)
				}
				NodeKind::Target => None,
			};
			let color = resolve_color(node, palette_slot);
			LayoutNode {
				id: node.id.clone(),
				name: node.name.clone(),
				kind: node.kind,
				description: node.description.clone(),
				color,
				value: 0.0,
				x0,
				y0: 0.0,
				x1,
				y1: 0.0,
			}
		})
		.collect()
}

/// Explicit color, else the palette entry for the node's position among the
/// sources, else the shared target color.
fn resolve_color(node: &FlowNode, palette_slot: Option<usize>) -> String {
	if let Some(color) = &node.color {
		return color.clone();
	}
	match palette_slot {
		Some(slot) => theme::PALETTE[slot % theme::PALETTE.len()].into(),
		None => theme::VALUE_SET.into(),
	}
}

/// Per-node incoming and outgoing value sums.
fn incident_sums(graph: &FlowGraph, nodes: &[LayoutNode]) -> (Vec<f64>, Vec<f64>) {
	let mut in_sum = vec![0.0; nodes.len()];
	let mut out_sum = vec![0.0; nodes.len()];
	for link in &graph.links {
		if let Some(s) = graph.node_index(&link.source) {
			out_sum[s] += link.value;
		}
		if let Some(t) = graph.node_index(&link.target) {
			in_sum[t] += link.value;
		}
	}
	(in_sum, out_sum)
}

fn indices_of(nodes: &[LayoutNode], kind: NodeKind) -> Vec<usize> {
	nodes
		.iter()
		.enumerate()
		.filter(|(_, n)| n.kind == kind)
		.map(|(i, _)| i)
		.collect()
}

/// Units of height per unit of value: the fullest column exactly fills the
/// canvas once inter-node padding is subtracted.
fn vertical_scale(nodes: &[LayoutNode], columns: &[&Vec<usize>], height: f64, padding: f64) -> f64 {
	let mut ky = f64::INFINITY;
	for column in columns {
		let sum: f64 = column.iter().map(|&i| nodes[i].value).sum();
		if sum > 0.0 {
			let gaps = padding * (column.len().saturating_sub(1)) as f64;
			ky = ky.min((height - gaps) / sum);
		}
	}
	if ky.is_finite() { ky.max(0.0) } else { 0.0 }
}

/// Stack a column top-down in dataset order, then spread the leftover space
/// evenly so a partially filled column floats toward the middle.
fn initialize_column(
	nodes: &mut [LayoutNode],
	column: &[usize],
	ky: f64,
	height: f64,
	padding: f64,
) {
	let mut y = 0.0;
	for &i in column {
		nodes[i].y0 = y;
		nodes[i].y1 = y + nodes[i].value * ky;
		y = nodes[i].y1 + padding;
	}
	if column.is_empty() {
		return;
	}
	let extra = (height - (y - padding)) / (column.len() + 1) as f64;
	for (slot, &i) in column.iter().enumerate() {
		let shift = extra * (slot + 1) as f64;
		nodes[i].y0 += shift;
		nodes[i].y1 += shift;
	}
}

/// Alternate weighted relaxation sweeps with collision resolution, damping
/// the pull a little more on every iteration.
fn relax(
	nodes: &mut [LayoutNode],
	left: &[usize],
	right: &[usize],
	link_ends: &[(usize, usize)],
	values: &[f64],
	height: f64,
	config: &SankeyConfig,
) {
	let mut alpha = 1.0;
	for _ in 0..config.iterations {
		alpha *= 0.99;

		// pull sources toward the weighted center of their targets
		sweep(nodes, left, link_ends, values, alpha, |ends| ends.0, |ends| ends.1);
		resolve_collisions(nodes, left, height, config.node_padding);
		resolve_collisions(nodes, right, height, config.node_padding);

		// pull targets toward the weighted center of their sources
		sweep(nodes, right, link_ends, values, alpha, |ends| ends.1, |ends| ends.0);
		resolve_collisions(nodes, left, height, config.node_padding);
		resolve_collisions(nodes, right, height, config.node_padding);
	}
}

/// Move every node in `column` toward the value-weighted mean center of the
/// nodes it is linked to, scaled by `alpha`.
fn sweep(
	nodes: &mut [LayoutNode],
	column: &[usize],
	link_ends: &[(usize, usize)],
	values: &[f64],
	alpha: f64,
	own_end: fn(&(usize, usize)) -> usize,
	far_end: fn(&(usize, usize)) -> usize,
) {
	for &i in column {
		let mut weighted = 0.0;
		let mut total = 0.0;
		for (ends, &value) in link_ends.iter().zip(values) {
			if own_end(ends) == i {
				weighted += nodes[far_end(ends)].center_y() * value;
				total += value;
			}
		}
		if total > 0.0 {
			let dy = (weighted / total - nodes[i].center_y()) * alpha;
			nodes[i].y0 += dy;
			nodes[i].y1 += dy;
		}
	}
}

/// Push overlapping nodes apart (top-down, then bottom-up against the lower
/// bound) so the padding gap and the `[0, height]` extent always hold.
fn resolve_collisions(nodes: &mut [LayoutNode], column: &[usize], height: f64, padding: f64) {
	if column.is_empty() {
		return;
	}
	let mut order: Vec<usize> = column.to_vec();
	order.sort_by(|&a, &b| nodes[a].y0.total_cmp(&nodes[b].y0).then(a.cmp(&b)));

	let mut y = 0.0;
	for &i in &order {
		let dy = y - nodes[i].y0;
		if dy > 0.0 {
			nodes[i].y0 += dy;
			nodes[i].y1 += dy;
		}
		y = nodes[i].y1 + padding;
	}

	// walk back up if the column ran past the bottom edge
	let last = *order.last().unwrap_or(&0);
	let overflow = nodes[last].y1 - height;
	if overflow > 0.0 {
		nodes[last].y0 -= overflow;
		nodes[last].y1 -= overflow;
		let mut y = nodes[last].y0;
		for &i in order.iter().rev().skip(1) {
			let dy = nodes[i].y1 + padding - y;
			if dy > 0.0 {
				nodes[i].y0 -= dy;
				nodes[i].y1 -= dy;
			}
			y = nodes[i].y0;
		}
	}
}

/// Assign each link a contiguous band on both node edges and its horizontal
/// extent. Bands are ordered by the far node's position so flows do not
/// cross directly at the bar.
fn position_links(
	graph: &FlowGraph,
	nodes: &[LayoutNode],
	link_ends: &[(usize, usize)],
	ky: f64,
) -> Vec<LayoutLink> {
	let mut links: Vec<LayoutLink> = graph
		.links
		.iter()
		.zip(link_ends)
		.map(|(link, &(source, target))| LayoutLink {
			source,
			target,
			value: link.value,
			width: link.value * ky,
			x0: nodes[source].x1,
			x1: nodes[target].x0,
			y0: 0.0,
			y1: 0.0,
			color: nodes[source].color.clone(),
		})
		.collect();

	for (node_index, node) in nodes.iter().enumerate() {
		// outgoing bands, top-to-bottom by target position
		let mut outgoing: Vec<usize> = (0..links.len())
			.filter(|&l| links[l].source == node_index)
			.collect();
		outgoing.sort_by(|&a, &b| {
			nodes[links[a].target]
				.y0
				.total_cmp(&nodes[links[b].target].y0)
				.then(a.cmp(&b))
		});
		let mut y = node.y0;
		for l in outgoing {
			links[l].y0 = y + links[l].width / 2.0;
			y += links[l].width;
		}

		// incoming bands, top-to-bottom by source position
		let mut incoming: Vec<usize> = (0..links.len())
			.filter(|&l| links[l].target == node_index)
			.collect();
		incoming.sort_by(|&a, &b| {
			nodes[links[a].source]
				.y0
				.total_cmp(&nodes[links[b].source].y0)
				.then(a.cmp(&b))
		});
		let mut y = node.y0;
		for l in incoming {
			links[l].y1 = y + links[l].width / 2.0;
			y += links[l].width;
		}
	}

	links
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sankey::types::{FlowLink, FlowNode};

	const EPS: f64 = 1e-6;

	fn stacked_config() -> SankeyConfig {
		SankeyConfig {
			iterations: 0,
			..SankeyConfig::default()
		}
	}

	/// Two sources (10, 5) flowing into one target (15).
	fn example_graph() -> FlowGraph {
		FlowGraph::new(
			vec![
				FlowNode::new("a", "A", NodeKind::Source),
				FlowNode::new("b", "B", NodeKind::Source),
				FlowNode::new("c", "C", NodeKind::Target),
			],
			vec![
				FlowLink::new("a", "c", 10.0),
				FlowLink::new("b", "c", 5.0),
			],
		)
	}

	fn node<'a>(layout: &'a SankeyLayout, id: &str) -> &'a LayoutNode {
		layout.nodes.iter().find(|n| n.id == id).unwrap()
	}

	#[test]
	fn example_scenario_heights_and_widths() {
		let layout = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		let (a, b, c) = (node(&layout, "a"), node(&layout, "b"), node(&layout, "c"));

		// left column constrains the scale: (560 - 20) / 15 = 36
		assert!((a.height() - 360.0).abs() < EPS);
		assert!((b.height() - 180.0).abs() < EPS);
		assert!((c.height() - 540.0).abs() < EPS);
		// target height equals the height of its combined inflow
		assert!((c.height() - (a.height() + b.height())).abs() < EPS);

		// link widths proportional to 10 and 5
		assert!((layout.links[0].width - 360.0).abs() < EPS);
		assert!((layout.links[1].width - 180.0).abs() < EPS);
		assert!((layout.links[0].width / layout.links[1].width - 2.0).abs() < EPS);
	}

	#[test]
	fn stacked_layout_positions_are_exact() {
		let layout = compute(&example_graph(), &stacked_config()).unwrap();
		let (a, b, c) = (node(&layout, "a"), node(&layout, "b"), node(&layout, "c"));

		// left column fills exactly: A at the top, B after one padding gap
		assert!((a.y0 - 0.0).abs() < EPS && (a.y1 - 360.0).abs() < EPS);
		assert!((b.y0 - 380.0).abs() < EPS && (b.y1 - 560.0).abs() < EPS);
		// the lone target floats to the vertical center of its leftover space
		assert!((c.y0 - 10.0).abs() < EPS && (c.y1 - 550.0).abs() < EPS);
	}

	#[test]
	fn link_bands_tile_the_target_edge() {
		let layout = compute(&example_graph(), &stacked_config()).unwrap();
		let c = node(&layout, "c");

		// incoming bands: A's band first (A sits above B), then B's
		let first = &layout.links[0];
		let second = &layout.links[1];
		assert!((first.y1 - (c.y0 + first.width / 2.0)).abs() < EPS);
		assert!((second.y1 - (c.y0 + first.width + second.width / 2.0)).abs() < EPS);
		// bands end flush with the bar bottom
		assert!((second.y1 + second.width / 2.0 - c.y1).abs() < EPS);
		// outgoing band centers on the source bar
		let a = node(&layout, "a");
		assert!((first.y0 - a.center_y()).abs() < EPS);
	}

	#[test]
	fn heights_scale_with_incident_weight() {
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("s1", "S1", NodeKind::Source),
				FlowNode::new("s2", "S2", NodeKind::Source),
				FlowNode::new("t1", "T1", NodeKind::Target),
				FlowNode::new("t2", "T2", NodeKind::Target),
			],
			vec![
				FlowLink::new("s1", "t1", 3.0),
				FlowLink::new("s2", "t1", 1.0),
				FlowLink::new("s2", "t2", 6.0),
			],
		);
		let layout = compute(&graph, &SankeyConfig::default()).unwrap();
		let (s1, s2) = (node(&layout, "s1"), node(&layout, "s2"));
		let (t1, t2) = (node(&layout, "t1"), node(&layout, "t2"));

		assert!(s2.height() > s1.height());
		assert!(t2.height() > t1.height());
		// one shared scale, so heights are exactly proportional to sums
		assert!((s2.height() / s1.height() - 7.0 / 3.0).abs() < EPS);
		assert!((t2.height() / t1.height() - 6.0 / 4.0).abs() < EPS);
	}

	#[test]
	fn stroke_width_never_drops_below_hairline() {
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("s", "S", NodeKind::Source),
				FlowNode::new("t1", "T1", NodeKind::Target),
				FlowNode::new("t2", "T2", NodeKind::Target),
			],
			vec![
				FlowLink::new("s", "t1", 0.001),
				FlowLink::new("s", "t2", 1000.0),
			],
		);
		let layout = compute(&graph, &SankeyConfig::default()).unwrap();
		let thin = &layout.links[0];
		let thick = &layout.links[1];

		assert!(thin.width < MIN_LINK_STROKE);
		assert!((thin.stroke_width() - MIN_LINK_STROKE).abs() < EPS);
		assert!((thick.stroke_width() - thick.width).abs() < EPS);
	}

	#[test]
	fn columns_sit_on_opposite_edges() {
		let layout = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		let config = SankeyConfig::default();
		for n in &layout.nodes {
			match n.kind {
				NodeKind::Source => {
					assert!((n.x0 - 0.0).abs() < EPS);
					assert!((n.x1 - config.node_width).abs() < EPS);
				}
				NodeKind::Target => {
					assert!((n.x1 - config.inner_width()).abs() < EPS);
				}
			}
		}
	}

	#[test]
	fn padding_and_bounds_hold_after_relaxation() {
		// uneven weights push the relaxation around; padding and bounds must survive
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("s1", "S1", NodeKind::Source),
				FlowNode::new("s2", "S2", NodeKind::Source),
				FlowNode::new("s3", "S3", NodeKind::Source),
				FlowNode::new("t1", "T1", NodeKind::Target),
				FlowNode::new("t2", "T2", NodeKind::Target),
			],
			vec![
				FlowLink::new("s1", "t2", 40.0),
				FlowLink::new("s2", "t1", 1.0),
				FlowLink::new("s3", "t2", 2.0),
				FlowLink::new("s3", "t1", 7.0),
			],
		);
		let config = SankeyConfig::default();
		let layout = compute(&graph, &config).unwrap();

		for kind in [NodeKind::Source, NodeKind::Target] {
			let mut column: Vec<&LayoutNode> =
				layout.nodes.iter().filter(|n| n.kind == kind).collect();
			column.sort_by(|a, b| a.y0.total_cmp(&b.y0));
			for pair in column.windows(2) {
				assert!(
					pair[1].y0 - pair[0].y1 >= config.node_padding - EPS,
					"padding violated: {} -> {}",
					pair[0].id,
					pair[1].id
				);
			}
			for n in &column {
				assert!(n.y0 >= -EPS && n.y1 <= config.inner_height() + EPS);
			}
		}
	}

	#[test]
	fn relaxation_never_changes_heights() {
		let relaxed = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		let stacked = compute(&example_graph(), &stacked_config()).unwrap();
		for (a, b) in relaxed.nodes.iter().zip(&stacked.nodes) {
			assert!((a.height() - b.height()).abs() < EPS);
		}
	}

	#[test]
	fn layout_is_deterministic() {
		let graph = example_graph();
		let config = SankeyConfig::default();
		assert_eq!(compute(&graph, &config).unwrap(), compute(&graph, &config).unwrap());
	}

	#[test]
	fn dangling_endpoint_rejects_the_dataset() {
		let mut graph = example_graph();
		graph.links.push(FlowLink::new("a", "ghost", 1.0));
		assert!(matches!(
			compute(&graph, &SankeyConfig::default()),
			Err(GraphError::UnknownNode { .. })
		));
	}

	#[test]
	fn invalid_value_rejects_the_dataset() {
		let mut graph = example_graph();
		graph.links[0].value = -1.0;
		assert!(matches!(
			compute(&graph, &SankeyConfig::default()),
			Err(GraphError::InvalidValue { .. })
		));
	}

	#[test]
	fn links_anchor_on_node_edges() {
		let layout = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		for link in &layout.links {
			let source = &layout.nodes[link.source];
			let target = &layout.nodes[link.target];
			assert!((link.x0 - source.x1).abs() < EPS);
			assert!((link.x1 - target.x0).abs() < EPS);
			assert!(link.y0 >= source.y0 - EPS && link.y0 <= source.y1 + EPS);
			assert!(link.y1 >= target.y0 - EPS && link.y1 <= target.y1 + EPS);
		}
	}

	#[test]
	fn curve_runs_between_anchors() {
		let layout = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		let link = &layout.links[0];

		let (sx, sy) = link.point_at(0.0);
		let (tx, ty) = link.point_at(1.0);
		assert!((sx - link.x0).abs() < EPS && (sy - link.y0).abs() < EPS);
		assert!((tx - link.x1).abs() < EPS && (ty - link.y1).abs() < EPS);

		// distance to a point on the curve is zero, far away it is not
		assert!(link.distance_to(sx, sy) < EPS);
		assert!(link.distance_to(sx, sy - 200.0) > 100.0);
	}

	#[test]
	fn node_hit_testing_respects_bounds() {
		let layout = compute(&example_graph(), &SankeyConfig::default()).unwrap();
		let a = node(&layout, "a");
		assert!(a.contains((a.x0 + a.x1) / 2.0, a.center_y()));
		assert!(!a.contains(a.x1 + 1.0, a.center_y()));
		assert!(!a.contains((a.x0 + a.x1) / 2.0, a.y1 + 1.0));
	}

	#[test]
	fn explicit_colors_win_over_palette() {
		let graph = FlowGraph::new(
			vec![
				FlowNode::new("s1", "S1", NodeKind::Source).with_color("#123456"),
				FlowNode::new("s2", "S2", NodeKind::Source),
				FlowNode::new("t", "T", NodeKind::Target),
			],
			vec![
				FlowLink::new("s1", "t", 1.0),
				FlowLink::new("s2", "t", 1.0),
			],
		);
		let layout = compute(&graph, &SankeyConfig::default()).unwrap();

		assert_eq!(node(&layout, "s1").color, "#123456");
		// s2 is the first source to fall back to the palette
		assert_eq!(node(&layout, "s2").color, crate::theme::PALETTE[1]);
		assert_eq!(node(&layout, "t").color, crate::theme::VALUE_SET);
		// links inherit the source fill
		assert_eq!(layout.links[0].color, "#123456");
	}

	#[test]
	fn empty_graph_yields_empty_layout() {
		let layout = compute(&FlowGraph::default(), &SankeyConfig::default()).unwrap();
		assert!(layout.nodes.is_empty());
		assert!(layout.links.is_empty());
	}

	#[test]
	fn unlinked_node_collapses_to_zero_height() {
		let mut graph = example_graph();
		graph.nodes.push(FlowNode::new("lonely", "Lonely", NodeKind::Source));
		let layout = compute(&graph, &SankeyConfig::default()).unwrap();
		assert!(node(&layout, "lonely").height().abs() < EPS);
	}
}
