//! End-to-end checks running the shipped dataset through validation,
//! layout, and hit-testing the same way the diagram page does.

use fhir_terminology_explorer::components::sankey::NodeKind;
use fhir_terminology_explorer::components::sankey::layout::{self, SankeyConfig, SankeyLayout};
use fhir_terminology_explorer::components::sankey::state::{Hover, SankeyState};
use fhir_terminology_explorer::data::terminology;

const EPS: f64 = 1e-6;

fn shipped_layout() -> (SankeyLayout, SankeyConfig) {
	let config = SankeyConfig::default();
	let layout = layout::compute(&terminology::flow_graph(), &config).unwrap();
	(layout, config)
}

fn index_of(layout: &SankeyLayout, id: &str) -> usize {
	layout.nodes.iter().position(|n| n.id == id).unwrap()
}

#[test]
fn shipped_dataset_lays_out_within_bounds() {
	let (layout, config) = shipped_layout();

	assert_eq!(layout.nodes.len(), 16);
	assert_eq!(layout.links.len(), 18);
	for node in &layout.nodes {
		assert!(node.y0 >= -EPS, "{} above the top edge", node.id);
		assert!(node.y1 <= config.inner_height() + EPS, "{} below the bottom edge", node.id);
	}
}

#[test]
fn tightest_column_exactly_fills_the_height() {
	let (layout, config) = shipped_layout();

	// nine value sets share 354 units of flow, so their column governs
	// the vertical scale and fills the drawable height exactly
	let heights: f64 = layout
		.nodes
		.iter()
		.filter(|n| n.kind == NodeKind::Target)
		.map(|n| n.height())
		.sum();
	let gaps = config.node_padding * 8.0;
	assert!((heights + gaps - config.inner_height()).abs() < EPS);
}

#[test]
fn node_heights_track_incident_flow() {
	let (layout, _) = shipped_layout();

	// snomed contributes 86 units, hl7v3 33; heights share one scale
	let snomed = &layout.nodes[index_of(&layout, "snomed")];
	let hl7v3 = &layout.nodes[index_of(&layout, "hl7v3")];
	assert!((snomed.height() / hl7v3.height() - 86.0 / 33.0).abs() < EPS);
}

#[test]
fn link_bands_tile_both_node_edges() {
	let (layout, _) = shipped_layout();

	for (i, node) in layout.nodes.iter().enumerate() {
		let outgoing: f64 = layout.links.iter().filter(|l| l.source == i).map(|l| l.width).sum();
		let incoming: f64 = layout.links.iter().filter(|l| l.target == i).map(|l| l.width).sum();
		assert!(
			(outgoing.max(incoming) - node.height()).abs() < EPS,
			"bands do not tile {}",
			node.id
		);
	}
}

#[test]
fn column_gaps_respect_the_padding() {
	let (layout, config) = shipped_layout();

	for kind in [NodeKind::Source, NodeKind::Target] {
		let mut column: Vec<_> = layout.nodes.iter().filter(|n| n.kind == kind).collect();
		column.sort_by(|a, b| a.y0.total_cmp(&b.y0));
		for pair in column.windows(2) {
			assert!(pair[1].y0 - pair[0].y1 >= config.node_padding - EPS);
		}
	}
}

#[test]
fn layout_is_stable_across_runs() {
	let (first, _) = shipped_layout();
	let (second, _) = shipped_layout();
	assert_eq!(first, second);
}

#[test]
fn hovering_resolves_nodes_and_links() {
	let (layout, _) = shipped_layout();
	let mut state = SankeyState::new(layout);

	let snomed = index_of(&state.layout, "snomed");
	let bar = &state.layout.nodes[snomed];
	let hit = state.hit_test((bar.x0 + bar.x1) / 2.0, bar.center_y());
	assert_eq!(hit, Hover::Node(snomed));

	state.set_hover(hit);
	let tip = state.tooltip().unwrap();
	assert_eq!(tip.title, "SNOMED CT");
	assert_eq!(tip.detail, "Clinical terminology for healthcare");

	// the first link in the dataset runs snomed -> clinical findings
	state.set_hover(Hover::Link(0));
	let tip = state.tooltip().unwrap();
	assert_eq!(tip.title, "SNOMED CT → Clinical Findings");
	assert_eq!(tip.detail, "Flow: 25 connections");
}
