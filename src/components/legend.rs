//! Color key shown beside the flow diagram.

use leptos::prelude::*;

use super::sankey::{FlowGraph, NodeKind};
use crate::theme;

/// Color key for the diagram, derived from the dataset it sits next to.
#[component]
pub fn Legend(
	/// The dataset whose source colors to list.
	#[prop(into)]
	graph: Signal<FlowGraph>,
) -> impl IntoView {
	let systems = move || {
		graph
			.get()
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Source)
			.map(|n| {
				let color = n.color.clone().unwrap_or_else(|| theme::NEUTRAL.into());
				(n.name.clone(), color)
			})
			.collect::<Vec<_>>()
	};

	view! {
		<div class="legend">
			<h3 class="legend-title">"Legend"</h3>
			<div class="legend-grid">
				<div>
					<h4 class="legend-heading">"CodeSystems"</h4>
					<div class="legend-swatches">
						{move || {
							systems()
								.into_iter()
								.map(|(name, color)| {
									view! {
										<div class="legend-entry">
											<span
												class="legend-swatch"
												style=format!("background-color: {color};")
											></span>
											<span class="legend-label">{name}</span>
										</div>
									}
								})
								.collect_view()
						}}
					</div>
				</div>
				<div>
					<h4 class="legend-heading">"ValueSets & Connections"</h4>
					<div class="legend-entry">
						<span
							class="legend-swatch"
							style=format!("background-color: {};", theme::VALUE_SET)
						></span>
						<span class="legend-label">"FHIR ValueSets"</span>
					</div>
					<div class="legend-entry">
						<span class="legend-flow-sample"></span>
						<span class="legend-label">"Code Flow (colored by source)"</span>
					</div>
				</div>
			</div>
		</div>
	}
}
