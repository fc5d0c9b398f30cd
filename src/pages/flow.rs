use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::info_panel::InfoPanel;
use crate::components::legend::Legend;
use crate::components::sankey::SankeyCanvas;
use crate::data::terminology;

/// The CodeSystem -> ValueSet flow diagram page.
#[component]
pub fn FlowPage() -> impl IntoView {
	let graph = Signal::derive(terminology::flow_graph);

	view! {
		<div class="page">
			<header class="page-header">
				<div class="page-title">
					<Icon kind=IconKind::Network class="page-title-icon" />
					<h1>"FHIR Terminology Relationships"</h1>
				</div>
				<p class="page-subtitle">
					"Visualizing how FHIR CodeSystems contribute codes to ValueSets used in healthcare interoperability"
				</p>
			</header>

			<Legend graph=graph />

			<section class="card diagram-card">
				<h2 class="card-title">"CodeSystem → ValueSet Flow Diagram"</h2>
				<ErrorBoundary fallback=|errors| {
					view! {
						<div class="error-panel">
							<h3>"The flow dataset was rejected"</h3>
							<ul>
								{move || {
									errors
										.get()
										.into_iter()
										.map(|(_, e)| view! { <li>{e.to_string()}</li> })
										.collect_view()
								}}
							</ul>
						</div>
					}
				}>
					{move || {
						graph.get().validate().map(|_| view! { <SankeyCanvas data=graph /> })
					}}
				</ErrorBoundary>
			</section>

			<InfoPanel />

			<footer class="page-footer">
				<p>
					"Based on HL7 FHIR R4 terminology standards. Flow widths represent relative usage frequency in typical healthcare implementations."
				</p>
			</footer>
		</div>
	}
}
