//! Static background reading for the flow-diagram page.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};

/// Background reading shown under the diagram.
#[component]
pub fn InfoPanel() -> impl IntoView {
	view! {
		<div class="card info-panel">
			<h3 class="card-title-row">
				<Icon kind=IconKind::Info class="title-icon accent-blue" />
				"FHIR Terminology Overview"
			</h3>

			<div class="info-grid">
				<div>
					<h4 class="info-heading">
						<Icon kind=IconKind::Database class="info-icon accent-blue" />
						"CodeSystems"
					</h4>
					<p class="info-text">
						"CodeSystems define the actual codes, their meanings, and hierarchical relationships. They are the authoritative source of clinical terminology."
					</p>
					<dl class="info-list">
						<div><dt>"SNOMED CT:"</dt><dd>"Comprehensive clinical terminology"</dd></div>
						<div><dt>"LOINC:"</dt><dd>"Laboratory and clinical observations"</dd></div>
						<div><dt>"ICD-10-CM:"</dt><dd>"Diagnosis classification system"</dd></div>
						<div><dt>"RxNorm:"</dt><dd>"Normalized medication names"</dd></div>
					</dl>
				</div>

				<div>
					<h4 class="info-heading">
						<Icon kind=IconKind::Tag class="info-icon accent-green" />
						"ValueSets"
					</h4>
					<p class="info-text">
						"ValueSets are curated collections of codes from one or more CodeSystems, designed for specific use cases in healthcare applications."
					</p>
					<dl class="info-list">
						<div><dt>"Clinical Findings:"</dt><dd>"Signs, symptoms, conditions"</dd></div>
						<div><dt>"Medications:"</dt><dd>"Pharmaceutical products"</dd></div>
						<div><dt>"Procedures:"</dt><dd>"Medical interventions"</dd></div>
						<div><dt>"Lab Tests:"</dt><dd>"Diagnostic test panels"</dd></div>
					</dl>
				</div>
			</div>

			<div class="info-callout">
				<p>
					<strong>"Interactive: "</strong>
					"Hover over nodes and connections to see detailed information about each CodeSystem, ValueSet, and their relationships."
				</p>
			</div>
		</div>
	}
}
