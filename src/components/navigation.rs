//! Top navigation bar with the active-route highlight.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icons::{Icon, IconKind};

/// Top bar with the brand and one link per learning page.
#[component]
pub fn Navigation() -> impl IntoView {
	// pathname is a Copy handle, so the class closure can be reused per link
	let pathname = use_location().pathname;
	let link_class = move |path: &'static str| {
		if pathname.get() == path {
			"nav-link active"
		} else {
			"nav-link"
		}
	};

	view! {
		<nav class="top-nav">
			<div class="top-nav-inner">
				<div class="brand">
					<Icon kind=IconKind::Network class="brand-icon" />
					<span class="brand-name">"FHIR Terminology"</span>
				</div>

				<div class="nav-links">
					<a href="/sankey" class=move || link_class("/sankey")>
						<Icon kind=IconKind::Network class="nav-icon" />
						<span>"Sankey Diagram"</span>
					</a>
					<a href="/binding" class=move || link_class("/binding")>
						<Icon kind=IconKind::Zap class="nav-icon" />
						<span>"Binding Strength"</span>
					</a>
					<a href="/cardinality" class=move || link_class("/cardinality")>
						<Icon kind=IconKind::CheckCircle class="nav-icon" />
						<span>"Cardinality"</span>
					</a>
				</div>
			</div>
		</nav>
	}
}
