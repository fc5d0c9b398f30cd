//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod data;
pub mod theme;

mod pages;

// Top-Level pages
use crate::components::navigation::Navigation;
use crate::pages::binding::BindingPage;
use crate::pages::cardinality::CardinalityPage;
use crate::pages::flow::FlowPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the three learning pages; everything else
/// redirects to the flow diagram.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="FHIR Terminology Explorer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="app-shell">
				<Navigation />
				<Routes fallback=|| view! { <Redirect path="/sankey" /> }>
					<Route path=path!("/sankey") view=FlowPage />
					<Route path=path!("/binding") view=BindingPage />
					<Route path=path!("/cardinality") view=CardinalityPage />
					<Route path=path!("/") view=|| view! { <Redirect path="/sankey" /> } />
				</Routes>
			</div>
		</Router>
	}
}
