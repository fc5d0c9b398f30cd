//! Trunk entry point: mounts the app to the document body.

use fhir_terminology_explorer::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
