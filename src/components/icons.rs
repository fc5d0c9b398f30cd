//! Stroke icons from the Lucide set, inlined so the app ships no icon font.

use leptos::prelude::*;

/// Which icon to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
	/// Linked boxes; the brand mark and the flow-diagram link.
	Network,
	/// Lightning bolt, for binding strength.
	Zap,
	/// Circled check, for allowed codes and valid values.
	CheckCircle,
	/// Circled cross, for rejected codes and invalid values.
	XCircle,
	/// Exclamation in a circle, heading validation behavior.
	AlertCircle,
	/// Lowercase i in a circle, heading background reading.
	Info,
	/// Play triangle on the animation control.
	Play,
	/// Pause bars on the animation control.
	Pause,
	/// Counter-clockwise arrow on the restart control.
	RotateCcw,
	/// Database cylinder, for CodeSystems.
	Database,
	/// Label tag, for ValueSets.
	Tag,
}

impl IconKind {
	fn markup(self) -> &'static str {
		match self {
			IconKind::Network => {
				r##"<rect x="16" y="16" width="6" height="6" rx="1"/><rect x="2" y="16" width="6" height="6" rx="1"/><rect x="9" y="2" width="6" height="6" rx="1"/><path d="M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3"/><path d="M12 12V8"/>"##
			}
			IconKind::Zap => r##"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"##,
			IconKind::CheckCircle => {
				r##"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"##
			}
			IconKind::XCircle => {
				r##"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"##
			}
			IconKind::AlertCircle => {
				r##"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"##
			}
			IconKind::Info => {
				r##"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"##
			}
			IconKind::Play => r##"<polygon points="6 3 20 12 6 21 6 3"/>"##,
			IconKind::Pause => {
				r##"<rect x="14" y="4" width="4" height="16" rx="1"/><rect x="6" y="4" width="4" height="16" rx="1"/>"##
			}
			IconKind::RotateCcw => {
				r##"<path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8"/><path d="M3 3v5h5"/>"##
			}
			IconKind::Database => {
				r##"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"##
			}
			IconKind::Tag => {
				r##"<path d="M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z"/><circle cx="7.5" cy="7.5" r=".5" fill="currentColor"/>"##
			}
		}
	}
}

/// A sized-by-CSS inline icon; pass extra classes for color and spacing.
#[component]
pub fn Icon(
	/// Which glyph to draw.
	kind: IconKind,
	/// Extra class names appended to the base `icon` class.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	view! {
		<svg
			class=format!("icon {class}")
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			aria-hidden="true"
			inner_html=kind.markup()
		></svg>
	}
}
