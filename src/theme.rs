//! Color scheme shared by the canvas renderer, the legend, and the datasets.

/// Fill colors for the fixed code systems, one palette entry per system.
pub mod system {
	/// SNOMED CT (rose) - comprehensive clinical terminology.
	pub const SNOMED: &str = "#E11D48";
	/// LOINC (violet) - laboratory and clinical observations.
	pub const LOINC: &str = "#7C3AED";
	/// ICD-10-CM (red) - diagnosis codes.
	pub const ICD10CM: &str = "#DC2626";
	/// RxNorm (emerald) - medication codes.
	pub const RXNORM: &str = "#059669";
	/// CPT (blue) - procedure codes.
	pub const CPT: &str = "#2563EB";
	/// UCUM (orange) - units of measure.
	pub const UCUM: &str = "#EA580C";
	/// HL7 v3 (brown) - administrative codes.
	pub const HL7V3: &str = "#7C2D12";
}

/// Accent colors for the four binding-strength levels.
pub mod strength {
	/// Required binding accent.
	pub const REQUIRED: &str = "#DC2626";
	/// Extensible binding accent.
	pub const EXTENSIBLE: &str = "#EA580C";
	/// Preferred binding accent.
	pub const PREFERRED: &str = "#D97706";
	/// Example binding accent.
	pub const EXAMPLE: &str = "#059669";
}

/// Shared fill for every value-set node.
pub const VALUE_SET: &str = "#10B981";

/// Fallback palette for source nodes that carry no explicit color.
pub const PALETTE: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Neutral gray for anything that resolves to no color of its own.
pub const NEUTRAL: &str = "#6B7280";

/// Node label text on the canvas.
pub const LABEL: &str = "#1F2937";

/// Canvas background.
pub const CANVAS_BG: &str = "#ffffff";
