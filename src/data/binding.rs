//! The four FHIR ValueSet binding strengths, ordered strictest first.

use crate::theme;

/// One binding strength with its teaching copy and validation example.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingLevel {
	/// Stable id, also used as a CSS modifier class.
	pub id: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Accent color for the flexibility meter.
	pub accent: &'static str,
	/// How much leeway implementers get, as a percentage.
	pub flexibility: u8,
	/// What the strength means.
	pub description: &'static str,
	/// How validators treat codes under this strength.
	pub validation: &'static str,
	/// A concrete element that typically carries this binding.
	pub example: &'static str,
	/// Codes a validator accepts in the example scenario.
	pub allowed: &'static [&'static str],
	/// Codes a validator rejects; empty for the looser strengths.
	pub rejected: &'static [&'static str],
}

/// The four strengths the walkthrough cycles through, strictest first.
pub const BINDING_LEVELS: [BindingLevel; 4] = [
	BindingLevel {
		id: "required",
		name: "Required",
		accent: theme::strength::REQUIRED,
		flexibility: 10,
		description: "Only codes from the specified ValueSet are allowed. No extensions permitted.",
		validation: "Strict validation - codes must exist in the ValueSet",
		example: "Administrative gender codes (male, female, other, unknown)",
		allowed: &["male", "female", "other", "unknown"],
		rejected: &["M", "F", "custom-gender"],
	},
	BindingLevel {
		id: "extensible",
		name: "Extensible",
		accent: theme::strength::EXTENSIBLE,
		flexibility: 40,
		description: "Codes from the ValueSet are preferred, but additional codes may be used if needed.",
		validation: "Flexible validation - ValueSet codes preferred, extensions allowed",
		example: "Condition severity codes (mild, moderate, severe + custom severity)",
		allowed: &["mild", "moderate", "severe", "custom-critical"],
		rejected: &[],
	},
	BindingLevel {
		id: "preferred",
		name: "Preferred",
		accent: theme::strength::PREFERRED,
		flexibility: 70,
		description: "Codes from the ValueSet are recommended but not required. Alternative codes are acceptable.",
		validation: "Lenient validation - ValueSet codes recommended, alternatives accepted",
		example: "Body site codes (SNOMED preferred, but ICD-10 or local codes allowed)",
		allowed: &["snomed:123456", "icd10:K35.9", "local:appendix"],
		rejected: &[],
	},
	BindingLevel {
		id: "example",
		name: "Example",
		accent: theme::strength::EXAMPLE,
		flexibility: 100,
		description: "Codes are provided as examples only. Any appropriate code may be used.",
		validation: "No validation - any semantically appropriate code accepted",
		example: "Observation categories (survey, exam, therapy, or any relevant code)",
		allowed: &["survey", "exam", "therapy", "custom-category", "any-code"],
		rejected: &[],
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_run_strict_to_loose() {
		for pair in BINDING_LEVELS.windows(2) {
			assert!(pair[0].flexibility < pair[1].flexibility);
		}
	}

	#[test]
	fn ids_are_unique() {
		for level in &BINDING_LEVELS {
			assert_eq!(
				BINDING_LEVELS.iter().filter(|l| l.id == level.id).count(),
				1
			);
		}
	}

	#[test]
	fn only_the_required_strength_rejects_codes() {
		for level in &BINDING_LEVELS {
			assert!(!level.allowed.is_empty());
			if level.id == "required" {
				assert!(!level.rejected.is_empty());
			} else {
				assert!(level.rejected.is_empty());
			}
		}
	}

	#[test]
	fn flexibility_stays_a_percentage() {
		for level in &BINDING_LEVELS {
			assert!(level.flexibility <= 100);
		}
	}
}
