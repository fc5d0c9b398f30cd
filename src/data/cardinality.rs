//! FHIR cardinality: bounds checking plus the worked examples and quiz
//! shown on the cardinality page.

use std::fmt;

/// Element multiplicity bounds: a minimum and an optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cardinality {
	/// Fewest occurrences allowed.
	pub min: u32,
	/// Most occurrences allowed; `None` means unbounded.
	pub max: Option<u32>,
}

impl Cardinality {
	/// Bounds with `None` as the unbounded maximum.
	pub const fn new(min: u32, max: Option<u32>) -> Self {
		Self { min, max }
	}

	/// Whether `count` occurrences satisfy the bounds.
	pub fn allows(&self, count: usize) -> bool {
		let count = count as u32;
		count >= self.min && self.max.is_none_or(|max| count <= max)
	}

	/// CSS modifier for the colored badge, one per standard shape.
	pub fn badge_class(&self) -> &'static str {
		match (self.min, self.max) {
			(1, Some(1)) => "badge-required-one",
			(0, Some(1)) => "badge-optional-one",
			(1, None) => "badge-required-many",
			(0, None) => "badge-optional-many",
			_ => "badge-other",
		}
	}
}

impl fmt::Display for Cardinality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.max {
			Some(max) => write!(f, "{}..{}", self.min, max),
			None => write!(f, "{}..*", self.min),
		}
	}
}

/// A value list that violates its example's bounds, with the reason shown
/// to the reader.
#[derive(Clone, Copy, Debug)]
pub struct InvalidCase {
	/// The offending value list.
	pub values: &'static [&'static str],
	/// Which bound it breaks, in reader-facing words.
	pub reason: &'static str,
}

/// One worked example: a Patient element, its bounds, and value lists on
/// both sides of them.
#[derive(Clone, Copy, Debug)]
pub struct CardinalityExample {
	/// Tab label.
	pub title: &'static str,
	/// Field label shown on each value card.
	pub field: &'static str,
	/// The bounds this example teaches.
	pub cardinality: Cardinality,
	/// What the bounds mean for this element.
	pub description: &'static str,
	/// Value lists that satisfy the bounds.
	pub valid: &'static [&'static [&'static str]],
	/// Value lists that break them.
	pub invalid: &'static [InvalidCase],
}

/// The worked examples, one per standard cardinality shape.
pub const EXAMPLES: [CardinalityExample; 4] = [
	CardinalityExample {
		title: "Patient Resource - Name",
		field: "Names",
		cardinality: Cardinality::new(1, None),
		description: "A patient must have at least one name, but can have multiple names",
		valid: &[
			&["John Doe"],
			&["John Doe", "Johnny D"],
			&["Dr. Jane Smith", "Jane Smith-Johnson", "J. Smith"],
		],
		invalid: &[InvalidCase {
			values: &[],
			reason: "No names provided (violates minimum of 1)",
		}],
	},
	CardinalityExample {
		title: "Patient Resource - Birth Date",
		field: "Birth Dates",
		cardinality: Cardinality::new(0, Some(1)),
		description: "A patient can have zero or one birth date (optional, but not multiple)",
		valid: &[&[], &["1985-03-15"]],
		invalid: &[InvalidCase {
			values: &["1985-03-15", "1985-03-16"],
			reason: "Multiple birth dates (violates maximum of 1)",
		}],
	},
	CardinalityExample {
		title: "Patient Resource - Identifier",
		field: "Identifiers",
		cardinality: Cardinality::new(0, None),
		description: "A patient can have zero or more identifiers (completely optional)",
		valid: &[
			&[],
			&["SSN: 123-45-6789"],
			&["SSN: 123-45-6789", "MRN: 98765", "Driver's License: DL123456"],
		],
		invalid: &[],
	},
	CardinalityExample {
		title: "Patient Resource - Gender",
		field: "Genders",
		cardinality: Cardinality::new(1, Some(1)),
		description: "A patient must have exactly one gender value",
		valid: &[&["male"], &["female"], &["other"]],
		invalid: &[
			InvalidCase {
				values: &[],
				reason: "No gender provided (violates requirement of exactly 1)",
			},
			InvalidCase {
				values: &["male", "female"],
				reason: "Multiple genders (violates maximum of 1)",
			},
		],
	},
];

/// A row in the quick-reference grid.
#[derive(Clone, Copy, Debug)]
pub struct CardinalityRule {
	/// The notation being explained.
	pub cardinality: Cardinality,
	/// Its plain-language reading.
	pub meaning: &'static str,
}

/// The quick-reference grid rows.
pub const REFERENCE: [CardinalityRule; 4] = [
	CardinalityRule {
		cardinality: Cardinality::new(1, Some(1)),
		meaning: "Required, exactly one",
	},
	CardinalityRule {
		cardinality: Cardinality::new(0, Some(1)),
		meaning: "Optional, maximum one",
	},
	CardinalityRule {
		cardinality: Cardinality::new(1, None),
		meaning: "Required, one or more",
	},
	CardinalityRule {
		cardinality: Cardinality::new(0, None),
		meaning: "Optional, zero or more",
	},
];

/// One knowledge-check question.
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
	/// The question text.
	pub prompt: &'static str,
	/// Answer choices, in display order.
	pub options: &'static [&'static str],
	/// Index of the right answer in `options`.
	pub correct: usize,
	/// Shown once the reader has answered.
	pub explanation: &'static str,
}

/// The knowledge-check questions.
pub const QUIZ: [QuizQuestion; 3] = [
	QuizQuestion {
		prompt: "What does the cardinality '1..*' mean?",
		options: &[
			"Exactly one element required",
			"Zero or one element allowed",
			"At least one element required, unlimited maximum",
			"Zero or more elements allowed",
		],
		correct: 2,
		explanation: "'1..*' means minimum 1, maximum unlimited - at least one element is required, but you can have as many as needed.",
	},
	QuizQuestion {
		prompt: "Which cardinality allows completely optional elements?",
		options: &["1..1", "1..*", "0..1", "0..*"],
		correct: 3,
		explanation: "'0..*' allows zero or more elements, making it completely optional with no upper limit.",
	},
	QuizQuestion {
		prompt: "If a FHIR element has cardinality '0..1', how many values can it have?",
		options: &["Exactly zero", "Exactly one", "Zero or one", "One or more"],
		correct: 2,
		explanation: "'0..1' means the element is optional (0) but if present, can only have one value (maximum 1).",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bounds_checking_covers_the_standard_shapes() {
		let required_one = Cardinality::new(1, Some(1));
		assert!(!required_one.allows(0));
		assert!(required_one.allows(1));
		assert!(!required_one.allows(2));

		let optional_one = Cardinality::new(0, Some(1));
		assert!(optional_one.allows(0));
		assert!(optional_one.allows(1));
		assert!(!optional_one.allows(2));

		let required_many = Cardinality::new(1, None);
		assert!(!required_many.allows(0));
		assert!(required_many.allows(1));
		assert!(required_many.allows(50));

		let optional_many = Cardinality::new(0, None);
		assert!(optional_many.allows(0));
		assert!(optional_many.allows(50));
	}

	#[test]
	fn display_uses_the_fhir_notation() {
		assert_eq!(Cardinality::new(1, Some(1)).to_string(), "1..1");
		assert_eq!(Cardinality::new(0, Some(1)).to_string(), "0..1");
		assert_eq!(Cardinality::new(1, None).to_string(), "1..*");
		assert_eq!(Cardinality::new(0, None).to_string(), "0..*");
	}

	#[test]
	fn worked_examples_agree_with_bounds_checking() {
		for example in &EXAMPLES {
			for values in example.valid {
				assert!(
					example.cardinality.allows(values.len()),
					"{}: {:?} should be valid",
					example.title,
					values
				);
			}
			for case in example.invalid {
				assert!(
					!example.cardinality.allows(case.values.len()),
					"{}: {:?} should be invalid",
					example.title,
					case.values
				);
			}
		}
	}

	#[test]
	fn standard_shapes_get_distinct_badges() {
		let mut classes: Vec<&str> = REFERENCE
			.iter()
			.map(|rule| rule.cardinality.badge_class())
			.collect();
		classes.sort_unstable();
		classes.dedup();
		assert_eq!(classes.len(), REFERENCE.len());
	}

	#[test]
	fn quiz_answers_are_in_range() {
		for question in &QUIZ {
			assert!(question.correct < question.options.len());
			assert_eq!(question.options.len(), 4);
		}
	}
}
