use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::data::cardinality::{Cardinality, EXAMPLES, QUIZ, REFERENCE};

/// Answers picked so far, one slot per question. Feedback for a question
/// shows once it has an answer; picking again changes the answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizProgress {
	answers: [Option<usize>; QUIZ.len()],
}

impl QuizProgress {
	pub fn answer(&mut self, question: usize, choice: usize) {
		if let Some(slot) = self.answers.get_mut(question) {
			*slot = Some(choice);
		}
	}

	pub fn choice(&self, question: usize) -> Option<usize> {
		self.answers.get(question).copied().flatten()
	}

	pub fn answered(&self, question: usize) -> bool {
		self.choice(question).is_some()
	}

	pub fn all_answered(&self) -> bool {
		self.answers.iter().all(|a| a.is_some())
	}

	/// How many picks match the answer key.
	pub fn score(&self) -> usize {
		QUIZ.iter()
			.enumerate()
			.filter(|(i, q)| self.choice(*i) == Some(q.correct))
			.count()
	}
}

fn badge(cardinality: Cardinality) -> impl IntoView {
	view! {
		<span class=format!("badge {}", cardinality.badge_class())>{cardinality.to_string()}</span>
	}
}

/// One value list with its verdict; `reason` is present for invalid cases.
fn value_card(
	field: &'static str,
	values: &'static [&'static str],
	reason: Option<&'static str>,
) -> impl IntoView {
	let ok = reason.is_none();
	let (icon, icon_class, verdict) = if ok {
		(IconKind::CheckCircle, "value-icon ok", "Valid")
	} else {
		(IconKind::XCircle, "value-icon bad", "Invalid")
	};

	view! {
		<div class=if ok { "value-card ok" } else { "value-card bad" }>
			<div class="value-card-head">
				<Icon kind=icon class=icon_class />
				<span>{verdict}</span>
			</div>
			<div class="value-card-body">
				<strong>{field}":"</strong>
				{if values.is_empty() {
					view! { <span class="value-none">" (none)"</span> }.into_any()
				} else {
					view! {
						<ul class="value-list">
							{values.iter().map(|value| view! { <li>{*value}</li> }).collect_view()}
						</ul>
					}
						.into_any()
				}}
			</div>
			{reason
				.map(|reason| {
					view! {
						<div class="value-reason">
							<Icon kind=IconKind::AlertCircle class="reason-icon" />
							{reason}
						</div>
					}
				})}
		</div>
	}
}

/// The cardinality teaching page: reference grid, worked examples, and a
/// short knowledge check.
#[component]
pub fn CardinalityPage() -> impl IntoView {
	let (example, set_example) = signal(0usize);
	let (quiz_tab, set_quiz_tab) = signal(0usize);
	let (progress, set_progress) = signal(QuizProgress::default());

	let current_example = move || EXAMPLES[example.get()];

	view! {
		<div class="page">
			<header class="page-header">
				<h1>"FHIR Cardinality Interactive Learning"</h1>
				<p class="page-subtitle">
					"Learn how FHIR cardinality constraints work with interactive examples"
				</p>
			</header>

			<section class="card reference-card">
				<h2 class="card-title">"Cardinality Reference"</h2>
				<div class="reference-grid">
					{REFERENCE
						.iter()
						.map(|rule| {
							view! {
								<div class="reference-entry">
									{badge(rule.cardinality)}
									<span>{rule.meaning}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="example-section">
				<h2 class="section-title">"Interactive Examples"</h2>
				<div class="tab-row">
					{EXAMPLES
						.iter()
						.enumerate()
						.map(|(i, ex)| {
							view! {
								<button
									class=move || {
										if example.get() == i { "tab-btn active" } else { "tab-btn" }
									}
									on:click=move |_| set_example.set(i)
								>
									{ex.title}
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="card example-card">
					<div class="example-head">
						<h3>{move || current_example().title}</h3>
						{move || badge(current_example().cardinality)}
					</div>
					<p class="example-description">{move || current_example().description}</p>

					<div class="example-columns">
						<div>
							<h4 class="col-heading ok">
								<Icon kind=IconKind::CheckCircle class="col-icon" />
								"Valid Examples"
							</h4>
							<div class="value-cards">
								{move || {
									let ex = current_example();
									ex.valid
										.iter()
										.map(|values| value_card(ex.field, values, None))
										.collect_view()
								}}
							</div>
						</div>
						{move || {
							let ex = current_example();
							(!ex.invalid.is_empty())
								.then(|| {
									view! {
										<div>
											<h4 class="col-heading bad">
												<Icon kind=IconKind::XCircle class="col-icon" />
												"Invalid Examples"
											</h4>
											<div class="value-cards">
												{ex.invalid
													.iter()
													.map(|case| value_card(
														ex.field,
														case.values,
														Some(case.reason),
													))
													.collect_view()}
											</div>
										</div>
									}
								})
						}}
					</div>
				</div>
			</section>

			<section class="quiz-section">
				<h2 class="section-title">"Knowledge Check"</h2>
				<div class="tab-row">
					{(0..QUIZ.len())
						.map(|i| {
							view! {
								<button
									class=move || {
										if quiz_tab.get() == i {
											"tab-btn quiz active"
										} else {
											"tab-btn quiz"
										}
									}
									on:click=move |_| set_quiz_tab.set(i)
								>
									{format!("Question {}", i + 1)}
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="card quiz-card">
					<h3 class="quiz-prompt">{move || QUIZ[quiz_tab.get()].prompt}</h3>
					<div class="quiz-options">
						{move || {
							let q = quiz_tab.get();
							let question = QUIZ[q];
							let chosen = progress.get().choice(q);
							question
								.options
								.iter()
								.enumerate()
								.map(|(i, option)| {
									let class = match chosen {
										None => "quiz-option",
										Some(c) => {
											if i == question.correct {
												"quiz-option correct"
											} else if c == i {
												"quiz-option wrong"
											} else {
												"quiz-option muted"
											}
										}
									};
									let marker = chosen
										.and_then(|c| {
											if i == question.correct {
												Some((IconKind::CheckCircle, "quiz-marker ok"))
											} else if c == i {
												Some((IconKind::XCircle, "quiz-marker bad"))
											} else {
												None
											}
										});
									view! {
										<button
											class=class
											on:click=move |_| {
												set_progress.update(|p| p.answer(q, i))
											}
										>
											{marker
												.map(|(kind, class)| {
													view! { <Icon kind=kind class=class /> }
												})}
											<span>{*option}</span>
										</button>
									}
								})
								.collect_view()
						}}
					</div>

					{move || {
						let q = quiz_tab.get();
						progress
							.get()
							.answered(q)
							.then(|| {
								view! {
									<div class="quiz-feedback">
										<Icon kind=IconKind::AlertCircle class="feedback-icon" />
										<div>
											<p class="feedback-label">"Explanation:"</p>
											<p>{QUIZ[q].explanation}</p>
										</div>
									</div>
								}
							})
					}}

					{move || {
						let p = progress.get();
						p.all_answered()
							.then(|| {
								view! {
									<p class="quiz-score">
										{format!("Score: {} / {}", p.score(), QUIZ.len())}
									</p>
								}
							})
					}}
				</div>
			</section>

			<section class="takeaways">
				<h2>"Key Takeaways"</h2>
				<ul>
					<li>
						<strong>"1..1"</strong>
						" means exactly one value is required"
					</li>
					<li>
						<strong>"0..1"</strong>
						" means the element is optional but can have at most one value"
					</li>
					<li>
						<strong>"1..*"</strong>
						" means at least one value is required, but unlimited additional values are allowed"
					</li>
					<li>
						<strong>"0..*"</strong>
						" means the element is completely optional with no upper limit"
					</li>
					<li>
						"FHIR cardinality ensures data consistency and interoperability across healthcare systems"
					</li>
				</ul>
			</section>
		</div>
	}
}
