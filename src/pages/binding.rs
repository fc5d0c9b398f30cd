use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::data::binding::BINDING_LEVELS;

/// Dwell time on each strength while the animation runs.
const CYCLE_MS: i32 = 3000;

/// Position in the binding-strength walkthrough; index arithmetic only, so
/// it stays testable without a browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCycle {
	index: usize,
	len: usize,
}

impl StageCycle {
	pub fn new(len: usize) -> Self {
		Self { index: 0, len }
	}

	pub fn index(&self) -> usize {
		self.index
	}

	/// Step to the next stage, wrapping after the last one.
	pub fn advance(&mut self) {
		if self.len > 0 {
			self.index = (self.index + 1) % self.len;
		}
	}

	/// Jump directly to a stage; out-of-range picks are ignored.
	pub fn select(&mut self, index: usize) {
		if index < self.len {
			self.index = index;
		}
	}

	pub fn restart(&mut self) {
		self.index = 0;
	}
}

/// The binding-strength walkthrough page.
///
/// A stage timer advances through the four strengths every three seconds;
/// the controls pause it or jump around, and the timer is torn down with
/// the page.
#[component]
pub fn BindingPage() -> impl IntoView {
	let (cycle, set_cycle) = signal(StageCycle::new(BINDING_LEVELS.len()));
	let (playing, set_playing) = signal(true);
	let current = move || BINDING_LEVELS[cycle.get().index()];

	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// the cleanup hook only accepts Send + Sync captures, so the timer id
	// lives in an arena slot instead of next to the Rc-held callback
	let interval = StoredValue::new(None::<i32>);

	let tick_fx = tick.clone();
	Effect::new(move |_| {
		let window = web_sys::window().unwrap();
		// drop any previous timer before deciding whether to start one
		if let Some(id) = interval.try_update_value(|slot| slot.take()).flatten() {
			window.clear_interval_with_handle(id);
		}
		if !playing.get() {
			return;
		}
		*tick_fx.borrow_mut() = Some(Closure::new(move || {
			set_cycle.update(|c| c.advance());
		}));
		if let Some(ref cb) = *tick_fx.borrow() {
			let id = window
				.set_interval_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					CYCLE_MS,
				)
				.unwrap();
			interval.set_value(Some(id));
		}
	});

	on_cleanup(move || {
		if let Some(id) = interval.try_update_value(|slot| slot.take()).flatten() {
			if let Some(window) = web_sys::window() {
				window.clear_interval_with_handle(id);
			}
		}
	});

	view! {
		<div class="page">
			<header class="page-header">
				<h1>"FHIR ValueSet Binding Strength"</h1>
				<p class="page-subtitle">
					"Understanding how binding strength affects code validation and flexibility in FHIR implementations"
				</p>
			</header>

			<div class="level-picker">
				{BINDING_LEVELS
					.into_iter()
					.enumerate()
					.map(|(i, level)| {
						view! {
							<button
								class=move || {
									if cycle.get().index() == i {
										format!("level-btn active {}", level.id)
									} else {
										"level-btn".to_string()
									}
								}
								on:click=move |_| set_cycle.update(|c| c.select(i))
							>
								{level.name}
							</button>
						}
					})
					.collect_view()}
				<div class="cycle-controls">
					<button
						class="control-btn"
						title=move || if playing.get() { "Pause" } else { "Play" }
						on:click=move |_| set_playing.update(|p| *p = !*p)
					>
						{move || {
							let kind = if playing.get() { IconKind::Pause } else { IconKind::Play };
							view! { <Icon kind=kind class="control-icon" /> }
						}}
					</button>
					<button
						class="control-btn"
						title="Restart"
						on:click=move |_| set_cycle.update(|c| c.restart())
					>
						<Icon kind=IconKind::RotateCcw class="control-icon" />
					</button>
				</div>
			</div>

			<div class="binding-grid">
				<div class=move || format!("binding-card {}", current().id)>
					<h2 class="binding-name" style=move || format!("color: {};", current().accent)>
						{move || current().name}
					</h2>
					<p class="binding-description">{move || current().description}</p>

					<div class="meter">
						<div class="meter-head">
							<span>"Flexibility Level"</span>
							<span
								class="meter-value"
								style=move || format!("color: {};", current().accent)
							>
								{move || format!("{}%", current().flexibility)}
							</span>
						</div>
						<div class="meter-track">
							<div
								class="meter-fill"
								style=move || {
									format!(
										"width: {}%; background-color: {};",
										current().flexibility,
										current().accent,
									)
								}
							></div>
						</div>
					</div>

					<div class="use-case">
						<h4>"Example Use Case:"</h4>
						<p>{move || current().example}</p>
					</div>
				</div>

				<div class="card validation-card">
					<h3 class="card-title-row">
						<Icon kind=IconKind::AlertCircle class="title-icon accent-blue" />
						"Code Validation Behavior"
					</h3>
					<p class="validation-mode" style=move || format!("color: {};", current().accent)>
						{move || current().validation}
					</p>

					<h4 class="chip-heading ok">
						<Icon kind=IconKind::CheckCircle class="chip-heading-icon" />
						"Allowed Codes"
					</h4>
					<div class="chips">
						{move || {
							current()
								.allowed
								.iter()
								.map(|code| {
									view! {
										<div class="chip ok">
											<Icon kind=IconKind::CheckCircle class="chip-icon" />
											<code>{*code}</code>
										</div>
									}
								})
								.collect_view()
						}}
					</div>

					{move || {
						(!current().rejected.is_empty())
							.then(|| {
								view! {
									<h4 class="chip-heading bad">
										<Icon kind=IconKind::XCircle class="chip-heading-icon" />
										"Rejected Codes"
									</h4>
									<div class="chips">
										{current()
											.rejected
											.iter()
											.map(|code| {
												view! {
													<div class="chip bad">
														<Icon kind=IconKind::XCircle class="chip-icon" />
														<code>{*code}</code>
													</div>
												}
											})
											.collect_view()}
									</div>
								}
							})
					}}
				</div>
			</div>

			<section class="card">
				<h3 class="card-title-row">
					<Icon kind=IconKind::Info class="title-icon accent-blue" />
					"Binding Strength Comparison"
				</h3>
				<table class="compare-table">
					<thead>
						<tr>
							<th>"Binding Strength"</th>
							<th>"Flexibility"</th>
							<th>"Validation"</th>
							<th>"Use Case"</th>
						</tr>
					</thead>
					<tbody>
						{BINDING_LEVELS
							.into_iter()
							.enumerate()
							.map(|(i, level)| {
								view! {
									<tr class=move || {
										if cycle.get().index() == i { "active" } else { "" }
									}>
										<td>
											<span
												class="level-name"
												style=format!("color: {};", level.accent)
											>
												{level.name}
											</span>
										</td>
										<td>
											<div class="mini-meter">
												<div
													class="mini-meter-fill"
													style=format!(
														"width: {}%; background-color: {};",
														level.flexibility,
														level.accent,
													)
												></div>
											</div>
											<span class="mini-meter-value">
												{format!("{}%", level.flexibility)}
											</span>
										</td>
										<td>{level.validation}</td>
										<td>{level.example}</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			</section>

			<footer class="page-footer">
				<p>
					"Understanding FHIR binding strength helps developers implement proper validation and extensibility. Animation cycles every 3 seconds - use controls to pause or navigate manually."
				</p>
			</footer>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycle_starts_at_the_first_stage() {
		assert_eq!(StageCycle::new(4).index(), 0);
	}

	#[test]
	fn advance_wraps_after_the_last_stage() {
		let mut cycle = StageCycle::new(4);
		for expected in [1, 2, 3, 0, 1] {
			cycle.advance();
			assert_eq!(cycle.index(), expected);
		}
	}

	#[test]
	fn select_jumps_and_ignores_out_of_range() {
		let mut cycle = StageCycle::new(4);
		cycle.select(2);
		assert_eq!(cycle.index(), 2);
		cycle.select(9);
		assert_eq!(cycle.index(), 2);
	}

	#[test]
	fn restart_returns_to_the_first_stage() {
		let mut cycle = StageCycle::new(4);
		cycle.select(3);
		cycle.restart();
		assert_eq!(cycle.index(), 0);
	}

	#[test]
	fn empty_cycle_stays_put() {
		let mut cycle = StageCycle::new(0);
		cycle.advance();
		cycle.select(0);
		assert_eq!(cycle.index(), 0);
	}

	#[test]
	fn interval_slot_meets_cleanup_thread_bounds() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<StoredValue<Option<i32>>>();
	}

	#[test]
	fn cycle_covers_every_binding_level() {
		let mut cycle = StageCycle::new(BINDING_LEVELS.len());
		let mut seen = vec![false; BINDING_LEVELS.len()];
		for _ in 0..BINDING_LEVELS.len() {
			seen[cycle.index()] = true;
			cycle.advance();
		}
		assert!(seen.iter().all(|s| *s));
		assert_eq!(cycle.index(), 0);
	}
}
