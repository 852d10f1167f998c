//! Dashboard shell: view tabs, email selector, and the active graph.

use leptos::prelude::*;
use log::info;

use crate::components::activity_graph::ActivityGraph;
use crate::components::degree_graph::DegreeGraph;
use crate::components::influence_graph::InfluenceGraph;
use crate::components::relationship_graph::RelationshipGraph;
use crate::data::generate::generate_records;
use crate::data::{distinct_emails, filter_by_referrer};

/// The four dashboard views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
	Relationship,
	Degree,
	Influence,
	Activity,
}

impl View {
	const ALL: [View; 4] = [View::Relationship, View::Degree, View::Influence, View::Activity];

	fn label(self) -> &'static str {
		match self {
			View::Relationship => "Relationship",
			View::Degree => "Degree",
			View::Influence => "Influence",
			View::Activity => "Activity",
		}
	}
}

/// Dashboard page. Holds the dataset and the `{selected view, selected
/// email}` pair; every view re-derives its own structures from the filtered
/// records.
#[component]
pub fn Home() -> impl IntoView {
	let records = StoredValue::new(generate_records(48));
	let emails = StoredValue::new(records.with_value(|r| distinct_emails(r)));
	info!(
		"dashboard: {} records, {} distinct emails",
		records.with_value(Vec::len),
		emails.with_value(Vec::len)
	);

	let (view, set_view) = signal(View::Relationship);
	let (email, set_email) =
		signal(emails.with_value(|e| e.first().cloned().unwrap_or_default()));

	let filtered = Memo::new(move |_| records.with_value(|r| filter_by_referrer(r, &email.get())));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<div class="toolbar">
					<div class="tabs">
						{View::ALL
							.into_iter()
							.map(|v| {
								view! {
									<button
										class="tab"
										class:active=move || view.get() == v
										on:click=move |_| set_view.set(v)
									>
										{v.label()}
									</button>
								}
							})
							.collect_view()}
					</div>
					<label class="email-selector">
						"Email"
						<select
							on:change=move |ev| set_email.set(event_target_value(&ev))
							prop:value=email
						>
							{emails.with_value(|emails| {
								emails
									.iter()
									.map(|e| view! { <option value=e.clone()>{e.clone()}</option> })
									.collect_view()
							})}
						</select>
					</label>
				</div>
				{move || match view.get() {
					View::Relationship => view! { <RelationshipGraph data=filtered /> }.into_any(),
					View::Degree => view! { <DegreeGraph data=filtered email=email /> }.into_any(),
					View::Influence => view! { <InfluenceGraph data=filtered /> }.into_any(),
					View::Activity => view! { <ActivityGraph data=filtered /> }.into_any(),
				}}
			</div>
		</ErrorBoundary>
	}
}
