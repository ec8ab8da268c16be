use leptos::prelude::*;

/// Visible notice for a failed export. Hidden while `error` is `None`.
#[component]
pub fn ErrorNotice(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
	move || {
		error.get().map(|message| {
			view! {
				<div class="ErrorNotice" role="alert">
					{format!("Export failed: {message}")}
				</div>
			}
		})
	}
}
