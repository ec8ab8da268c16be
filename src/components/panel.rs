use leptos::prelude::*;

/// Floating bar along the bottom edge of the viewport.
#[component]
pub fn Panel(children: Children) -> impl IntoView {
	view! { <div class="Panel">{children()}</div> }
}
