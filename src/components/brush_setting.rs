use crate::engine::BrushSize;
use leptos::prelude::*;

/// A labeled group of mutually exclusive toolbar options.
#[component]
pub fn BrushSetting(#[prop(into)] name: String, children: Children) -> impl IntoView {
	view! {
		<div class="BrushSetting" role="radiogroup" aria-label=name>
			{children()}
		</div>
	}
}

/// Circular indicators for each brush width, with a dot drawn at the brush's own size.
#[component]
pub fn BrushSizes(brush_size: RwSignal<BrushSize>) -> impl IntoView {
	view! {
		<BrushSetting name="Brush size">
			{BrushSize::ALL
				.into_iter()
				.map(|size| {
					let diameter = format!("{}px", size.pixels());
					view! {
						<button
							class="Option BrushSize"
							title=size.to_string()
							class:selected=move || brush_size.get() == size
							on:click=move |_| brush_size.set(size)
						>
							<span
								class="BrushDot"
								style:width=diameter.clone()
								style:height=diameter
							></span>
						</button>
					}
				})
				.collect_view()}
		</BrushSetting>
	}
}
