use super::BrushSetting;
use crate::engine::PaletteColor;
use crate::util::*;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

/// One round swatch per palette color. The selected swatch is outlined.
///
/// Each swatch carries its CSS color as its value. A single click handler on the group reads the
/// clicked swatch's value back into a `PaletteColor`.
#[component]
pub fn ColorPicker(color: RwSignal<PaletteColor>) -> impl IntoView {
	let pick = move |e: leptos::ev::MouseEvent| {
		let Some(swatch) = e.target().and_then(|t| t.dyn_into::<HtmlButtonElement>().ok()) else {
			return;
		};
		if let Some(picked) = swatch.value().parse::<PaletteColor>().ok_or_log("pick color") {
			color.set(picked);
		}
	};

	view! {
		<BrushSetting name="Color" on:click=pick>
			{PaletteColor::ALL
				.into_iter()
				.map(|swatch| {
					view! {
						<button
							class="Option Swatch"
							title=swatch.to_string()
							value=swatch.css()
							style:background-color=swatch.css()
							class:selected=move || color.get() == swatch
						></button>
					}
				})
				.collect_view()}
		</BrushSetting>
	}
}
