use crate::components::*;
use crate::engine::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::use_location;
use leptos_use::{use_window_size, UseWindowSizeReturn};

/// Used when the window size cannot be read.
const FALLBACK_SIZE: (u32, u32) = (800, 600);

/// The viewport size at load time. The canvas keeps this size for the whole session.
fn viewport_size() -> (u32, u32) {
	let UseWindowSizeReturn { width, height } = use_window_size();
	canvas_size(width.get_untracked(), height.get_untracked())
}

/// Window sizes are infinite until measured, which only happens in the browser.
fn canvas_size(width: f64, height: f64) -> (u32, u32) {
	if width.is_finite() && height.is_finite() {
		(width.max(0.0) as u32, height.max(0.0) as u32)
	} else {
		tracing::warn!(?FALLBACK_SIZE, "window size unavailable");
		FALLBACK_SIZE
	}
}

#[component]
pub fn Home() -> impl IntoView {
	let (width, height) = viewport_size();
	let surface: SurfaceHandle = StoredValue::new(DrawingSurface::new(
		SurfaceConfig::builder().width(width).height(height).build(),
	));

	let palette = surface.with_value(|s| s.palette());
	let color = RwSignal::new(palette.color);
	let brush_size = RwSignal::new(palette.brush_size);
	Effect::new(move || {
		let color = color.get();
		surface.update_value(|s| s.set_color(color));
	});
	Effect::new(move || {
		let brush_size = brush_size.get();
		surface.update_value(|s| s.set_brush_size(brush_size));
	});

	view! {
		<Title text="Home"/>
		<div class="Home">
			<DrawingCanvas surface/>
			<Panel>
				<ColorPicker color/>
				<BrushSizes brush_size/>
				<DownloadButton surface/>
			</Panel>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<a href="/">"Return home"</a>
		</div>
	}
}
