use super::subscribe_axis_lock;
use crate::engine::DrawingSurface;
use crate::geom::{DirtyRegion, PixelRect};
use crate::util::*;
use leptos::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Handle to the page's drawing surface. All raster mutation goes through it.
pub type SurfaceHandle = StoredValue<DrawingSurface>;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsError> {
	let context = canvas
		.get_context("2d")?
		.ok_or_else(|| JsError::new("2d context unavailable"))?;
	cast(context)
}

/// Copies `rect` of the surface's raster onto the visible canvas.
fn blit(
	context: &CanvasRenderingContext2d,
	surface: SurfaceHandle,
	rect: PixelRect,
) -> Result<(), JsError> {
	let Some(data) = surface.try_with_value(|s| s.raster().region_bytes(rect)) else {
		return Ok(());
	};
	let image =
		ImageData::new_with_u8_clamped_array_and_sh(Clamped(data.as_slice()), rect.width, rect.height)?;
	context.put_image_data(&image, rect.x as f64, rect.y as f64)?;
	Ok(())
}

#[component]
pub fn DrawingCanvas(surface: SurfaceHandle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height) = surface.with_value(|s| (s.raster().width(), s.raster().height()));

	subscribe_axis_lock(surface);

	// Changed pixels are merged and copied to the screen at most once per animation frame.
	let dirty = StoredValue::new(DirtyRegion::default());
	let flush = move || {
		let Some(rect) = dirty.try_update_value(|d| d.take()).flatten() else {
			return;
		};
		let Some(canvas) = canvas_ref.get_untracked() else {
			tracing::warn!("canvas not mounted");
			return;
		};
		if let Some(context) = context_2d(&canvas).ok_or_log("get canvas context") {
			blit(&context, surface, rect).ok_or_log("blit");
		}
	};
	let present = move |rect: PixelRect| {
		if dirty.try_update_value(|d| d.add(rect)) == Some(true) {
			request_animation_frame(flush);
		}
	};

	// The raster may start out filled, so show all of it once the canvas exists.
	Effect::new(move || {
		if canvas_ref.get().is_none() {
			return;
		}
		let bounds = surface
			.try_with_value(|s| (!s.raster().is_empty()).then(|| s.raster().bounds()))
			.flatten();
		if let Some(bounds) = bounds {
			present(bounds);
		}
	});

	let pointerdown = move |e: leptos::ev::PointerEvent| {
		e.prevent_default();
		let point = e.get_coordinates();
		surface.update_value(|s| s.begin_stroke(point));
	};

	let pointermove = move |e: leptos::ev::PointerEvent| {
		let point = e.get_coordinates();
		if let Some(rect) = surface.try_update_value(|s| s.extend_stroke(point)).flatten() {
			present(rect);
		}
	};

	let end = move |_: leptos::ev::PointerEvent| {
		surface.update_value(|s| s.end_stroke());
	};

	view! {
		<canvas
			class="DrawingCanvas"
			node_ref=canvas_ref
			width=width.to_string()
			height=height.to_string()
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=end
			on:pointerleave=end
		/>
	}
}
