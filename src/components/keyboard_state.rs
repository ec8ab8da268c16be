use super::SurfaceHandle;
use leptos::prelude::*;

/// Drives the surface's axis lock from window-level key events.
///
/// The listeners belong to the calling component: they are installed now and removed, together
/// with any held modifier, when that component is cleaned up.
pub fn subscribe_axis_lock(surface: SurfaceHandle) {
	let keydown = move |e: leptos::ev::KeyboardEvent| {
		if e.repeat() {
			return;
		}
		if surface.try_update_value(|s| s.key_down(&e.key())) == Some(true) {
			tracing::debug!(key = e.key(), "axis lock on");
		}
	};
	let keyup = move |e: leptos::ev::KeyboardEvent| {
		if surface.try_update_value(|s| s.key_up(&e.key())) == Some(true) {
			tracing::debug!(key = e.key(), "axis lock off");
		}
	};

	let keydown_handle = window_event_listener(leptos::ev::keydown, keydown);
	let keyup_handle = window_event_listener(leptos::ev::keyup, keyup);
	on_cleanup(move || {
		keydown_handle.remove();
		keyup_handle.remove();
		surface.try_update_value(|s| s.release_modifiers());
	});
}
