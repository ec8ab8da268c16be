mod result_ext;
pub use result_ext::*;

use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

static_assertions::assert_impl_all!(JsError: std::error::Error, Send, Sync);

impl JsError {
	pub fn new(message: impl Into<String>) -> Self {
		JsError(message.into())
	}
}

impl From<JsValue> for JsError {
	fn from(value: JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Casts a DOM object, turning a failed cast into a `JsError`.
pub fn cast<T: JsCast>(value: impl Into<JsValue>) -> Result<T, JsError> {
	value
		.into()
		.dyn_into::<T>()
		.map_err(|value| JsError(format!("unexpected object {:?}", value)))
}

pub trait CoordinateSource {
	/// Position in canvas pixels relative to the event target's padding edge.
	fn get_coordinates(&self) -> glam::Vec2;
}

impl CoordinateSource for leptos::ev::PointerEvent {
	fn get_coordinates(&self) -> glam::Vec2 {
		glam::Vec2::new(self.offset_x() as f32, self.offset_y() as f32)
	}
}
