pub trait ResultExt<T> {
	/// Logs the error under `action` and discards it. For failures the UI can shrug off, like a
	/// single missed blit.
	fn ok_or_log(self, action: &'static str) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
	fn ok_or_log(self, action: &'static str) -> Option<T> {
		match self {
			Ok(value) => Some(value),
			Err(error) => {
				tracing::error!(%error, "{action} failed");
				None
			}
		}
	}
}
