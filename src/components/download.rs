use super::{fallback::ErrorNotice, SurfaceHandle};
use crate::engine::ExportedImage;
use crate::util::*;
use leptos::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hands `image` to the browser as a file download.
fn offer_download(image: &ExportedImage) -> Result<(), JsError> {
	let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
	let parts = js_sys::Array::of1(&bytes);
	let options = BlobPropertyBag::new();
	options.set_type(image.mime_type);
	let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = cast(document().create_element("a")?)?;
	anchor.set_href(&url);
	anchor.set_download(image.file_name);
	anchor.click();

	Url::revoke_object_url(&url).map_err(JsError::from)
}

#[component]
pub fn DownloadButton(surface: SurfaceHandle) -> impl IntoView {
	let error = RwSignal::new(None::<String>);

	let download = move |_| {
		let Some(export) = surface.try_with_value(|s| s.export()) else {
			return;
		};
		error.set(None);
		leptos::task::spawn_local(async move {
			let result = match export.await {
				Ok(image) => offer_download(&image)
					.map(|()| image.bytes.len())
					.map_err(anyhow::Error::from),
				Err(err) => Err(err.into()),
			};
			match result {
				Ok(bytes) => tracing::info!(bytes, "offered drawing for download"),
				Err(err) => {
					tracing::error!(error = %err, "export failed");
					error.set(Some(err.to_string()));
				}
			}
		});
	};

	view! {
		<button class="Download" on:click=download>
			"Download"
		</button>
		<ErrorNotice error=error />
	}
}

