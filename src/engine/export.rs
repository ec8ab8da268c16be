use super::raster::Raster;
use thiserror::Error;
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;

pub const EXPORT_FILE_NAME: &str = "drawing.png";
pub const PNG_MIME_TYPE: &str = "image/png";

#[derive(Clone, Debug, Error)]
pub enum ExportError {
	#[error("cannot export an empty {width}x{height} canvas")]
	EmptyRaster { width: u32, height: u32 },

	#[error("png encoding failed: {0}")]
	Encode(String),
}

static_assertions::assert_impl_all!(ExportError: std::error::Error, Send, Sync);

/// An encoded image ready to be offered as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
	pub file_name: &'static str,
	pub mime_type: &'static str,
	pub width: u32,
	pub height: u32,
	pub bytes: Vec<u8>,
}

#[tracing::instrument(skip_all, err, fields(width = raster.width(), height = raster.height()))]
pub fn encode_png(raster: &Raster) -> Result<ExportedImage, ExportError> {
	if raster.is_empty() {
		return Err(ExportError::EmptyRaster {
			width: raster.width(),
			height: raster.height(),
		});
	}
	let image = Image::from_u8(
		raster.as_bytes(),
		raster.width() as usize,
		raster.height() as usize,
		ColorSpace::RGBA,
	);
	let bytes = image
		.write_to_vec(ImageFormat::PNG)
		.map_err(|err| ExportError::Encode(format!("{err:?}")))?;
	tracing::info!(bytes = bytes.len(), "encoded png");
	Ok(ExportedImage {
		file_name: EXPORT_FILE_NAME,
		mime_type: PNG_MIME_TYPE,
		width: raster.width(),
		height: raster.height(),
		bytes,
	})
}
