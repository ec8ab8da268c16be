mod palette;
pub use palette::*;

mod modifier;
pub use modifier::*;

mod stroke;
pub use stroke::*;

mod surface;
pub use surface::*;

pub mod export;
pub use export::{ExportError, ExportedImage, EXPORT_FILE_NAME};

pub mod raster;
pub use raster::{Raster, Rgba8};
