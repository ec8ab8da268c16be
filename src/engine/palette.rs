use super::raster::Rgba8;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
	#[error("invalid css color {0:?}")]
	Invalid(String, #[source] csscolorparser::ParseColorError),

	#[error("{0:?} is not one of the palette colors")]
	NotInPalette(String),
}

static_assertions::assert_impl_all!(ColorError: std::error::Error, Send, Sync);

impl Rgba8 {
	/// Parses any CSS color (`"red"`, `"#f00"`, `"rgb(255 0 0)"`, ...).
	pub fn parse(css: &str) -> Result<Self, ColorError> {
		let color =
			csscolorparser::parse(css).map_err(|err| ColorError::Invalid(css.to_owned(), err))?;
		let [r, g, b, a] = color.to_rgba8();
		Ok(Self::new(r, g, b, a))
	}
}

/// The fixed set of stroke colors offered by the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PaletteColor {
	#[default]
	#[display("red")]
	Red,
	#[display("yellow")]
	Yellow,
	#[display("blue")]
	Blue,
	#[display("white")]
	White,
	#[display("black")]
	Black,
}

impl PaletteColor {
	pub const ALL: [PaletteColor; 5] = [
		PaletteColor::Red,
		PaletteColor::Yellow,
		PaletteColor::Blue,
		PaletteColor::White,
		PaletteColor::Black,
	];

	pub const fn css(self) -> &'static str {
		match self {
			PaletteColor::Red => "#FF0000",
			PaletteColor::Yellow => "#FFFF00",
			PaletteColor::Blue => "#0000FF",
			PaletteColor::White => "#FFFFFF",
			PaletteColor::Black => "#000000",
		}
	}

	pub const fn rgba(self) -> Rgba8 {
		match self {
			PaletteColor::Red => Rgba8::new(0xFF, 0x00, 0x00, 0xFF),
			PaletteColor::Yellow => Rgba8::new(0xFF, 0xFF, 0x00, 0xFF),
			PaletteColor::Blue => Rgba8::new(0x00, 0x00, 0xFF, 0xFF),
			PaletteColor::White => Rgba8::new(0xFF, 0xFF, 0xFF, 0xFF),
			PaletteColor::Black => Rgba8::new(0x00, 0x00, 0x00, 0xFF),
		}
	}
}

impl FromStr for PaletteColor {
	type Err = ColorError;

	/// Accepts any CSS spelling of a palette color.
	fn from_str(css: &str) -> Result<Self, Self::Err> {
		let rgba = Rgba8::parse(css)?;
		PaletteColor::ALL
			.into_iter()
			.find(|c| c.rgba() == rgba)
			.ok_or_else(|| ColorError::NotInPalette(css.to_owned()))
	}
}

/// The fixed set of brush widths offered by the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BrushSize {
	#[default]
	#[display("5px")]
	Px5,
	#[display("10px")]
	Px10,
	#[display("15px")]
	Px15,
	#[display("20px")]
	Px20,
	#[display("25px")]
	Px25,
}

impl BrushSize {
	pub const ALL: [BrushSize; 5] = [
		BrushSize::Px5,
		BrushSize::Px10,
		BrushSize::Px15,
		BrushSize::Px20,
		BrushSize::Px25,
	];

	pub const fn pixels(self) -> u32 {
		match self {
			BrushSize::Px5 => 5,
			BrushSize::Px10 => 10,
			BrushSize::Px15 => 15,
			BrushSize::Px20 => 20,
			BrushSize::Px25 => 25,
		}
	}

	pub fn width(self) -> f32 {
		self.pixels() as f32
	}
}

/// Current color and brush size. Lives for the whole session and is only read when a stroke
/// begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
	pub color: PaletteColor,
	pub brush_size: BrushSize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_red_and_smallest_brush() {
		let palette = Palette::default();
		assert_eq!(palette.color, PaletteColor::Red);
		assert_eq!(palette.brush_size, BrushSize::Px5);
	}

	#[test]
	fn css_and_rgba_agree() {
		for color in PaletteColor::ALL {
			assert_eq!(Rgba8::parse(color.css()).unwrap(), color.rgba(), "{color}");
		}
	}

	#[test]
	fn swatch_values_parse_back_to_their_color() {
		for color in PaletteColor::ALL {
			assert_eq!(color.css().parse::<PaletteColor>().unwrap(), color);
			assert_eq!(
				color.css().to_lowercase().parse::<PaletteColor>().unwrap(),
				color
			);
		}
	}

	#[test]
	fn from_str_accepts_css_spellings() {
		assert_eq!("red".parse::<PaletteColor>().unwrap(), PaletteColor::Red);
		assert_eq!("#ff0".parse::<PaletteColor>().unwrap(), PaletteColor::Yellow);
		assert_eq!(
			"rgb(0, 0, 255)".parse::<PaletteColor>().unwrap(),
			PaletteColor::Blue
		);
		assert!(matches!(
			"green".parse::<PaletteColor>(),
			Err(ColorError::NotInPalette(_))
		));
		assert!(matches!(
			"not a color".parse::<PaletteColor>(),
			Err(ColorError::Invalid(..))
		));
	}

	#[test]
	fn brush_sizes_step_by_five() {
		let widths: Vec<_> = BrushSize::ALL.iter().map(|s| s.pixels()).collect();
		assert_eq!(widths, vec![5, 10, 15, 20, 25]);
		assert_eq!(BrushSize::Px15.to_string(), "15px");
	}
}
