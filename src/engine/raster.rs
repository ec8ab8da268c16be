use super::stroke::StrokeStyle;
use crate::geom::{AABox, PixelRect};
use glam::{vec2, Vec2};
use itertools::iproduct;

/// A straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Rgba8 {
	pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	pub const fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Composites `self` over `dst` with the source alpha scaled by `coverage`.
	fn over(self, dst: Rgba8, coverage: f32) -> Rgba8 {
		let sa = self.a as f32 / 255.0 * coverage;
		if sa >= 1.0 {
			return self;
		}
		let da = dst.a as f32 / 255.0;
		let oa = sa + da * (1.0 - sa);
		if oa <= 0.0 {
			return Rgba8::TRANSPARENT;
		}
		let channel = |s: u8, d: u8| {
			let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
			c.round().clamp(0.0, 255.0) as u8
		};
		Rgba8::new(
			channel(self.r, dst.r),
			channel(self.g, dst.g),
			channel(self.b, dst.b),
			(oa * 255.0).round().clamp(0.0, 255.0) as u8,
		)
	}
}

/// Distance from `point` to the closed segment `a`-`b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
	let ab = b - a;
	let length_squared = ab.length_squared();
	if length_squared <= f32::EPSILON {
		return point.distance(a);
	}
	let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
	point.distance(a + t * ab)
}

/// Row-major RGBA8 pixel buffer. This is the canvas backing store; strokes are baked into it
/// and never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
	width: u32,
	height: u32,
	pixels: Vec<u8>,
}

impl Raster {
	pub fn new(width: u32, height: u32, fill: Rgba8) -> Self {
		let len = width as usize * height as usize;
		let pixels = std::iter::repeat_n(fill.to_array(), len)
			.flatten()
			.collect();
		Self {
			width,
			height,
			pixels,
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.pixels
	}

	fn offset(&self, x: u32, y: u32) -> usize {
		(y as usize * self.width as usize + x as usize) * 4
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let i = self.offset(x, y);
		let [r, g, b, a] = self.pixels[i..i + 4] else {
			return None;
		};
		Some(Rgba8::new(r, g, b, a))
	}

	fn blend(&mut self, x: u32, y: u32, color: Rgba8, coverage: f32) {
		let Some(dst) = self.pixel(x, y) else {
			return;
		};
		let i = self.offset(x, y);
		self.pixels[i..i + 4].copy_from_slice(&color.over(dst, coverage).to_array());
	}

	pub fn bounds(&self) -> PixelRect {
		PixelRect {
			x: 0,
			y: 0,
			width: self.width,
			height: self.height,
		}
	}

	/// Copies out the pixels of `rect` as a tightly packed RGBA8 block.
	pub fn region_bytes(&self, rect: PixelRect) -> Vec<u8> {
		let mut data = Vec::with_capacity(rect.area() * 4);
		for y in rect.rows().filter(|&y| y < self.height) {
			let start = self.offset(rect.x.min(self.width), y);
			let end = self.offset((rect.x + rect.width).min(self.width), y);
			data.extend_from_slice(&self.pixels[start..end]);
		}
		data
	}

	/// Rasterizes a round-capped segment from `from` to `to` and returns the pixels it may have
	/// touched, or `None` if the segment lies entirely off the raster or has zero length.
	///
	/// Pixel coverage falls off linearly over the last half pixel of the radius, so pixels whose
	/// center is farther than `width / 2 + 0.5` from the segment are never modified.
	pub fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: StrokeStyle) -> Option<PixelRect> {
		// A canvas path drops zero-length segments before stroking, so no dot either.
		if from == to {
			return None;
		}
		let radius = style.width * 0.5;
		let rect = AABox::containing([from, to].into_iter())
			.inflated(radius + 1.0)
			.to_pixel_rect(self.width, self.height)?;
		for (y, x) in iproduct!(rect.rows(), rect.columns()) {
			let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
			let coverage = (radius + 0.5 - distance_to_segment(center, from, to)).clamp(0.0, 1.0);
			if coverage > 0.0 {
				self.blend(x, y, style.color, coverage);
			}
		}
		Some(rect)
	}
}
