use super::palette::Palette;
use super::raster::Rgba8;
use glam::Vec2;

/// Color and width captured when a stroke begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
	pub color: Rgba8,
	pub width: f32,
}

impl From<Palette> for StrokeStyle {
	fn from(palette: Palette) -> Self {
		Self {
			color: palette.color.rgba(),
			width: palette.brush_size.width(),
		}
	}
}

/// The stroke currently being drawn. Exists only between pointer-down and pointer-up/leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSession {
	style: StrokeStyle,
	/// Last raw pointer sample.
	last_point: Vec2,
	/// Current point of the path, where the next segment starts.
	pen: Vec2,
}

/// A segment to be committed to the raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

impl StrokeSession {
	pub fn begin(point: Vec2, style: StrokeStyle) -> Self {
		Self {
			style,
			last_point: point,
			pen: point,
		}
	}

	pub fn style(&self) -> StrokeStyle {
		self.style
	}

	pub fn last_point(&self) -> Vec2 {
		self.last_point
	}

	pub fn pen(&self) -> Vec2 {
		self.pen
	}

	/// Advances the path to `point` and returns the segment to draw.
	///
	/// `last_point` always becomes the raw sample, even when the segment was snapped.
	pub fn advance(&mut self, point: Vec2, axis_locked: bool) -> Segment {
		let to = if axis_locked {
			snap_to_dominant_axis(self.last_point, point)
		} else {
			point
		};
		let segment = Segment { from: self.pen, to };
		self.pen = to;
		self.last_point = point;
		segment
	}
}

/// Projects `point` onto the horizontal or vertical line through `last`, whichever axis moved
/// more since `last`. Ties go vertical.
pub fn snap_to_dominant_axis(last: Vec2, point: Vec2) -> Vec2 {
	let delta = (point - last).abs();
	if delta.x > delta.y {
		Vec2::new(point.x, last.y)
	} else {
		Vec2::new(last.x, point.y)
	}
}
