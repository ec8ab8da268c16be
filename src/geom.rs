use glam::Vec2;

/// Axis-aligned box in continuous canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// Grows the box by `margin` on every side.
	pub fn inflated(self, margin: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
	}

	/// The smallest pixel rectangle covering this box, clipped to a `width` by `height` buffer.
	///
	/// Returns `None` if nothing of the box lies inside the buffer.
	pub fn to_pixel_rect(&self, width: u32, height: u32) -> Option<PixelRect> {
		if self.is_empty() {
			return None;
		}
		let x0 = self.min.x.floor().max(0.0);
		let y0 = self.min.y.floor().max(0.0);
		let x1 = self.max.x.ceil().min(width as f32);
		let y1 = self.max.y.ceil().min(height as f32);
		if !(x1 > x0 && y1 > y0) {
			return None;
		}
		Some(PixelRect {
			x: x0 as u32,
			y: y0 as u32,
			width: (x1 - x0) as u32,
			height: (y1 - y0) as u32,
		})
	}
}

/// A non-empty rectangle of whole pixels inside a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl PixelRect {
	pub fn columns(&self) -> std::ops::Range<u32> {
		self.x..self.x + self.width
	}

	pub fn rows(&self) -> std::ops::Range<u32> {
		self.y..self.y + self.height
	}

	pub fn union(self, other: PixelRect) -> PixelRect {
		let x = self.x.min(other.x);
		let y = self.y.min(other.y);
		let right = (self.x + self.width).max(other.x + other.width);
		let bottom = (self.y + self.height).max(other.y + other.height);
		PixelRect {
			x,
			y,
			width: right - x,
			height: bottom - y,
		}
	}

	pub fn area(&self) -> usize {
		self.width as usize * self.height as usize
	}
}

/// Pixels changed since the last flush, merged into one bounding rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyRegion(Option<PixelRect>);

impl DirtyRegion {
	/// Adds `rect` to the region. Returns `true` if the region was clean, meaning a flush needs to
	/// be scheduled.
	pub fn add(&mut self, rect: PixelRect) -> bool {
		let was_clean = self.0.is_none();
		self.0 = Some(self.0.map_or(rect, |dirty| dirty.union(rect)));
		was_clean
	}

	pub fn take(&mut self) -> Option<PixelRect> {
		self.0.take()
	}
}
