use super::export::{self, ExportError, ExportedImage};
use super::modifier::{ModifierKey, ModifierTracker};
use super::palette::{BrushSize, Palette, PaletteColor};
use super::raster::{Raster, Rgba8};
use super::stroke::StrokeSession;
use crate::geom::PixelRect;
use glam::Vec2;
use std::future::Future;

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct SurfaceConfig {
	pub width: u32,
	pub height: u32,
	#[builder(default = Rgba8::TRANSPARENT)]
	pub background: Rgba8,
	#[builder(default)]
	pub palette: Palette,
	#[builder(default)]
	pub modifier: ModifierKey,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SurfaceState {
	#[default]
	Idle,
	Drawing(StrokeSession),
}

/// The drawing surface: sole owner of the backing raster.
///
/// Strokes are rasterized segment by segment as the pointer moves and are never re-rendered, so
/// palette changes only affect strokes that begin afterwards.
#[derive(Clone, Debug)]
pub struct DrawingSurface {
	raster: Raster,
	palette: Palette,
	modifiers: ModifierTracker,
	state: SurfaceState,
}

impl DrawingSurface {
	pub fn new(config: SurfaceConfig) -> Self {
		tracing::debug!(?config, "DrawingSurface::new");
		Self {
			raster: Raster::new(config.width, config.height, config.background),
			palette: config.palette,
			modifiers: ModifierTracker::new(config.modifier),
			state: SurfaceState::Idle,
		}
	}

	pub fn raster(&self) -> &Raster {
		&self.raster
	}

	pub fn palette(&self) -> Palette {
		self.palette
	}

	pub fn state(&self) -> SurfaceState {
		self.state
	}

	pub fn session(&self) -> Option<&StrokeSession> {
		match &self.state {
			SurfaceState::Drawing(session) => Some(session),
			SurfaceState::Idle => None,
		}
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.state, SurfaceState::Drawing(_))
	}

	pub fn axis_locked(&self) -> bool {
		self.modifiers.is_held()
	}

	pub fn begin_stroke(&mut self, point: Vec2) {
		if self.is_drawing() {
			tracing::warn!("stroke already active; starting a new one");
		}
		let session = StrokeSession::begin(point, self.palette.into());
		tracing::debug!(?point, style = ?session.style(), "begin stroke");
		self.state = SurfaceState::Drawing(session);
	}

	/// Commits the next segment of the active stroke and returns the pixels it touched.
	///
	/// Does nothing while idle.
	pub fn extend_stroke(&mut self, point: Vec2) -> Option<PixelRect> {
		let axis_locked = self.axis_locked();
		let SurfaceState::Drawing(session) = &mut self.state else {
			return None;
		};
		let segment = session.advance(point, axis_locked);
		tracing::trace!(?segment, axis_locked, "extend stroke");
		self.raster
			.stroke_segment(segment.from, segment.to, session.style())
	}

	pub fn end_stroke(&mut self) {
		if let SurfaceState::Drawing(session) = self.state {
			tracing::debug!(last_point = ?session.last_point(), "end stroke");
		}
		self.state = SurfaceState::Idle;
	}

	pub fn set_color(&mut self, color: PaletteColor) {
		self.palette.color = color;
	}

	pub fn set_brush_size(&mut self, brush_size: BrushSize) {
		self.palette.brush_size = brush_size;
	}

	/// Returns whether the axis lock changed.
	pub fn key_down(&mut self, key: &str) -> bool {
		self.modifiers.key_down(key)
	}

	/// Returns whether the axis lock changed.
	pub fn key_up(&mut self, key: &str) -> bool {
		self.modifiers.key_up(key)
	}

	pub fn release_modifiers(&mut self) {
		self.modifiers.release();
	}

	/// Snapshots the raster now and encodes it when the returned future is polled.
	///
	/// Strokes drawn after this call are not part of the export.
	pub fn export(&self) -> impl Future<Output = Result<ExportedImage, ExportError>> + 'static {
		let snapshot = self.raster.clone();
		async move { export::encode_png(&snapshot) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	const RED: Rgba8 = PaletteColor::Red.rgba();
	const BLUE: Rgba8 = PaletteColor::Blue.rgba();

	fn surface(width: u32, height: u32) -> DrawingSurface {
		DrawingSurface::new(SurfaceConfig::builder().width(width).height(height).build())
	}

	#[test]
	fn config_defaults() {
		let config = SurfaceConfig::builder().width(4).height(2).build();
		assert_eq!(config.background, Rgba8::TRANSPARENT);
		assert_eq!(config.palette, Palette::default());
		assert_eq!(config.modifier, ModifierKey::Shift);
	}

	#[test]
	fn starts_idle_and_blank() {
		let surface = surface(8, 8);
		assert_eq!(surface.state(), SurfaceState::Idle);
		assert!(!surface.axis_locked());
		assert!(surface
			.raster()
			.as_bytes()
			.iter()
			.all(|&b| b == 0));
	}

	#[test]
	fn initial_frame_shows_background() {
		let white = PaletteColor::White.rgba();
		let surface = DrawingSurface::new(
			SurfaceConfig::builder()
				.width(6)
				.height(4)
				.background(white)
				.build(),
		);
		let frame = surface.raster().region_bytes(surface.raster().bounds());
		assert_eq!(frame.len(), 6 * 4 * 4);
		assert!(frame.chunks_exact(4).all(|p| p == white.to_array()));
	}

	#[test]
	fn begin_commits_no_pixels() {
		let mut surface = surface(32, 32);
		let before = surface.raster().clone();
		surface.begin_stroke(vec2(10.0, 10.0));
		assert!(surface.is_drawing());
		assert_eq!(surface.session().map(|s| s.last_point()), Some(vec2(10.0, 10.0)));
		assert_eq!(surface.raster(), &before);
	}

	#[test]
	fn extend_to_the_same_point_paints_nothing() {
		let mut surface = surface(32, 32);
		let before = surface.raster().clone();
		surface.begin_stroke(vec2(10.0, 10.0));
		assert_eq!(surface.extend_stroke(vec2(10.0, 10.0)), None);
		assert_eq!(surface.raster(), &before);
		assert!(surface.is_drawing());
	}

	#[test]
	fn extend_while_idle_is_noop() {
		let mut surface = surface(32, 32);
		let before = surface.raster().clone();
		assert_eq!(surface.extend_stroke(vec2(5.0, 5.0)), None);
		assert_eq!(surface.state(), SurfaceState::Idle);
		assert_eq!(surface.raster(), &before);

		surface.begin_stroke(vec2(1.0, 1.0));
		surface.end_stroke();
		assert_eq!(surface.extend_stroke(vec2(20.0, 20.0)), None);
		assert_eq!(surface.raster(), &before);
	}

	#[test]
	fn end_is_idempotent() {
		let mut surface = surface(8, 8);
		surface.end_stroke();
		surface.begin_stroke(vec2(1.0, 1.0));
		surface.end_stroke();
		surface.end_stroke();
		assert!(!surface.is_drawing());
	}

	#[test]
	fn style_changes_leave_raster_untouched() {
		let mut surface = surface(16, 16);
		let before = surface.raster().clone();
		surface.set_color(PaletteColor::Black);
		surface.set_brush_size(BrushSize::Px25);
		assert_eq!(
			surface.palette(),
			Palette {
				color: PaletteColor::Black,
				brush_size: BrushSize::Px25,
			}
		);
		assert_eq!(surface.raster(), &before);
	}

	#[test]
	fn active_stroke_keeps_its_style() {
		let mut surface = surface(64, 32);
		surface.begin_stroke(vec2(5.0, 10.0));
		surface.set_color(PaletteColor::Blue);
		surface.set_brush_size(BrushSize::Px25);
		surface.extend_stroke(vec2(40.0, 10.0));
		surface.end_stroke();
		assert_eq!(surface.raster().pixel(20, 10), Some(RED));
		// Width 5 ends well before row 20.
		assert_eq!(surface.raster().pixel(20, 20), Some(Rgba8::TRANSPARENT));

		surface.begin_stroke(vec2(5.0, 25.0));
		surface.extend_stroke(vec2(40.0, 25.0));
		surface.end_stroke();
		assert_eq!(surface.raster().pixel(20, 25), Some(BLUE));
	}

	#[test]
	fn axis_lock_follows_modifier_outside_strokes() {
		let mut surface = surface(8, 8);
		assert!(surface.key_down("Shift"));
		assert!(surface.axis_locked());
		assert!(!surface.is_drawing());
		assert!(surface.key_up("Shift"));
		assert!(!surface.axis_locked());
		surface.key_down("Shift");
		surface.release_modifiers();
		assert!(!surface.axis_locked());
	}

	#[test]
	fn locked_extend_commits_snapped_segment() {
		let mut surface = surface(64, 64);
		surface.key_down("Shift");
		surface.begin_stroke(vec2(20.0, 20.0));
		surface.extend_stroke(vec2(40.0, 26.0));
		surface.end_stroke();
		// Horizontal segment from (20, 20) to (40, 20); nothing near (40, 26).
		assert_eq!(surface.raster().pixel(39, 20), Some(RED));
		assert_eq!(surface.raster().pixel(40, 26), Some(Rgba8::TRANSPARENT));
	}

	#[test]
	fn dirty_rect_covers_the_new_segment() {
		let mut surface = surface(100, 100);
		surface.begin_stroke(vec2(10.0, 10.0));
		let rect = surface.extend_stroke(vec2(30.0, 10.0)).unwrap();
		assert!(rect.columns().contains(&10) && rect.rows().contains(&10));
		assert!(rect.columns().contains(&30));
		assert!(!rect.columns().contains(&50));
	}

	#[test]
	fn export_snapshots_before_later_strokes() {
		let mut surface = surface(20, 20);
		let export = surface.export();
		surface.begin_stroke(vec2(0.0, 10.0));
		surface.extend_stroke(vec2(20.0, 10.0));
		let image = futures::executor::block_on(export).unwrap();
		let decoded = ::image::load_from_memory(&image.bytes).unwrap().to_rgba8();
		assert_eq!(decoded.get_pixel(10, 10).0, [0, 0, 0, 0]);
	}
}
