pub mod fallback;

mod canvas;
pub use canvas::*;

mod color_picker;
pub use color_picker::*;

mod keyboard_state;
pub use keyboard_state::*;

mod panel;
pub use panel::*;

mod brush_setting;
pub use brush_setting::*;

mod download;
pub use download::*;
