//! Visualization of grouping results: one colour per stick, red dots on
//! crossings, drawn onto the source image or a blank canvas.

mod colors;
mod overlay;

pub use colors::{distinct_colors, group_palette, hsv_to_rgb};
pub use overlay::{blank_canvas, draw_result, OverlayStyle, MAX_CANVAS_SIDE};
