//! Top-down 2D renderer
//!
//! Everything is drawn with macroquad shapes scaled through a [`Viewport`].

mod scene;
mod viewport;

pub use scene::draw_frame;
pub use viewport::Viewport;
