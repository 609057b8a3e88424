//! Terminal rendering
//!
//! The game is drawn in screen pixels on a [`Surface`], which is then
//! rasterised onto the terminal with half-block glyphs.

pub mod icon;
pub mod renderer;
pub mod surface;

pub use icon::{Icon, ToggleIcons};
pub use renderer::{Renderer, ScreenMap, draw_food, draw_snake};
pub use surface::{PixelRect, Surface};
