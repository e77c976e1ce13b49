mod center_label;
mod color;
mod frame;
mod null_renderer;
mod primitives;

pub use center_label::CenterLabel;
pub use color::{CssColor, brighten_color};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DEFAULT_FONT_FAMILY, PathPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from geometry and interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
