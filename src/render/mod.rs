mod canvas;
mod null_renderer;
mod plan;
mod primitives;

pub use canvas::{CanvasState, TaggedCanvas};
pub use null_renderer::NullRenderer;
pub use plan::RenderPlan;
pub use primitives::{
    BoxPrimitive, Color, DrawPrimitive, LinePrimitive, PrimitiveKind, TextHAlign, TextPrimitive,
};

use crate::error::VizResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the fully materialized canvas, one plan per structure, so
/// drawing code stays isolated from the data structures and layout logic.
pub trait Renderer {
    fn render(&mut self, canvas: &TaggedCanvas) -> VizResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer};
