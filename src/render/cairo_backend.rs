use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use pango::prelude::*;

use crate::error::{VizError, VizResult};
use crate::layout::{TextExtent, TextMeasurer};
use crate::render::{
    BoxPrimitive, Color, DrawPrimitive, LinePrimitive, Renderer, TaggedCanvas, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub boxes_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, canvas: &TaggedCanvas)
    -> VizResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// Every pass repaints the whole surface from the canvas, so a structure whose
/// plan was replaced never leaves stale pixels behind.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> VizResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(VizError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> VizResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, canvas: &TaggedCanvas) -> VizResult<()> {
        canvas.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for (_, primitive) in canvas.primitives() {
            match primitive {
                DrawPrimitive::Box(rect) => {
                    draw_box(context, rect)?;
                    stats.boxes_drawn += 1;
                }
                DrawPrimitive::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                DrawPrimitive::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, canvas: &TaggedCanvas) -> VizResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, canvas)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        canvas: &TaggedCanvas,
    ) -> VizResult<()> {
        self.render_with_context(context, canvas)
    }
}

/// Measures labels with a Pango layout so box sizes follow the real font.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: pango::Context,
    family: String,
}

impl PangoTextMeasurer {
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        let font_map = pangocairo::FontMap::new();
        Self {
            context: font_map.create_context(),
            family: family.into(),
        }
    }
}

impl Default for PangoTextMeasurer {
    fn default() -> Self {
        Self::new("Sans")
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let layout = pango::Layout::new(&self.context);
        layout.set_font_description(Some(&font_description(&self.family, font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        TextExtent {
            width: f64::from(width).max(font_size_px),
            height: f64::from(height),
        }
    }
}

fn draw_box(context: &Context, rect: &BoxPrimitive) -> VizResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill box", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke box border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill box", err))?;
    }

    if !rect.label.is_empty() {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font_description("Sans", rect.font_size_px)));
        layout.set_text(&rect.label);
        let (text_width, text_height) = layout.pixel_size();
        let (center_x, center_y) = rect.center();
        apply_color(context, rect.text_color);
        context.move_to(
            center_x - f64::from(text_width) / 2.0,
            center_y - f64::from(text_height) / 2.0,
        );
        pangocairo::functions::show_layout(context, &layout);
    }
    Ok(())
}

fn draw_line(context: &Context, line: &LinePrimitive) -> VizResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))?;

    if line.is_directed() {
        let angle = (line.y2 - line.y1).atan2(line.x2 - line.x1);
        let spread = std::f64::consts::FRAC_PI_6;
        let size = line.arrow_head_px;
        context.move_to(line.x2, line.y2);
        context.line_to(
            line.x2 - size * (angle - spread).cos(),
            line.y2 - size * (angle - spread).sin(),
        );
        context.line_to(
            line.x2 - size * (angle + spread).cos(),
            line.y2 - size * (angle + spread).sin(),
        );
        context.close_path();
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill arrow head", err))?;
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description("Sans", text.font_size_px)));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn font_description(family: &str, font_size_px: f64) -> FontDescription {
    FontDescription::from_string(&format!("{family} {font_size_px}"))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> VizError {
    VizError::Backend(format!("{prefix}: {err}"))
}
