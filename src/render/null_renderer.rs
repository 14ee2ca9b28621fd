use crate::error::VizResult;
use crate::render::{PrimitiveKind, Renderer, TaggedCanvas};

/// No-op renderer used by tests and headless usage.
///
/// It still validates canvas content so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_box_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, canvas: &TaggedCanvas) -> VizResult<()> {
        canvas.validate()?;
        let count = |kind: PrimitiveKind| -> usize {
            canvas.plans().map(|plan| plan.count(kind)).sum()
        };
        self.last_box_count = count(PrimitiveKind::Box);
        self.last_line_count = count(PrimitiveKind::Line);
        self.last_text_count = count(PrimitiveKind::Text);
        self.render_count += 1;
        Ok(())
    }
}
