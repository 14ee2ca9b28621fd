use std::fmt::Display;

use tracing::debug;

use crate::core::{StructureEngine, StructureKind};
use crate::error::VizResult;
use crate::render::{BoxPrimitive, LinePrimitive, RenderPlan, TextHAlign, TextPrimitive};

use super::{EstimatedTextMeasurer, LayoutConfig, TextExtent, TextMeasurer};

pub const LIST_HEADER_LABEL: &str = "Head";
pub const LIST_TERMINAL_LABEL: &str = "NULL";
pub const STACK_HEADER_LABEL: &str = "Top";
pub const QUEUE_HEADER_LABEL: &str = "Front";
pub const QUEUE_TERMINAL_LABEL: &str = "Back";

/// Turns ordered structure contents into tagged render plans.
///
/// Layout is a pure function of the labels and the config: it never touches
/// engine state and identical input always yields an identical plan.
#[derive(Debug, Clone)]
pub struct LayoutRenderer<M: TextMeasurer = EstimatedTextMeasurer> {
    config: LayoutConfig,
    measurer: M,
}

impl LayoutRenderer<EstimatedTextMeasurer> {
    pub fn new(config: LayoutConfig) -> VizResult<Self> {
        Self::with_measurer(config, EstimatedTextMeasurer::default())
    }
}

impl<M: TextMeasurer> LayoutRenderer<M> {
    pub fn with_measurer(config: LayoutConfig, measurer: M) -> VizResult<Self> {
        config.validate()?;
        Ok(Self { config, measurer })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> VizResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lays out the current contents of one engine structure.
    #[must_use]
    pub fn plan_for<T: Display>(
        &self,
        engine: &StructureEngine<T>,
        kind: StructureKind,
    ) -> RenderPlan {
        self.layout(kind, engine.labels(kind))
    }

    /// Lays out `labels`, given in the structure's traversal order.
    #[must_use]
    pub fn layout<I>(&self, kind: StructureKind, labels: I) -> RenderPlan
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let plan = match kind {
            StructureKind::LinkedList => self.layout_linked_list(labels),
            StructureKind::Stack => self.layout_stack(labels),
            StructureKind::Queue => self.layout_queue(labels),
        };
        debug!(
            structure = %kind,
            primitives = plan.len(),
            "computed render plan"
        );
        plan
    }

    /// Horizontal chain: `Head`, one box per node at a fixed pitch, arrows
    /// between neighbours and a trailing `NULL`.
    #[must_use]
    pub fn layout_linked_list<I>(&self, labels: I) -> RenderPlan
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let config = &self.config;
        let anchor = config.list_anchor;
        let mut plan = RenderPlan::new(StructureKind::LinkedList);
        plan.push(self.header(LIST_HEADER_LABEL, anchor.x, anchor.y));

        let cells: Vec<(String, TextExtent)> = labels
            .into_iter()
            .map(|label| {
                let label = label.as_ref().to_owned();
                let extent = self.box_extent(&label);
                (label, extent)
            })
            .collect();
        let terminal = self.text_extent(LIST_TERMINAL_LABEL);

        let row_center_y =
            anchor.y + config.header_gap_px + terminal.height / 2.0 + config.box_margin_px;
        let first_cursor_x = anchor.x + config.list_pitch_px / 2.0;
        let cursor_at = |index: usize| first_cursor_x + index as f64 * config.list_pitch_px;

        for (index, (label, extent)) in cells.iter().enumerate() {
            let cursor_x = cursor_at(index);
            let rect = self.labelled_box(
                label,
                cursor_x - extent.width / 2.0,
                row_center_y - extent.height / 2.0,
                *extent,
            );

            // Aim at the left edge of whatever sits at the next cursor.
            let next_half_width = cells
                .get(index + 1)
                .map_or(terminal.width, |(_, next)| next.width)
                / 2.0;
            let connector = LinePrimitive::new(
                rect.right(),
                row_center_y,
                cursor_at(index + 1) - next_half_width,
                row_center_y,
                config.stroke_width_px,
                config.palette.connector,
            )
            .with_arrow_head(config.arrow_head_px);

            plan.push(rect);
            plan.push(connector);
        }

        plan.push(TextPrimitive::new(
            LIST_TERMINAL_LABEL,
            cursor_at(cells.len()),
            row_center_y - terminal.height / 2.0,
            config.font_size_px,
            config.palette.text,
            TextHAlign::Center,
        ));
        plan
    }

    /// Vertical column under `Top`; each box starts one gap below the
    /// previous box's bottom edge.
    #[must_use]
    pub fn layout_stack<I>(&self, labels: I) -> RenderPlan
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let config = &self.config;
        let anchor = config.stack_anchor;
        let mut plan = RenderPlan::new(StructureKind::Stack);
        plan.push(self.header(STACK_HEADER_LABEL, anchor.x, anchor.y));

        let mut cursor_y = anchor.y + config.header_gap_px;
        for label in labels {
            let label = label.as_ref();
            let rect = self.labelled_box(label, anchor.x, cursor_y, self.box_extent(label));
            cursor_y = rect.bottom() + config.packing_gap_px;
            plan.push(rect);
        }
        plan
    }

    /// Horizontal row after `Front`, packed left to right, closed by `Back`.
    #[must_use]
    pub fn layout_queue<I>(&self, labels: I) -> RenderPlan
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let config = &self.config;
        let anchor = config.queue_anchor;
        let mut plan = RenderPlan::new(StructureKind::Queue);
        plan.push(self.header(QUEUE_HEADER_LABEL, anchor.x, anchor.y));

        let row_y = anchor.y + config.header_gap_px;
        let mut cursor_x = anchor.x;
        for label in labels {
            let label = label.as_ref();
            let rect = self.labelled_box(label, cursor_x, row_y, self.box_extent(label));
            cursor_x = rect.right() + config.packing_gap_px;
            plan.push(rect);
        }

        plan.push(TextPrimitive::new(
            QUEUE_TERMINAL_LABEL,
            cursor_x,
            row_y + config.box_margin_px,
            config.font_size_px,
            config.palette.text,
            TextHAlign::Left,
        ));
        plan
    }

    fn text_extent(&self, text: &str) -> TextExtent {
        self.measurer.measure(text, self.config.font_size_px)
    }

    /// Measured label grown by the margin on all four sides.
    fn box_extent(&self, label: &str) -> TextExtent {
        let text = self.text_extent(label);
        let margin = self.config.box_margin_px;
        TextExtent {
            width: text.width + 2.0 * margin,
            height: text.height + 2.0 * margin,
        }
    }

    fn labelled_box(&self, label: &str, x: f64, y: f64, extent: TextExtent) -> BoxPrimitive {
        let config = &self.config;
        BoxPrimitive {
            x,
            y,
            width: extent.width,
            height: extent.height,
            label: label.to_owned(),
            font_size_px: config.font_size_px,
            fill_color: config.palette.box_fill,
            border_color: config.palette.box_border,
            border_width: config.box_border_width_px,
            text_color: config.palette.text,
        }
    }

    fn header(&self, text: &str, x: f64, y: f64) -> TextPrimitive {
        TextPrimitive::new(
            text,
            x,
            y,
            self.config.font_size_px,
            self.config.palette.text,
            TextHAlign::Left,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutRenderer, LIST_TERMINAL_LABEL};
    use crate::core::StructureKind;
    use crate::layout::LayoutConfig;
    use crate::render::PrimitiveKind;

    fn renderer() -> LayoutRenderer {
        LayoutRenderer::new(LayoutConfig::default()).expect("layout renderer")
    }

    #[test]
    fn list_nodes_are_spaced_by_a_constant_pitch() {
        let renderer = renderer();
        let plan = renderer.layout_linked_list(["1", "a much longer label", "3"]);
        let centers: Vec<f64> = plan.boxes().map(|rect| rect.center().0).collect();
        let pitch = renderer.config().list_pitch_px;

        assert_eq!(centers.len(), 3);
        assert!((centers[1] - centers[0] - pitch).abs() < 1e-9);
        assert!((centers[2] - centers[1] - pitch).abs() < 1e-9);
    }

    #[test]
    fn empty_list_draws_only_header_and_terminal() {
        let plan = renderer().layout(StructureKind::LinkedList, Vec::<String>::new());
        assert_eq!(plan.count(PrimitiveKind::Box), 0);
        assert_eq!(plan.count(PrimitiveKind::Line), 0);
        let texts: Vec<&str> = plan.texts().map(|text| text.text.as_str()).collect();
        assert_eq!(texts, vec!["Head", LIST_TERMINAL_LABEL]);
    }

    #[test]
    fn stack_boxes_pack_downward_with_fixed_gap() {
        let renderer = renderer();
        let plan = renderer.layout_stack(["top", "middle", "bottom"]);
        let boxes: Vec<_> = plan.boxes().collect();
        let gap = renderer.config().packing_gap_px;

        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0].label, "top");
        for pair in boxes.windows(2) {
            assert!((pair[1].y - (pair[0].bottom() + gap)).abs() < 1e-9);
            assert_eq!(pair[0].x, pair[1].x);
        }
    }
}
