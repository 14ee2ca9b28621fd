use tracing::{debug, warn};

use crate::core::{Operation, StructureEngine, StructureKind};
use crate::error::VizResult;
use crate::layout::{EstimatedTextMeasurer, LayoutConfig, LayoutRenderer, TextMeasurer};
use crate::render::{CanvasState, RenderPlan, Renderer, TaggedCanvas};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::OperationOutcome;

/// Orchestration facade consumed by host UIs.
///
/// A session owns the structure engine, the layout renderer, the retained
/// canvas and a renderer backend. Every request mutates the engine and then
/// replaces the affected structure's plan before returning, so the host never
/// observes state and drawing out of step.
pub struct VisualizerSession<R: Renderer, M: TextMeasurer = EstimatedTextMeasurer> {
    renderer: R,
    engine: StructureEngine<String>,
    layout: LayoutRenderer<M>,
    canvas: TaggedCanvas,
    last_outcome: Option<OperationOutcome>,
}

impl<R: Renderer> VisualizerSession<R, EstimatedTextMeasurer> {
    pub fn new(renderer: R, config: LayoutConfig) -> VizResult<Self> {
        Self::with_layout(renderer, LayoutRenderer::new(config)?)
    }
}

impl<R: Renderer, M: TextMeasurer> VisualizerSession<R, M> {
    /// Starts a session with empty structures and draws their headers.
    pub fn with_layout(renderer: R, layout: LayoutRenderer<M>) -> VizResult<Self> {
        let mut session = Self {
            renderer,
            engine: StructureEngine::new(),
            layout,
            canvas: TaggedCanvas::new(),
            last_outcome: None,
        };
        session.redraw_all()?;
        Ok(session)
    }

    /// Applies one UI request and redraws the touched structure.
    ///
    /// `value` is ignored by stack pop and queue dequeue. Errors only come
    /// from the renderer backend; the mutation has happened by then and its
    /// outcome stays readable through [`VisualizerSession::last_outcome`].
    pub fn apply(
        &mut self,
        structure: StructureKind,
        operation: Operation,
        value: &str,
    ) -> VizResult<OperationOutcome> {
        let outcome = self.mutate(structure, operation, value);
        debug!(%structure, ?operation, outcome = %outcome, "applied operation");
        self.last_outcome = Some(outcome.clone());
        if let Err(err) = self.redraw(structure) {
            warn!(outcome = %outcome, "operation applied but redraw failed");
            return Err(err);
        }
        Ok(outcome)
    }

    /// Outcome of the most recent request, including one whose redraw failed.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&OperationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Applies a request given as numeric menu codes.
    ///
    /// Unknown codes are reported as [`OperationOutcome::InvalidSelector`] and
    /// leave every structure untouched.
    pub fn apply_codes(
        &mut self,
        structure_code: i64,
        operation_code: i64,
        value: &str,
    ) -> VizResult<OperationOutcome> {
        let selection = StructureKind::from_code(structure_code)
            .and_then(|structure| Ok((structure, Operation::from_code(operation_code)?)));
        match selection {
            Ok((structure, operation)) => self.apply(structure, operation, value),
            Err(err) => Ok(self.reject_selector(err.to_string())),
        }
    }

    /// Applies a request given by structure and operation names.
    pub fn apply_named(
        &mut self,
        structure: &str,
        operation: &str,
        value: &str,
    ) -> VizResult<OperationOutcome> {
        let selection = structure
            .parse::<StructureKind>()
            .and_then(|structure| Ok((structure, operation.parse::<Operation>()?)));
        match selection {
            Ok((structure, operation)) => self.apply(structure, operation, value),
            Err(err) => Ok(self.reject_selector(err.to_string())),
        }
    }

    /// Empties every structure and redraws all three.
    pub fn reset(&mut self) -> VizResult<()> {
        self.engine.reset();
        self.redraw_all()
    }

    /// Replaces `structure`'s plan on the canvas and re-renders.
    pub fn redraw(&mut self, structure: StructureKind) -> VizResult<()> {
        let plan = self.layout.plan_for(&self.engine, structure);
        self.canvas.replace(plan);
        self.render_canvas()
    }

    pub fn redraw_all(&mut self) -> VizResult<()> {
        for structure in StructureKind::ALL {
            let plan = self.layout.plan_for(&self.engine, structure);
            self.canvas.replace(plan);
        }
        self.render_canvas()
    }

    pub fn set_layout_config(&mut self, config: LayoutConfig) -> VizResult<()> {
        self.layout.set_config(config)?;
        self.redraw_all()
    }

    #[must_use]
    pub fn layout_config(&self) -> &LayoutConfig {
        self.layout.config()
    }

    #[must_use]
    pub fn engine(&self) -> &StructureEngine<String> {
        &self.engine
    }

    #[must_use]
    pub fn canvas(&self) -> &TaggedCanvas {
        &self.canvas
    }

    #[must_use]
    pub fn plan(&self, structure: StructureKind) -> Option<&RenderPlan> {
        self.canvas.plan(structure)
    }

    #[must_use]
    pub fn canvas_state(&self, structure: StructureKind) -> CanvasState {
        self.canvas.state(structure)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders the canvas into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer implementation
    /// decoupled from toolkit APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> VizResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer.render_on_cairo_context(context, &self.canvas)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn mutate(
        &mut self,
        structure: StructureKind,
        operation: Operation,
        value: &str,
    ) -> OperationOutcome {
        let value = value.to_owned();
        match (structure, operation) {
            (StructureKind::LinkedList, Operation::Insert) => {
                self.engine.insert_linked_list(value.clone());
                OperationOutcome::Inserted { structure, value }
            }
            (StructureKind::LinkedList, Operation::Remove) => {
                if self.engine.remove_linked_list(&value) {
                    OperationOutcome::Removed { structure, value }
                } else {
                    OperationOutcome::NotFound { structure, value }
                }
            }
            (StructureKind::Stack, Operation::Insert) => {
                self.engine.push_stack(value.clone());
                OperationOutcome::Inserted { structure, value }
            }
            (StructureKind::Stack, Operation::Remove) => match self.engine.pop_stack() {
                Some(value) => OperationOutcome::Removed { structure, value },
                None => OperationOutcome::Empty { structure },
            },
            (StructureKind::Queue, Operation::Insert) => {
                self.engine.enqueue_queue(value.clone());
                OperationOutcome::Inserted { structure, value }
            }
            (StructureKind::Queue, Operation::Remove) => match self.engine.dequeue_queue() {
                Some(value) => OperationOutcome::Removed { structure, value },
                None => OperationOutcome::Empty { structure },
            },
        }
    }

    fn reject_selector(&mut self, reason: String) -> OperationOutcome {
        warn!(%reason, "rejecting request with invalid selector");
        let outcome = OperationOutcome::InvalidSelector { reason };
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn render_canvas(&mut self) -> VizResult<()> {
        if let Err(err) = self.renderer.render(&self.canvas) {
            warn!(error = %err, "renderer rejected canvas");
            return Err(err);
        }
        Ok(())
    }
}
