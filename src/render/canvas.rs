use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::StructureKind;
use crate::error::VizResult;

use super::{DrawPrimitive, RenderPlan};

/// Whether a structure currently has a plan on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasState {
    Clean,
    Drawn,
}

/// Retained draw state keyed by structure tag.
///
/// Storing a plan replaces whatever the same tag had before, so the canvas
/// never accumulates stale primitives for a structure. `IndexMap` keeps tags
/// in first-drawn order for stable replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedCanvas {
    plans: IndexMap<StructureKind, RenderPlan>,
}

impl TaggedCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the plan's tag and draws the new plan in one step.
    ///
    /// Returns the plan that was previously on screen for the tag.
    pub fn replace(&mut self, plan: RenderPlan) -> Option<RenderPlan> {
        self.plans.insert(plan.tag, plan)
    }

    pub fn clear(&mut self, tag: StructureKind) -> Option<RenderPlan> {
        self.plans.shift_remove(&tag)
    }

    #[must_use]
    pub fn state(&self, tag: StructureKind) -> CanvasState {
        if self.plans.contains_key(&tag) {
            CanvasState::Drawn
        } else {
            CanvasState::Clean
        }
    }

    #[must_use]
    pub fn plan(&self, tag: StructureKind) -> Option<&RenderPlan> {
        self.plans.get(&tag)
    }

    pub fn plans(&self) -> impl Iterator<Item = &RenderPlan> + '_ {
        self.plans.values()
    }

    /// Every primitive on the canvas with its owning tag, in draw order.
    pub fn primitives(&self) -> impl Iterator<Item = (StructureKind, &DrawPrimitive)> + '_ {
        self.plans
            .values()
            .flat_map(|plan| plan.iter().map(move |primitive| (plan.tag, primitive)))
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.plans.values().map(RenderPlan::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn validate(&self) -> VizResult<()> {
        for plan in self.plans.values() {
            plan.validate()?;
        }
        Ok(())
    }
}
