use serde::{Deserialize, Serialize};

use crate::core::StructureKind;
use crate::error::{VizError, VizResult};

use super::{BoxPrimitive, DrawPrimitive, LinePrimitive, PrimitiveKind, TextPrimitive};

/// Ordered draw primitives describing one structure's current visual state.
///
/// The plan is tagged with its structure so a consumer can clear and redraw
/// exactly that structure. Iteration borrows the plan and can be restarted any
/// number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub tag: StructureKind,
    pub primitives: Vec<DrawPrimitive>,
}

impl RenderPlan {
    #[must_use]
    pub fn new(tag: StructureKind) -> Self {
        Self {
            tag,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<DrawPrimitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push(text);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawPrimitive> {
        self.primitives.iter()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &BoxPrimitive> + '_ {
        self.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Box(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> + '_ {
        self.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> + '_ {
        self.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.iter().filter(|primitive| primitive.kind() == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn validate(&self) -> VizResult<()> {
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> VizResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            VizError::Backend(format!("failed to serialize {} render plan: {e}", self.tag))
        })
    }

    pub fn from_json_str(input: &str) -> VizResult<Self> {
        let plan: Self = serde_json::from_str(input)
            .map_err(|e| VizError::Backend(format!("failed to parse render plan json: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a DrawPrimitive;
    type IntoIter = std::slice::Iter<'a, DrawPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
