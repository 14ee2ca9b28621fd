use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Identity of one visualized structure.
///
/// Also used as the tag on every render plan so a host can clear and redraw a
/// single structure without touching the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    LinkedList,
    Stack,
    Queue,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [
        StructureKind::LinkedList,
        StructureKind::Stack,
        StructureKind::Queue,
    ];

    /// Resolves a menu code (`1` list, `2` stack, `3` queue).
    pub fn from_code(code: i64) -> VizResult<Self> {
        match code {
            1 => Ok(Self::LinkedList),
            2 => Ok(Self::Stack),
            3 => Ok(Self::Queue),
            other => Err(VizError::InvalidSelector(format!(
                "structure code {other} is outside 1..=3"
            ))),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinkedList => "linked list",
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StructureKind {
    type Err = VizError;

    fn from_str(input: &str) -> VizResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "list" | "linked_list" | "linked-list" | "linkedlist" => Ok(Self::LinkedList),
            "stack" => Ok(Self::Stack),
            "queue" => Ok(Self::Queue),
            other => Err(VizError::InvalidSelector(format!(
                "unknown structure `{other}`"
            ))),
        }
    }
}

/// Mutation requested by the host UI.
///
/// `Insert` maps to insert/push/enqueue and `Remove` to remove/pop/dequeue
/// depending on the selected structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Insert,
    Remove,
}

impl Operation {
    /// Resolves a menu code (`1` insert, `2` remove).
    pub fn from_code(code: i64) -> VizResult<Self> {
        match code {
            1 => Ok(Self::Insert),
            2 => Ok(Self::Remove),
            other => Err(VizError::InvalidSelector(format!(
                "operation code {other} is outside 1..=2"
            ))),
        }
    }
}

impl FromStr for Operation {
    type Err = VizError;

    fn from_str(input: &str) -> VizResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "insert" | "push" | "enqueue" | "add" => Ok(Self::Insert),
            "remove" | "pop" | "dequeue" | "delete" => Ok(Self::Remove),
            other => Err(VizError::InvalidSelector(format!(
                "unknown operation `{other}`"
            ))),
        }
    }
}
