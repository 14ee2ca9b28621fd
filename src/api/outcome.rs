use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::StructureKind;

/// Result of one UI request, used only to pick the status message.
///
/// None of these variants is an error: "not found", "empty" and an
/// unrecognized selector all leave state unchanged and keep the session
/// running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationOutcome {
    Inserted {
        structure: StructureKind,
        value: String,
    },
    Removed {
        structure: StructureKind,
        value: String,
    },
    NotFound {
        structure: StructureKind,
        value: String,
    },
    Empty {
        structure: StructureKind,
    },
    InvalidSelector {
        reason: String,
    },
}

impl OperationOutcome {
    /// `true` when structure state changed.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Inserted { .. } | Self::Removed { .. })
    }

    #[must_use]
    pub fn structure(&self) -> Option<StructureKind> {
        match self {
            Self::Inserted { structure, .. }
            | Self::Removed { structure, .. }
            | Self::NotFound { structure, .. }
            | Self::Empty { structure } => Some(*structure),
            Self::InvalidSelector { .. } => None,
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted { structure, value } => {
                write!(f, "inserted {value} into the {structure}")
            }
            Self::Removed { structure, value } => {
                write!(f, "removed {value} from the {structure}")
            }
            Self::NotFound { structure, value } => {
                write!(f, "{value} not found in the {structure}")
            }
            Self::Empty { structure } => {
                write!(f, "cannot remove from empty structure: the {structure} is empty")
            }
            Self::InvalidSelector { reason } => write!(f, "invalid option: {reason}"),
        }
    }
}
