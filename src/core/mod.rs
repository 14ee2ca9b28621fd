pub mod engine;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod types;

pub use engine::StructureEngine;
pub use linked_list::{LinkedList, Node};
pub use queue::Queue;
pub use stack::Stack;
pub use types::{Operation, StructureKind};
