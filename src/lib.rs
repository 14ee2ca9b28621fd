//! linear-viz: engine and deterministic layout for visualizing a linked list,
//! a stack and a queue.
//!
//! The crate keeps the data structures, the layout algorithm and the drawing
//! backend apart. Hosts mutate structures through [`VisualizerSession`] and
//! receive tagged render plans they can draw with any [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{OperationOutcome, VisualizerSession};
pub use error::{VizError, VizResult};
