mod config;
mod measure;
mod renderer;

pub use config::{Anchor, DEFAULT_PALETTE_HEX, LayoutConfig, Palette};
pub use measure::{EstimatedTextMeasurer, TextExtent, TextMeasurer};
pub use renderer::{
    LIST_HEADER_LABEL, LIST_TERMINAL_LABEL, LayoutRenderer, QUEUE_HEADER_LABEL,
    QUEUE_TERMINAL_LABEL, STACK_HEADER_LABEL,
};
