mod outcome;
mod session;

pub use outcome::OperationOutcome;
pub use session::VisualizerSession;
