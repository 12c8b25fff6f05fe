pub mod orchestrator;

pub use orchestrator::{OrderError, PlacementOrchestrator};
