pub mod constants;
pub mod control;
pub mod errors;
pub mod graph_system;
pub mod utils;

pub use constants::*;
pub use control::catalog::{ObjectParameters, ObjectType, ALL_OBJECT_TYPES, DEFAULT_OBJECT_TYPE};
pub use control::clock::{ModelConfig, SimulationClock};
pub use control::environment::Environment;
pub use control::falling_body::FallingBody;

// Re-export commonly used items from graph_system
pub use graph_system::value_graph::{AxisBounds, GraphState, SampleOutcome, ValueGraph};
