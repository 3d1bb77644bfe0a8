pub mod sim;
pub mod types;

pub use types::{SimEvent, SimState, SimUpdate};
