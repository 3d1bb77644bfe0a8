pub mod net;
pub mod protocol;
pub mod state;
