pub mod entities;
pub mod orchestrator;
pub mod ports;
pub mod services;

pub use entities::*;
pub use orchestrator::*;
pub use ports::*;
