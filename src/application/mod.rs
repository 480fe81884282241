//! Application layer - orchestration of domain policies over the ports.

mod collector;
mod controller;

pub use collector::ReviewCollector;
pub use controller::{messages, ControllerError, ConversationController};
