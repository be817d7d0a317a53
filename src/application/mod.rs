// Application layer: the in-process boundary any client (CLI, TUI, tests)
// talks to. Raw user text comes in here, parsed amounts go to the domain.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
