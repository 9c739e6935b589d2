//! Request handlers, one module per route group.

pub mod history;
pub mod scoreboard;
pub mod util;
