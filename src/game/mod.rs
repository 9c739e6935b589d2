//! Match state and its HTML rendering. State lives in WASM memory
//! (thread_local) for the lifetime of the Web Worker and is never persisted.

pub mod board;
pub mod clipboard;
pub mod confirm;
pub mod history;
pub mod state;
