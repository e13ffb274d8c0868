//! tengine (workspace facade crate).
//!
//! Re-exports the engine crates under one name so binaries, tests and benches
//! can use `tengine::{types,core,term,input,runtime}`.

pub use tengine_core as core;
pub use tengine_input as input;
pub use tengine_runtime as runtime;
pub use tengine_term as term;
pub use tengine_types as types;
