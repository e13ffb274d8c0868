//! Runtime integration for the frame loop.
//!
//! Bridges the synchronous, single-threaded frame loop with its environment:
//! configuration, OS shutdown signals and fixed-rate pacing. World and
//! renderer state never cross a thread boundary; only the shutdown flag does.

pub mod clock;
pub mod config;
pub mod shutdown;

pub use tengine_types as types;

pub use clock::FrameClock;
pub use config::EngineConfig;
pub use shutdown::ShutdownSignal;
