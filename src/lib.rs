//! Reclaim - turn-based hex strategy engine about awakening a nation

pub mod core;
pub mod engine;
pub mod map;
pub mod scenario;
