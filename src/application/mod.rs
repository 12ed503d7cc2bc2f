//! Application layer: orchestrates domain validation and gateway calls.

pub mod handlers;
