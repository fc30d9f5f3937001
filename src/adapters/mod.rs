//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world; `memory` adapters keep everything
//! in process for deterministic tests.

pub mod live;
pub mod memory;
