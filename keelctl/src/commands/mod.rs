//! Command implementations

pub mod describe;
pub mod id;
