//! Ambient context collaborators

pub mod thread;

pub use thread::{ContextGuard, ThreadContext};
