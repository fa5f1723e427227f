//! # pulse-dashboard
//!
//! Terminal page shell: mounts the activity feed and the presence poller and
//! renders their states to stdout.

pub mod app;
pub mod render;

pub use app::{create_context, run};
