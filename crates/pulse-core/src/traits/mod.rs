//! Source traits
//!
//! Abstract read access to the upstream APIs. Implementations live in `pulse-client`.

mod sources;

pub use sources::{EventSource, PresenceSource};
