//! Projector State Module
//!
//! Immutable snapshots assembled by a full fetch, and a cache that both
//! refreshes and notifications fold into.

mod cache;
mod snapshot;

pub use cache::StateCache;
pub use snapshot::{Class1State, Class2State, InputTerminal, ProjectorState};
