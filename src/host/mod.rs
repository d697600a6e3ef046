//! Host-side match registry.
//!
//! A host keeps many matches alive at once. `MatchRegistry` maps a
//! `MatchId` to its `MatchState` and routes moves to the right one. It does
//! no locking: a host serving concurrent clients wraps it (or each match)
//! in its own mutex or queue so moves for one match arrive one at a time.

pub mod registry;

pub use registry::{HostError, MatchId, MatchRegistry};
