//! Card system: catalog, instances, property collections, deck builder.
//!
//! ## Key Types
//!
//! - `Color`, `ActionKind`: closed catalog enums
//! - `Card`, `CardFace`, `CardId`: immutable card instances
//! - `PropertyCollection`: one sequence per color for a player
//! - `build_deck`: the shuffled full deck

pub mod card;
pub mod catalog;
pub mod collection;
pub mod deck;

pub use card::{Card, CardFace, CardId};
pub use catalog::{bank_total, is_set_complete, ActionKind, Color, PropertySet, MONEY_DENOMINATIONS};
pub use collection::PropertyCollection;
pub use deck::{build_deck, unshuffled_deck, DECK_SIZE};
