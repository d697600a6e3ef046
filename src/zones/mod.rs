//! Card zones.
//!
//! Every zone in a match (draw pile, discard pile, hands, banks) is a
//! `Pile`. Property sets on the table live in
//! `cards::PropertyCollection` instead, because they are grouped by color.

pub mod pile;

pub use pile::{draw_with_reshuffle, Pile};
