//! Turn controller.
//!
//! A turn runs in the main stage with a fixed action budget:
//!
//! 1. **Start**: draw up to `draws_per_turn`, reset the budget.
//! 2. **Plays**: `playMoney`, `playProperty`, `playAction`, one budget unit each.
//! 3. **End**: on an empty budget with no stage open, or on `endTurn`.
//!    Discard down to the hand limit, check the win condition, pass the
//!    turn to the next seat.

mod controller;

pub(crate) use controller::{advance, begin_turn, end_turn, play_action, play_money, play_property, request_end_turn};
