//! # Cards, mana costs and per-color tallies
//!
//! Everything the simulator knows about a card comes from its mechanical string.
#[macro_use]
mod card;
mod mana_color_count;
mod mana_cost;

pub use card::*;
pub use mana_color_count::*;
pub use mana_cost::*;
