//! # Trading Card Game Dead Spell Simulator
//!
//! deadhand is a library that simulates drawing and playing a deck in order to
//! estimate how often spells in hand are "dead": uncastable because the mana
//! sources available that turn can't pay for them. It reports, per turn, the
//! probability of holding at least one dead spell, the distribution of dead
//! spell counts, which colors were missing, and how long cards wait in hand
//! before they can be cast.
//!
//! Cards are described by mechanical strings: `">WU"` is a land tapping for
//! white or blue, `"1*G>G"` is a spell costing one generic and one green that
//! then taps for green, and `"2*BB"` is a plain spell.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate bincode;
extern crate flate2;
extern crate rand;
extern crate regex;
extern crate wasm_bindgen;

#[macro_use]
pub mod card;
pub mod collection;
#[macro_use]
pub mod deck;
pub mod advice;
pub mod audit;
pub mod bipartite;
pub mod castability;
pub mod error;
pub mod hand;
pub mod parse_mana_cost;
pub mod report;
pub mod simulation;
pub mod turn_state;
pub mod wasm;

pub use crate::parse_mana_cost::parse_mana_cost;
pub use crate::simulation::run;
