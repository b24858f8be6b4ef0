//! # JavaScript interface
//!
//! Defines the interface between deadhand and a browser front end through wasm-bindgen
use crate::collection::{Collection, CollectionCard};
use crate::deck::DeckSpec;
use crate::error::SimulationError;
use crate::report::Report;
use crate::simulation::{self, SimulationConfig};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Serialize, Deserialize)]
enum Error {
    BadDeckcode(String),
    Simulation(SimulationError),
}

impl From<SimulationError> for Error {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}

/// Input format expected from the front end
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Input {
    /// The deck to simulate, used when `code` is empty
    pub deck: DeckSpec,
    /// A pasted deck list, resolved through `cards`
    pub code: String,
    /// Name to mechanical string table for the cards in `code`
    pub cards: Vec<CollectionCard>,
    pub config: SimulationConfig,
}

/// Runs a simulation given input
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Report`
/// # Example
///
///  ```js
///  const input = {deck: {...}, config: {turns: 8, seed: 42}};
///  const report = require('deadhand').deadhand_run(input);
///  console.log(report.summary);
///  ```
#[wasm_bindgen]
pub fn deadhand_run(input: &JsValue) -> JsValue {
    let input: Input = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing simulation inputs: {:#?}", e));
        }
        Ok(v) => v,
    };
    let result = match run_impl(&input) {
        Err(e) => {
            return JsValue::from_str(&format!("Error running simulation for input: {:#?}", e));
        }
        Ok(v) => v,
    };
    match JsValue::from_serde(&result) {
        Err(e) => JsValue::from_str(&format!("Error serializing simulation report: {:#?}", e)),
        Ok(v) => v,
    }
}

fn run_impl(input: &Input) -> Result<Report, Error> {
    let deck = if input.code.trim().is_empty() {
        input.deck.clone()
    } else {
        let collection = Collection::from_cards(input.cards.clone());
        match DeckSpec::from_list(&input.code, &collection) {
            Err(e) => return Err(Error::BadDeckcode(e.0)),
            Ok((main, _sideboard)) => main,
        }
    };
    Ok(simulation::run(&deck, &input.config)?)
}
