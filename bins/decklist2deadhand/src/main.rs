extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate deadhand;

use deadhand::collection::{Collection, CollectionCard};
use deadhand::deck::{DeckSpec, DeckcodeError};
use std::env;
use std::fs::File;
use std::io::prelude::*;

#[derive(Debug)]
enum Error {
    Json(serde_json::Error),
    Io(std::io::Error),
    Deckcode(DeckcodeError),
    Usage,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<DeckcodeError> for Error {
    fn from(error: DeckcodeError) -> Self {
        Self::Deckcode(error)
    }
}

/// Usage: decklist2deadhand <cards.json> <deck.txt> <deck.json>
///
/// `cards.json` is a list of `{"name": ..., "mana_string": ...}` objects.
/// Writes the main deck of `deck.txt` as a deck specification.
fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Expected 3 arguments, card table path, deck list path and output path");
        return Err(Error::Usage);
    }
    let cards_path = &args[1];
    let list_path = &args[2];
    let out_path = &args[3];

    info!("Loading card table @ {}", cards_path);
    let mut json_file_contents = String::new();
    File::open(cards_path)?.read_to_string(&mut json_file_contents)?;
    let cards: Vec<CollectionCard> = serde_json::from_str(&json_file_contents)?;
    let collection = Collection::from_cards(cards);
    info!("Card table has {} cards", collection.len());

    info!("Loading deck list @ {}", list_path);
    let mut list = String::new();
    File::open(list_path)?.read_to_string(&mut list)?;
    let (main, sideboard) = DeckSpec::from_list(&list, &collection)?;
    info!(
        "Main deck has {} cards, sideboard has {} cards (not written)",
        main.len(),
        sideboard.len()
    );

    let file = File::create(out_path)?;
    serde_json::to_writer_pretty(file, &main)?;
    Ok(())
}
