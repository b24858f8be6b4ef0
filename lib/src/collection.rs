//! # Collection
//!
//! A lookup table from card names to the mechanical strings the simulator
//! understands, e.g. "Plains" to ">W" or "Llanowar Elves" to "G>G".
use std::ops::Deref;

/// CollectionCard maps a card name to its mechanical string
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCard {
  pub name: String,
  pub mana_string: String,
}

/// A Collection represents every card a deck list may refer to
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Collection {
  pub cards: Vec<CollectionCard>,
}

impl Collection {
  /// Returns a new collection of cards
  pub fn from_cards(mut cards: Vec<CollectionCard>) -> Self {
    // sort for binary_search used in card_from_name
    cards.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Self { cards }
  }

  /// Returns a new collection from (name, mechanical string) pairs
  pub fn from_pairs<I, S, T>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: Into<String>,
  {
    Self::from_cards(
      pairs
        .into_iter()
        .map(|(name, mana_string)| CollectionCard {
          name: name.into(),
          mana_string: mana_string.into(),
        })
        .collect(),
    )
  }

  /// Returns a card from the card name, ignoring case
  pub fn card_from_name(&self, name: &str) -> Option<&CollectionCard> {
    let name_lowercase = name.to_lowercase();
    let res = self
      .cards
      .binary_search_by(|probe| probe.name.to_lowercase().cmp(&name_lowercase));
    res.map(|idx| &self.cards[idx]).ok()
  }
}

impl Deref for Collection {
  type Target = [CollectionCard];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}
