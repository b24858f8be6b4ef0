//! # Deck specifications, deck list parsing and the simulated deck
use crate::card::*;
use crate::collection::Collection;
use rand::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// DeckEntry is one line of a deck specification: a card and its copy count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
  pub name: String,
  pub mana_string: String,
  pub count: usize,
}

/// DeckSpec maps card names to mechanical strings and copy counts.
/// The card count is always derived from `cards`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
  pub cards: Vec<DeckEntry>,
}

#[derive(Debug, Clone)]
pub struct DeckBuilder {
  pub cards: BTreeMap<String, (String, usize)>,
}

impl DeckBuilder {
  pub fn new() -> Self {
    Self {
      cards: BTreeMap::new(),
    }
  }

  /// Adds `count` copies of `name`. Repeated names accumulate their counts
  /// and keep the first mechanical string seen.
  pub fn insert_count(mut self, name: &str, mana_string: &str, count: usize) -> Self {
    let entry = self
      .cards
      .entry(name.to_string())
      .or_insert_with(|| (mana_string.to_string(), 0));
    entry.1 += count;
    Self { cards: self.cards }
  }

  pub fn build(self) -> DeckSpec {
    let mut spec = DeckSpec::new();
    for (name, (mana_string, count)) in self.cards {
      spec.cards.push(DeckEntry {
        name,
        mana_string,
        count,
      });
    }
    spec
  }
}

impl Default for DeckBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckcodeError(pub String);

impl fmt::Display for DeckcodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "deck list error: {}", self.0)
  }
}

impl std::error::Error for DeckcodeError {}

impl DeckSpec {
  pub fn new() -> Self {
    Self {
      cards: Vec::with_capacity(20),
    }
  }

  pub fn builder() -> DeckBuilder {
    DeckBuilder::new()
  }

  /// Returns the number of cards, counting copies
  pub fn len(&self) -> usize {
    self.cards.iter().map(|entry| entry.count).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns (main deck, sideboard) specifications from a pasted deck list.
  ///
  /// Lines look like `4 Llanowar Elves (DOM) 168`, the set suffix being optional.
  /// Each name is resolved through `collection`, which also supplies the
  /// canonical spelling of the name.
  pub fn from_list(list: &str, collection: &Collection) -> Result<(Self, Self), DeckcodeError> {
    lazy_static! {
        static ref DECK_LINE_REGEX: Regex =
            Regex::new(r"^\s*(?P<amount>\d+)\s+(?P<name>[^\(#\n\r]+)(?:\s*\((?P<set>\w+)\)\s+(?P<setnum>\d+))?")
                .expect("Failed to compile DECK_LINE_REGEX regex");
    }
    let mut main = DeckBuilder::new();
    let mut side = DeckBuilder::new();
    let mut in_sideboard = false;
    for line in list.trim().lines() {
      let trimmed = line.trim();
      let trimmed_lower = trimmed.to_lowercase();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }
      // Ignore reserved words
      if trimmed_lower == "deck" || trimmed_lower == "commander" {
        continue;
      }
      if trimmed_lower == "sideboard" {
        in_sideboard = true;
        continue;
      }
      if trimmed_lower == "maybeboard" {
        break;
      }
      let caps = DECK_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| DeckcodeError(format!("Cannot regex capture deck list line: {}", line)))?;
      let amount = caps["amount"].parse::<usize>().map_err(|_| {
        DeckcodeError(format!(
          "Cannot parse usize card amount from deck list line: {}",
          line
        ))
      })?;
      let name = caps["name"].trim();
      let card = collection
        .card_from_name(name)
        .ok_or_else(|| {
          DeckcodeError(format!(
            "Cannot find card named \"{}\" in collection",
            name
          ))
        })?;
      if in_sideboard {
        side = side.insert_count(&card.name, &card.mana_string, amount);
      } else {
        main = main.insert_count(&card.name, &card.mana_string, amount);
      }
    }
    Ok((main.build(), side.build()))
  }
}

/// A deck position: the id of the card there, or `None` for filler
pub type Slot = Option<usize>;

/// Deck is the simulated library for one game.
///
/// Cards are built once and never move; shuffling permutes `order`, which
/// holds one slot per card plus enough filler slots to reach the nominal deck
/// size. Drawing reads a prefix of `order` and never removes anything.
#[derive(Debug, Clone)]
pub struct Deck {
  cards: Vec<Card>,
  order: Vec<Slot>,
}

impl Deck {
  /// Expands `spec` into one card per copy and pads with filler up to `total_size`.
  /// Card ids are the index of the card in `cards()`. Specs larger than
  /// `total_size` are never truncated.
  pub fn build(spec: &DeckSpec, total_size: usize) -> Self {
    let mut cards = Vec::with_capacity(spec.len());
    for entry in &spec.cards {
      for _ in 0..entry.count {
        let id = cards.len();
        cards.push(Card::new(id, &entry.name, &entry.mana_string));
      }
    }
    if cards.len() > total_size {
      warn!(
        "Deck specification holds {} cards, more than the nominal deck size of {}",
        cards.len(),
        total_size
      );
    }
    let slot_count = std::cmp::max(cards.len(), total_size);
    let mut deck = Self {
      cards,
      order: Vec::with_capacity(slot_count),
    };
    deck.order.resize(slot_count, None);
    deck.reset();
    deck
  }

  /// Restores the unshuffled order: every card by id, then filler
  pub fn reset(&mut self) {
    let card_count = self.cards.len();
    for (i, slot) in self.order.iter_mut().enumerate() {
      *slot = if i < card_count { Some(i) } else { None };
    }
  }

  /// Shuffles the deck order uniformly at random
  pub fn shuffle(&mut self, rng: &mut impl Rng) {
    self.order.shuffle(rng);
  }

  /// Returns the first `n` slots of the current order, or every slot if `n` exceeds the deck
  #[inline]
  pub fn draw_top_n(&self, n: usize) -> &[Slot] {
    let n = std::cmp::min(n, self.order.len());
    &self.order[..n]
  }

  /// Returns every card in the deck, indexed by id
  #[inline]
  pub fn cards(&self) -> &[Card] {
    &self.cards
  }

  #[inline]
  pub fn card(&self, id: usize) -> &Card {
    &self.cards[id]
  }

  /// Returns the number of slots, filler included
  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}

/// Builds a `DeckSpec` from `name => (mana_string, count)` pairs
#[macro_export]
macro_rules! deck_spec {
  ($($name:expr => ($mana_string:expr, $count:expr)),* $(,)?) => {
    $crate::deck::DeckSpec::builder()
      $(.insert_count($name, $mana_string, $count))*
      .build()
  };
}

#[cfg(test)]
mod tests {
  use crate::collection::Collection;
  use crate::deck::*;
  use rand::rngs::SmallRng;

  fn entry<'a>(spec: &'a DeckSpec, name: &str) -> &'a DeckEntry {
    spec.cards.iter().find(|entry| entry.name == name).unwrap()
  }

  fn collection() -> Collection {
    Collection::from_pairs(vec![
      ("Plains", ">W"),
      ("Swamp", ">B"),
      ("Scoured Barrens", ">BW"),
      ("Llanowar Elves", "G>G"),
      ("Duress", "B"),
      ("Lingering Souls", "2*W"),
    ])
  }

  #[test]
  fn builder_merges_names() {
    let spec = deck_spec! {
      "Plains" => (">W", 10),
      "Duress" => ("B", 2),
      "Plains" => (">U", 7),
    };
    assert_eq!(spec.len(), 19);
    assert_eq!(spec.cards.len(), 2);
    let plains = entry(&spec, "Plains");
    assert_eq!(plains.count, 17);
    assert_eq!(plains.mana_string, ">W");
  }

  #[test]
  fn good_deck_list_0() {
    let list = "
        Deck
        16 Plains (DMU) 278
        1 Scoured Barrens
        4 Lingering Souls

        Sideboard
        3 Duress (M21) 94
        ";
    let (main, side) = DeckSpec::from_list(list, &collection()).unwrap();
    assert_eq!(main.len(), 21);
    assert_eq!(side.len(), 3);
    assert_eq!(entry(&main, "Plains").mana_string, ">W");
    assert_eq!(entry(&side, "Duress").mana_string, "B");
  }

  #[test]
  fn good_deck_list_comments_and_repeats() {
    let list = "
        # lands
        8 Swamp
        8 swamp
        4 Llanowar Elves
        ";
    let (main, side) = DeckSpec::from_list(list, &collection()).unwrap();
    assert_eq!(main.len(), 20);
    assert!(side.is_empty());
    assert_eq!(main.cards.len(), 2);
    assert_eq!(entry(&main, "Swamp").count, 16);
  }

  #[test]
  fn card_count_comes_from_the_entries() {
    let spec: DeckSpec = serde_json::from_str(
      r#"{"cards": [
        {"name": "Swamp", "mana_string": ">B", "count": 17},
        {"name": "Duress", "mana_string": "B", "count": 23}
      ]}"#,
    )
    .unwrap();
    assert_eq!(spec.len(), 40);
    // a stale count from an older format is ignored
    let spec: DeckSpec = serde_json::from_str(
      r#"{"cards": [{"name": "Duress", "mana_string": "B", "count": 23}], "card_count": 0}"#,
    )
    .unwrap();
    assert_eq!(spec.len(), 23);
    assert!(!spec.is_empty());
  }

  #[test]
  fn bad_deck_list_unknown_card() {
    let res = DeckSpec::from_list("4 Black Lotus", &collection());
    assert!(res.is_err());
  }

  #[test]
  fn bad_deck_list_no_amount() {
    let res = DeckSpec::from_list("Plains", &collection());
    assert!(res.is_err());
  }

  #[test]
  fn build_pads_with_filler() {
    let spec = deck_spec! {
      "Plains" => (">W", 17),
      "Duress" => ("B", 3),
    };
    let deck = Deck::build(&spec, 40);
    assert_eq!(deck.len(), 40);
    assert_eq!(deck.cards().len(), 20);
    assert_eq!(deck.draw_top_n(40).iter().filter(|s| s.is_none()).count(), 20);
    for (id, card) in deck.cards().iter().enumerate() {
      assert_eq!(card.id, id);
    }
  }

  #[test]
  fn build_never_truncates() {
    let spec = deck_spec! { "Plains" => (">W", 45) };
    let deck = Deck::build(&spec, 40);
    assert_eq!(deck.len(), 45);
    assert!(deck.draw_top_n(45).iter().all(|s| s.is_some()));
  }

  #[test]
  fn draw_is_a_prefix_of_one_shuffle() {
    let spec = deck_spec! {
      "Plains" => (">W", 10),
      "Lingering Souls" => ("2*W", 10),
    };
    let mut deck = Deck::build(&spec, 30);
    let mut rng = SmallRng::seed_from_u64(7);
    deck.shuffle(&mut rng);
    let seven = deck.draw_top_n(7).to_vec();
    let eight = deck.draw_top_n(8).to_vec();
    assert_eq!(&eight[..7], &seven[..]);
    assert_eq!(deck.draw_top_n(100).len(), 30);
  }

  #[test]
  fn shuffle_is_a_permutation() {
    let spec = deck_spec! { "Duress" => ("B", 12) };
    let mut deck = Deck::build(&spec, 20);
    let mut rng = SmallRng::seed_from_u64(11);
    deck.shuffle(&mut rng);
    let mut ids: Vec<_> = deck.draw_top_n(20).iter().filter_map(|s| *s).collect();
    ids.sort();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());
    deck.reset();
    assert_eq!(deck.draw_top_n(1), &[Some(0)]);
  }
}
