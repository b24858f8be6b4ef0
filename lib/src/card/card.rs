//! # Internal card representation
//!
pub use crate::card::mana_cost::*;
use crate::parse_mana_cost::parse_mana_cost;

/// The character that separates a cost from the colors a card produces.
/// A mechanical string that starts with it describes a land.
pub const PRODUCTION_SENTINEL: char = '>';

/// Card represents one physical card in a simulated deck.
///
/// Copies of the same card share `name` and `mana_string` but have
/// distinct `id`s, which is what the simulation uses to tell them apart.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
  /// Instance id, unique within a deck
  pub id: usize,
  /// Display name shared by every copy
  pub name: String,
  /// The mechanical string the card was built from, e.g. "3*>WUBRG"
  pub mana_string: String,
  /// The card type
  pub kind: CardKind,
  /// ManaCost representation of the card cost, zero for lands
  pub mana_cost: ManaCost,
  /// Colors the card taps for once it is on the battlefield
  pub produces: ManaColors,
}

/// CardKind distinguishes the three roles a card can play in the mana simulation
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
  /// Costs nothing and taps for mana, e.g. ">BW"
  Land,
  /// Has a cost and becomes a mana source once cast, e.g. "1*G>G"
  ManaSpell,
  /// Has a cost and produces nothing, e.g. "2*UU"
  Spell,
}

impl Card {
  /// Returns a card parsed from its mechanical string.
  ///
  /// * `">BW"` is a land tapping for B or W
  /// * `"3*>WUBRG"` costs 3 generic and then taps for any color
  /// * `"1*R"` is a plain spell
  ///
  /// Every string is accepted; anything that is not a valid cost token is ignored.
  pub fn new(id: usize, name: &str, mana_string: &str) -> Self {
    let (kind, mana_cost, produces) = if mana_string.starts_with(PRODUCTION_SENTINEL) {
      let production = &mana_string[PRODUCTION_SENTINEL.len_utf8()..];
      (
        CardKind::Land,
        ManaCost::new(),
        ManaColors::from_production(production),
      )
    } else if let Some(idx) = mana_string.find(PRODUCTION_SENTINEL) {
      let (cost, production) = mana_string.split_at(idx);
      let production = &production[PRODUCTION_SENTINEL.len_utf8()..];
      (
        CardKind::ManaSpell,
        parse_mana_cost(cost),
        ManaColors::from_production(production),
      )
    } else {
      (CardKind::Spell, parse_mana_cost(mana_string), ManaColors::new())
    };
    Self {
      id,
      name: name.to_string(),
      mana_string: mana_string.to_string(),
      kind,
      mana_cost,
      produces,
    }
  }

  /// Returns the total mana needed to cast the card
  #[inline]
  pub fn cmc(&self) -> usize {
    self.mana_cost.cmc()
  }

  /// Returns true if the card type is a land
  #[inline]
  pub fn is_land(&self) -> bool {
    self.kind == CardKind::Land
  }

  /// Returns true for lands and mana-producing spells
  #[inline]
  pub fn can_produce_mana(&self) -> bool {
    self.kind != CardKind::Spell
  }
}

impl Default for CardKind {
  fn default() -> Self {
    Self::Spell
  }
}

/// Builds a `Card` from a mechanical string, optionally with a display name.
/// The instance id defaults to 0.
#[macro_export]
macro_rules! card {
  ($mana_string:expr) => {
    $crate::card::Card::new(0, $mana_string, $mana_string)
  };
  ($name:expr, $mana_string:expr) => {
    $crate::card::Card::new(0, $name, $mana_string)
  };
}
