//! # Simulation hands and turn arithmetic
use crate::card::Card;
use crate::deck::Deck;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd)]
pub enum PlayOrder {
  /// On the play: no draw on turn 1
  First,
  /// On the draw: draw on turn 1
  Second,
}

impl PlayOrder {
  pub fn from_on_the_play(on_the_play: bool) -> Self {
    if on_the_play {
      Self::First
    } else {
      Self::Second
    }
  }

  /// Returns the number of mana sources that may be used on `turn` (1-indexed)
  #[inline]
  pub fn lands_playable(self, turn: usize) -> usize {
    match self {
      Self::First => turn + 1,
      Self::Second => turn,
    }
  }

  /// Returns how many cards have been seen by `turn` (1-indexed)
  #[inline]
  pub fn hand_size(self, opening_hand_size: usize, turn: usize) -> usize {
    match self {
      Self::First => opening_hand_size + turn.saturating_sub(1),
      Self::Second => opening_hand_size + turn,
    }
  }

  /// Returns the turn on which the card at deck `position` (0-indexed) enters the hand
  #[inline]
  pub fn draw_turn(self, opening_hand_size: usize, position: usize) -> usize {
    if position < opening_hand_size {
      return 1;
    }
    let draws = position - opening_hand_size;
    match self {
      Self::First => draws + 2,
      Self::Second => draws + 1,
    }
  }
}

/// HandCard is a card in hand along with the turn it was drawn
#[derive(Debug, Copy, Clone)]
pub struct HandCard<'a> {
  pub card: &'a Card,
  pub draw_turn: usize,
}

/// Hand represents the cards seen by some turn: the opening hand plus every
/// card drawn since. Filler slots are dropped.
#[derive(Debug, Clone)]
pub struct Hand<'a> {
  pub cards: Vec<HandCard<'a>>,
  pub turn: usize,
}

impl<'a> Hand<'a> {
  /// Returns the hand for `turn` from the current order of `deck`
  pub fn from_deck(
    deck: &'a Deck,
    opening_hand_size: usize,
    turn: usize,
    play_order: PlayOrder,
  ) -> Self {
    let size = play_order.hand_size(opening_hand_size, turn);
    let cards = deck
      .draw_top_n(size)
      .iter()
      .enumerate()
      .filter_map(|(position, slot)| {
        slot.map(|id| HandCard {
          card: deck.card(id),
          draw_turn: play_order.draw_turn(opening_hand_size, position),
        })
      })
      .collect();
    Self { cards, turn }
  }

  /// Returns the cards in hand, without draw turns
  pub fn cards(&self) -> Vec<&'a Card> {
    self.cards.iter().map(|c| c.card).collect()
  }

  /// Returns the total number of cards in hand
  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

}
