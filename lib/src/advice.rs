//! # Replacement land advice
//!
//! Answers "which single-color land would have helped most this turn?" by
//! swapping each land in hand for a basic of each color and recounting dead spells.
use crate::card::{Card, ManaColor};
use crate::castability::CastStrategy;
use crate::hand::PlayOrder;
use crate::turn_state::TurnState;

/// Returns the color whose basic land, swapped in for one land in `hand`, leaves the fewest
/// dead spells. Colors are tried in WUBRG order and only a strict improvement over the
/// current hand counts, so ties go to the earlier color. Returns `None` when the hand holds
/// no land or no swap helps.
///
/// `state` is only read; each candidate hand is counted against a copy of it.
pub fn best_replacement_color(
  cards: &[Card],
  hand: &[&Card],
  turn: usize,
  play_order: PlayOrder,
  state: &TurnState,
  strategy: CastStrategy,
) -> Option<ManaColor> {
  let land_positions: Vec<usize> = hand
    .iter()
    .enumerate()
    .filter(|(_, card)| card.is_land())
    .map(|(i, _)| i)
    .collect();
  if land_positions.is_empty() {
    return None;
  }
  let mut best_dead = state.count_dead(cards, hand, turn, play_order, strategy);
  if best_dead == 0 {
    return None;
  }
  let basics: Vec<Card> = ManaColor::ALL
    .iter()
    .map(|color| {
      let mana_string = format!(">{}", color.symbol());
      Card::new(usize::MAX, &mana_string, &mana_string)
    })
    .collect();
  let mut best_color = None;
  for (color, basic) in ManaColor::ALL.iter().zip(basics.iter()) {
    let mut candidate: Vec<&Card> = hand.to_vec();
    for &i in &land_positions {
      let original = candidate[i];
      candidate[i] = basic;
      let dead = state.count_dead(cards, &candidate, turn, play_order, strategy);
      candidate[i] = original;
      if dead < best_dead {
        best_dead = dead;
        best_color = Some(*color);
        if best_dead == 0 {
          return best_color;
        }
      }
    }
  }
  best_color
}

#[cfg(test)]
mod tests {
  use crate::advice::*;

  fn cards(mana_strings: &[&str]) -> Vec<Card> {
    mana_strings
      .iter()
      .enumerate()
      .map(|(id, s)| Card::new(id, s, s))
      .collect()
  }

  #[test]
  fn no_lands_no_advice() {
    let cards = cards(&["W", "U"]);
    let hand: Vec<&Card> = cards.iter().collect();
    let state = TurnState::new();
    let color = best_replacement_color(
      &cards,
      &hand,
      1,
      PlayOrder::First,
      &state,
      CastStrategy::Exhaustive,
    );
    assert_eq!(color, None);
  }

  #[test]
  fn nothing_dead_no_advice() {
    let cards = cards(&[">W", "W"]);
    let hand: Vec<&Card> = cards.iter().collect();
    let state = TurnState::new();
    let color = best_replacement_color(
      &cards,
      &hand,
      1,
      PlayOrder::First,
      &state,
      CastStrategy::Exhaustive,
    );
    assert_eq!(color, None);
  }

  #[test]
  fn suggests_the_missing_color() {
    let cards = cards(&[">W", ">W", "R"]);
    let hand: Vec<&Card> = cards.iter().collect();
    let state = TurnState::new();
    let color = best_replacement_color(
      &cards,
      &hand,
      1,
      PlayOrder::First,
      &state,
      CastStrategy::Exhaustive,
    );
    assert_eq!(color, Some(ManaColor::Red));
  }

  #[test]
  fn ties_go_to_the_earlier_color() {
    // one land for one of two dead spells: blue comes before green
    let cards = cards(&[">B", "U", "G"]);
    let hand: Vec<&Card> = cards.iter().collect();
    let state = TurnState::new();
    let color = best_replacement_color(
      &cards,
      &hand,
      1,
      PlayOrder::First,
      &state,
      CastStrategy::Exhaustive,
    );
    assert_eq!(color, Some(ManaColor::Blue));
  }

  #[test]
  fn state_is_not_mutated() {
    let cards = cards(&[">W", "R", "W"]);
    let hand: Vec<&Card> = cards.iter().collect();
    let state = TurnState::new();
    best_replacement_color(&cards, &hand, 1, PlayOrder::First, &state, CastStrategy::Exhaustive);
    assert!(!state.is_resolved(1));
    assert!(!state.is_resolved(2));
  }
}
