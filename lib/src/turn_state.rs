//! # Dead spell accounting across the turns of one game
//!
//! A card in hand moves from uncastable to castable at most once per game.
//! Castable mana-producing spells join the pool of permanent mana sources
//! from the following turn on; castable plain spells are treated as resolved
//! and are never counted as dead again, even if the mana to pay for them
//! would no longer be there.
use crate::card::{Card, ManaColorCount};
use crate::castability::CastStrategy;
use crate::hand::PlayOrder;
use std::collections::HashSet;

/// TurnState is what one game remembers from turn to turn.
/// Both sets only ever grow; a new game starts from `TurnState::new()`.
#[derive(Debug, Default, Clone)]
pub struct TurnState {
  /// Ids of mana-producing spells that have been cast, in the order they were found
  producers: Vec<usize>,
  /// Ids of plain spells that have been cast
  castable: HashSet<usize>,
}

/// TurnOutcome is the result of accounting for one turn
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TurnOutcome {
  /// Non-land cards in hand that could not be cast
  pub dead: usize,
  /// For each color, how many dead spells needed more of it than the sources could supply
  pub missing: ManaColorCount,
  /// Ids of cards that became castable this turn
  pub newly_castable: Vec<usize>,
}

impl TurnState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the ids of mana-producing spells in play
  pub fn producers(&self) -> &[usize] {
    &self.producers
  }

  /// Returns true if the card with `id` has been cast earlier in the game
  #[inline]
  pub fn is_resolved(&self, id: usize) -> bool {
    self.castable.contains(&id) || self.producers.contains(&id)
  }

  /// Accounts for `hand` on `turn` (1-indexed) and updates the state.
  ///
  /// The sources for the turn are the producers cast on earlier turns plus every land in
  /// hand, and at most `play_order.lands_playable(turn)` of them may be tapped for a single
  /// spell. Each non-land card not yet resolved is checked against those sources. Producers
  /// found castable only become sources on the next turn.
  ///
  /// `cards` maps ids to cards and must cover every producer id in the state.
  pub fn advance(
    &mut self,
    cards: &[Card],
    hand: &[&Card],
    turn: usize,
    play_order: PlayOrder,
    strategy: CastStrategy,
  ) -> TurnOutcome {
    let budget = play_order.lands_playable(turn);
    let mut sources: Vec<&Card> = self.producers.iter().map(|&id| &cards[id]).collect();
    sources.extend(hand.iter().copied().filter(|c| c.is_land()));
    let supply = ManaColorCount::supply(sources.iter().copied());

    let mut outcome = TurnOutcome::default();
    let mut discovered = Vec::new();
    for card in hand.iter().copied() {
      if card.is_land() || self.is_resolved(card.id) {
        continue;
      }
      if card.cmc() > budget {
        outcome.dead += 1;
        continue;
      }
      if strategy.can_cast(card, &sources, budget) {
        if card.can_produce_mana() {
          discovered.push(card.id);
        } else {
          self.castable.insert(card.id);
        }
        outcome.newly_castable.push(card.id);
      } else {
        outcome.dead += 1;
        outcome.missing.count_shortfall(&card.mana_cost, &supply);
      }
    }
    self.producers.extend(discovered);
    outcome
  }

  /// Returns the number of dead spells `advance` would report, leaving self untouched
  pub fn count_dead(
    &self,
    cards: &[Card],
    hand: &[&Card],
    turn: usize,
    play_order: PlayOrder,
    strategy: CastStrategy,
  ) -> usize {
    self
      .clone()
      .advance(cards, hand, turn, play_order, strategy)
      .dead
  }
}
