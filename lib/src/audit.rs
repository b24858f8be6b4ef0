//! # Audit passes
//!
//! A handful of simulated games can be kept with their full per-turn hands so
//! a person can check the simulation by eye.
use crate::card::{Card, ManaCost};
use crate::hand::Hand;
use crate::turn_state::TurnState;
use rand::prelude::*;

/// AuditCard is a snapshot of one card in hand on one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditCard {
  pub id: usize,
  pub card_name: String,
  pub is_land: bool,
  pub can_produce_mana: bool,
  pub turn_drawn: usize,
  pub is_castable: bool,
  pub cost: ManaCost,
  /// Producible colors as a string such as "WB"
  pub producible_colors: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTurn {
  pub turn: usize,
  pub cards: Vec<AuditCard>,
}

/// AuditRecord holds every turn of one audited game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
  pub pass_index: usize,
  pub turns: Vec<AuditTurn>,
}

impl AuditRecord {
  pub fn new(pass_index: usize) -> Self {
    Self {
      pass_index,
      turns: Vec::new(),
    }
  }

  /// Records `hand` as it stands after `state` has been advanced for the hand's turn.
  /// Lands and every card cast so far are reported castable.
  pub fn record_turn(&mut self, hand: &Hand, state: &TurnState) {
    let cards = hand
      .cards
      .iter()
      .map(|hc| {
        let card: &Card = hc.card;
        AuditCard {
          id: card.id,
          card_name: card.name.clone(),
          is_land: card.is_land(),
          can_produce_mana: card.can_produce_mana(),
          turn_drawn: hc.draw_turn,
          is_castable: card.is_land() || state.is_resolved(card.id),
          cost: card.mana_cost,
          producible_colors: card.produces.to_production(),
        }
      })
      .collect();
    self.turns.push(AuditTurn {
      turn: hand.turn,
      cards,
    });
  }
}

/// Returns up to `sample_size` distinct pass indices out of `run_count`, sorted.
/// If every pass fits in the sample, all of them are returned and `rng` is not used.
pub fn pick_audit_passes(run_count: usize, sample_size: usize, rng: &mut impl Rng) -> Vec<usize> {
  if run_count <= sample_size {
    return (0..run_count).collect();
  }
  let mut passes = rand::seq::index::sample(rng, run_count, sample_size).into_vec();
  passes.sort_unstable();
  passes
}

#[cfg(test)]
mod tests {
  use crate::audit::*;
  use crate::castability::CastStrategy;
  use crate::deck::Deck;
  use crate::hand::PlayOrder;
  use rand::rngs::SmallRng;

  #[test]
  fn small_run_audits_everything() {
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(pick_audit_passes(4, 10, &mut rng), vec![0, 1, 2, 3]);
    assert_eq!(pick_audit_passes(0, 10, &mut rng), Vec::<usize>::new());
  }

  #[test]
  fn picks_are_distinct_sorted_and_in_range() {
    let mut rng = SmallRng::seed_from_u64(5);
    let passes = pick_audit_passes(1000, 10, &mut rng);
    assert_eq!(passes.len(), 10);
    assert!(passes.windows(2).all(|w| w[0] < w[1]));
    assert!(passes.iter().all(|&p| p < 1000));
  }

  #[test]
  fn picks_are_reproducible() {
    let a = pick_audit_passes(500, 7, &mut SmallRng::seed_from_u64(9));
    let b = pick_audit_passes(500, 7, &mut SmallRng::seed_from_u64(9));
    assert_eq!(a, b);
  }

  #[test]
  fn record_turn_snapshots_hand() {
    let spec = deck_spec! {
      "Plains" => (">W", 1),
      "Savannah Lions" => ("W", 1),
      "Wrath" => ("2*WW", 1),
    };
    let deck = Deck::build(&spec, 3);
    let hand = Hand::from_deck(&deck, 3, 1, PlayOrder::First);
    let mut state = TurnState::new();
    state.advance(deck.cards(), &hand.cards(), 1, PlayOrder::First, CastStrategy::Exhaustive);
    let mut record = AuditRecord::new(12);
    record.record_turn(&hand, &state);
    assert_eq!(record.turns.len(), 1);
    let turn = &record.turns[0];
    assert_eq!(turn.turn, 1);
    assert_eq!(turn.cards.len(), 3);
    let lions = turn.cards.iter().find(|c| c.card_name == "Savannah Lions").unwrap();
    assert!(lions.is_castable);
    assert_eq!(lions.turn_drawn, 1);
    let wrath = turn.cards.iter().find(|c| c.card_name == "Wrath").unwrap();
    assert!(!wrath.is_castable);
    assert_eq!(wrath.cost.c, 2);
    let plains = turn.cards.iter().find(|c| c.is_land).unwrap();
    assert!(plains.is_castable);
    assert_eq!(plains.producible_colors, "W");
  }
}
