//! # Simulation engine and dead spell observations
//!
//! `run` plays `run_count` games from one seeded random stream and reduces
//! them to a `Report`. Each game is played by `simulate_one`: one shuffle,
//! then a hand snapshot and a `TurnState::advance` per turn.
use crate::advice::best_replacement_color;
use crate::audit::{pick_audit_passes, AuditRecord};
use crate::card::{ManaColor, ManaColorCount};
use crate::castability::CastStrategy;
use crate::deck::{Deck, DeckSpec};
use crate::error::SimulationError;
use crate::hand::{Hand, PlayOrder};
use crate::report::*;
use crate::turn_state::TurnState;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
  /// Nominal deck size. Decks with fewer cards are padded with cards that don't matter for mana
  pub deck_size: usize,
  /// Opening hand size
  pub hand_size: usize,
  /// Number of turns to simulate per game
  pub turns: usize,
  /// Number of games to simulate
  pub run_count: usize,
  /// Seed for the run; drawn from entropy and logged when absent
  pub seed: Option<u64>,
  pub on_the_play: bool,
  /// Number of games to keep with full per-turn hands
  pub audit_sample_size: Option<usize>,
  /// Compute the best replacement land color every turn
  pub color_advice: bool,
  pub strategy: CastStrategy,
}

impl Default for SimulationConfig {
  fn default() -> Self {
    Self {
      deck_size: 40,
      hand_size: 7,
      turns: 10,
      run_count: 10000,
      seed: None,
      on_the_play: true,
      audit_sample_size: None,
      color_advice: false,
      strategy: CastStrategy::Exhaustive,
    }
  }
}

impl SimulationConfig {
  pub fn play_order(&self) -> PlayOrder {
    PlayOrder::from_on_the_play(self.on_the_play)
  }

  /// Rejects configurations that can't produce a meaningful report for `deck`
  pub fn validate(&self, deck: &DeckSpec) -> Result<(), SimulationError> {
    if self.run_count == 0 {
      return Err(SimulationError::NoRuns);
    }
    if self.turns == 0 {
      return Err(SimulationError::NoTurns);
    }
    if deck.is_empty() && self.deck_size == 0 {
      return Err(SimulationError::EmptyDeck);
    }
    Ok(())
  }
}

/// SimulationInput is the JSON accepted by the command line runner and the wasm entry point
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
  pub deck: DeckSpec,
  #[serde(default)]
  pub config: SimulationConfig,
}

/// Game is the raw record of one simulated game. Per-turn vectors are indexed by turn - 1.
#[derive(Debug, Default, Clone)]
pub struct Game {
  pub dead: Vec<usize>,
  pub missing: Vec<ManaColorCount>,
  /// Empty unless color advice was requested
  pub optimal: Vec<Option<ManaColor>>,
  /// (card id, delay) for every non-land card seen by the last turn
  pub delays: Vec<(usize, usize)>,
  pub audit: Option<AuditRecord>,
}

/// Plays one game with `deck`, which is reset and reshuffled from `rng` first.
/// `audit_index` is the pass index to record a full audit under, if any.
pub fn simulate_one(
  deck: &mut Deck,
  config: &SimulationConfig,
  rng: &mut impl Rng,
  audit_index: Option<usize>,
) -> Game {
  deck.reset();
  deck.shuffle(rng);
  let deck = &*deck;
  let play_order = config.play_order();
  let mut state = TurnState::new();
  let mut castable_turn: HashMap<usize, usize> = HashMap::new();
  let mut game = Game {
    dead: Vec::with_capacity(config.turns),
    missing: Vec::with_capacity(config.turns),
    optimal: Vec::new(),
    delays: Vec::new(),
    audit: audit_index.map(AuditRecord::new),
  };
  for turn in 1..=config.turns {
    let hand = Hand::from_deck(deck, config.hand_size, turn, play_order);
    let cards = hand.cards();
    let outcome = state.advance(deck.cards(), &cards, turn, play_order, config.strategy);
    for id in outcome.newly_castable {
      castable_turn.entry(id).or_insert(turn);
    }
    game.dead.push(outcome.dead);
    game.missing.push(outcome.missing);
    if config.color_advice {
      game.optimal.push(best_replacement_color(
        deck.cards(),
        &cards,
        turn,
        play_order,
        &state,
        config.strategy,
      ));
    }
    if let Some(record) = game.audit.as_mut() {
      record.record_turn(&hand, &state);
    }
  }
  // Cards never cast are censored at the horizon
  let last_hand = Hand::from_deck(deck, config.hand_size, config.turns, play_order);
  game.delays = last_hand
    .cards
    .iter()
    .filter(|hc| !hc.card.is_land())
    .map(|hc| {
      let delay = castable_turn
        .get(&hc.card.id)
        .map(|&turn| turn - hc.draw_turn)
        .unwrap_or(config.turns);
      (hc.card.id, delay)
    })
    .collect();
  game
}

/// Observations accumulates one turn across every game of a run
#[derive(Debug, Default, Clone)]
pub struct Observations {
  /// Games with at least one dead spell
  pub any_dead: usize,
  /// Dead spell count -> number of games
  pub dead_counts: BTreeMap<usize, usize>,
  pub missing: ManaColorCount,
  /// Best replacement color counts in W, U, B, R, G, none order
  pub optimal: [usize; 6],
  pub total_runs: usize,
}

impl Observations {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn observe(
    &mut self,
    dead: usize,
    missing: &ManaColorCount,
    optimal: Option<Option<ManaColor>>,
  ) {
    self.total_runs += 1;
    if dead > 0 {
      self.any_dead += 1;
    }
    *self.dead_counts.entry(dead).or_insert(0) += 1;
    self.missing.merge(missing);
    if let Some(best) = optimal {
      let i = match best {
        Some(ManaColor::Colorless) | None => 5,
        Some(color) => color.index(),
      };
      self.optimal[i] += 1;
    }
  }

  pub fn p_dead(&self) -> f64 {
    self.any_dead as f64 / self.total_runs as f64
  }

  pub fn avg_missing(&self) -> MissingColors {
    let runs = self.total_runs as f64;
    MissingColors {
      w: self.missing.w as f64 / runs,
      u: self.missing.u as f64 / runs,
      b: self.missing.b as f64 / runs,
      r: self.missing.r as f64 / runs,
      g: self.missing.g as f64 / runs,
    }
  }

  pub fn pct_optimal(&self) -> OptimalColors {
    let runs = self.total_runs as f64;
    OptimalColors {
      w: self.optimal[0] as f64 / runs,
      u: self.optimal[1] as f64 / runs,
      b: self.optimal[2] as f64 / runs,
      r: self.optimal[3] as f64 / runs,
      g: self.optimal[4] as f64 / runs,
      none: self.optimal[5] as f64 / runs,
    }
  }

  /// Returns the number of games with no dead spells
  pub fn zero_dead(&self) -> usize {
    self.dead_counts.get(&0).copied().unwrap_or(0)
  }

  /// Returns the dead spell count summed over every game
  pub fn total_dead(&self) -> usize {
    self
      .dead_counts
      .iter()
      .map(|(dead, frequency)| dead * frequency)
      .sum()
  }
}

/// Runs the Monte Carlo simulation of `deck_spec` described by `config`.
///
/// Every random choice comes from one `SmallRng` seeded before anything else
/// happens: audit passes are picked first, then each game shuffles in order.
/// The same seed, deck and config always produce the same report.
pub fn run(deck_spec: &DeckSpec, config: &SimulationConfig) -> Result<Report, SimulationError> {
  config.validate(deck_spec)?;
  let seed = config
    .seed
    .unwrap_or_else(|| SmallRng::from_entropy().gen());
  info!(
    "Simulating {} games of {} turns with seed {}",
    config.run_count, config.turns, seed
  );
  let mut rng = SmallRng::seed_from_u64(seed);
  let audit_passes = match config.audit_sample_size {
    Some(sample_size) => pick_audit_passes(config.run_count, sample_size, &mut rng),
    None => Vec::new(),
  };
  debug!("Auditing passes {:?}", audit_passes);

  let mut deck = Deck::build(deck_spec, config.deck_size);
  let mut observations = vec![Observations::new(); config.turns];
  let mut delays = Vec::new();
  let mut audit = Vec::with_capacity(audit_passes.len());
  for pass in 0..config.run_count {
    let audit_index = if audit_passes.binary_search(&pass).is_ok() {
      Some(pass)
    } else {
      None
    };
    let game = simulate_one(&mut deck, config, &mut rng, audit_index);
    for (i, obs) in observations.iter_mut().enumerate() {
      obs.observe(game.dead[i], &game.missing[i], game.optimal.get(i).copied());
    }
    delays.extend(game.delays.iter().map(|&(id, delay)| DelayRow {
      card_name: deck.card(id).name.clone(),
      delay,
    }));
    audit.extend(game.audit);
  }

  let summary: Vec<SummaryRow> = observations
    .iter()
    .enumerate()
    .map(|(i, obs)| SummaryRow {
      turn: i + 1,
      p_dead: obs.p_dead(),
      avg_missing: obs.avg_missing(),
      pct_optimal: if config.color_advice {
        Some(obs.pct_optimal())
      } else {
        None
      },
    })
    .collect();
  let distribution = observations
    .iter()
    .enumerate()
    .flat_map(|(i, obs)| {
      obs
        .dead_counts
        .iter()
        .map(move |(&dead_spells, &frequency)| DistributionRow {
          turn: i + 1,
          dead_spells,
          frequency,
        })
    })
    .collect();
  let pairs = (config.run_count * config.turns) as f64;
  let zero_dead: usize = observations.iter().map(|obs| obs.zero_dead()).sum();
  let total_dead: usize = observations.iter().map(|obs| obs.total_dead()).sum();
  let stats = Stats {
    pct_turns_zero_dead: zero_dead as f64 / pairs,
    expected_dead_per_turn: total_dead as f64 / pairs,
  };
  info!(
    "Finished {} games, {:.4} dead spells per turn on average",
    config.run_count, stats.expected_dead_per_turn
  );
  Ok(Report {
    seed,
    summary,
    distribution,
    delays,
    audit,
    costs: CostRow::from_spec(deck_spec),
    stats,
  })
}
