//! # Aggregate tables produced by a simulation run
//!
//! A `Report` is plain data: every table is a `Vec` of rows so it serializes
//! the same way to JSON for a browser and to bincode for the compressed format.
use crate::audit::AuditRecord;
use crate::card::Card;
use crate::deck::DeckSpec;
use crate::error::ReportError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::prelude::*;

/// Average number of dead spells per trial that lacked each color
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingColors {
  pub w: f64,
  pub u: f64,
  pub b: f64,
  pub r: f64,
  pub g: f64,
}

/// Fraction of trials whose best replacement land was each color, or no color at all
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalColors {
  pub w: f64,
  pub u: f64,
  pub b: f64,
  pub r: f64,
  pub g: f64,
  pub none: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
  pub turn: usize,
  /// Fraction of trials with at least one dead spell on this turn
  pub p_dead: f64,
  pub avg_missing: MissingColors,
  /// Only present when the run asked for color advice
  pub pct_optimal: Option<OptimalColors>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
  pub turn: usize,
  pub dead_spells: usize,
  /// Number of trials with exactly `dead_spells` dead spells on `turn`
  pub frequency: usize,
}

/// DelayRow is the number of turns a card sat in hand before it could be cast
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRow {
  pub card_name: String,
  pub delay: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRow {
  pub card_name: String,
  pub generic: u8,
  pub w: u8,
  pub u: u8,
  pub b: u8,
  pub r: u8,
  pub g: u8,
  pub count: usize,
}

impl CostRow {
  /// Returns one row per entry of `spec`. Lands cost nothing; mana spells
  /// report only their cost.
  pub fn from_spec(spec: &DeckSpec) -> Vec<Self> {
    spec
      .cards
      .iter()
      .map(|entry| {
        let cost = Card::new(0, &entry.name, &entry.mana_string).mana_cost;
        Self {
          card_name: entry.name.clone(),
          generic: cost.c,
          w: cost.w,
          u: cost.u,
          b: cost.b,
          r: cost.r,
          g: cost.g,
          count: entry.count,
        }
      })
      .collect()
  }
}

/// Stats summarize every (trial, turn) pair of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
  pub pct_turns_zero_dead: f64,
  pub expected_dead_per_turn: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
  /// The seed the run actually used, so it can be repeated
  pub seed: u64,
  pub summary: Vec<SummaryRow>,
  pub distribution: Vec<DistributionRow>,
  pub delays: Vec<DelayRow>,
  pub audit: Vec<AuditRecord>,
  pub costs: Vec<CostRow>,
  pub stats: Stats,
}

impl Report {
  /// Returns the report as gzip compressed bincode
  pub fn to_compressed(&self) -> Result<Vec<u8>, ReportError> {
    let encoded = bincode::serialize(self)?;
    let mut e = GzEncoder::new(Vec::with_capacity(encoded.len() / 2), Compression::default());
    e.write_all(&encoded[..])?;
    Ok(e.finish()?)
  }

  /// Returns the report encoded by `to_compressed`
  pub fn from_compressed(bytes: &[u8]) -> Result<Self, ReportError> {
    let mut gz = GzDecoder::new(bytes);
    let mut s: Vec<u8> = Vec::new();
    gz.read_to_end(&mut s)?;
    Ok(bincode::deserialize(&s)?)
  }

  /// Returns the summary row for `turn` (1-indexed)
  pub fn summary_for_turn(&self, turn: usize) -> Option<&SummaryRow> {
    self.summary.iter().find(|row| row.turn == turn)
  }

  /// Returns the distribution rows for `turn`, ordered by dead spell count
  pub fn distribution_for_turn(&self, turn: usize) -> impl Iterator<Item = &DistributionRow> {
    self.distribution.iter().filter(move |row| row.turn == turn)
  }
}

#[cfg(test)]
mod tests {
  use crate::report::*;

  #[test]
  fn cost_rows_from_spec() {
    let spec = deck_spec! {
      "Forest" => (">G", 16),
      "Llanowar Elves" => ("G>G", 4),
      "Kitchen Finks" => ("1*GW", 3),
    };
    let rows = CostRow::from_spec(&spec);
    assert_eq!(rows.len(), 3);
    let forest = rows.iter().find(|r| r.card_name == "Forest").unwrap();
    assert_eq!((forest.generic, forest.g, forest.count), (0, 0, 16));
    let elves = rows.iter().find(|r| r.card_name == "Llanowar Elves").unwrap();
    assert_eq!((elves.generic, elves.g), (0, 1));
    let finks = rows.iter().find(|r| r.card_name == "Kitchen Finks").unwrap();
    assert_eq!((finks.generic, finks.g, finks.w, finks.count), (1, 1, 1, 3));
  }

  #[test]
  fn compressed_report_decodes() {
    let report = Report {
      seed: 42,
      summary: vec![SummaryRow {
        turn: 1,
        p_dead: 0.25,
        avg_missing: MissingColors {
          w: 0.5,
          ..Default::default()
        },
        pct_optimal: Some(OptimalColors {
          none: 1.0,
          ..Default::default()
        }),
      }],
      distribution: vec![DistributionRow {
        turn: 1,
        dead_spells: 0,
        frequency: 3,
      }],
      delays: vec![DelayRow {
        card_name: "Opt".to_string(),
        delay: 2,
      }],
      ..Default::default()
    };
    let bytes = report.to_compressed().unwrap();
    assert_eq!(Report::from_compressed(&bytes).unwrap(), report);
  }

  #[test]
  fn garbage_is_an_error() {
    assert!(Report::from_compressed(b"not a report").is_err());
  }
}
