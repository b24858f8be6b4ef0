//! # Castability oracle
//!
//! Decides whether a spell can be paid for by some subset of the available
//! mana sources, where every tapped source commits to exactly one of its colors.
use crate::bipartite::maximum_bipartite_matching;
use crate::card::{Card, ManaColor, ManaColors, ManaCost};

/// CastStrategy selects the algorithm used to answer castability queries.
/// Both strategies decide the same predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastStrategy {
  /// Enumerate source subsets and color assignments, see `can_cast`
  Exhaustive,
  /// Match colored pips to sources, see `can_cast_matching`
  Matching,
}

impl Default for CastStrategy {
  fn default() -> Self {
    Self::Exhaustive
  }
}

impl CastStrategy {
  #[inline]
  pub fn can_cast(self, spell: &Card, sources: &[&Card], budget: usize) -> bool {
    match self {
      Self::Exhaustive => can_cast(spell, sources, budget),
      Self::Matching => can_cast_matching(spell, sources, budget),
    }
  }
}

/// The colors a single source may tap for, in a fixed-size array
#[derive(Debug, Copy, Clone)]
struct Palette {
  colors: [ManaColor; 6],
  len: usize,
}

impl From<ManaColors> for Palette {
  fn from(set: ManaColors) -> Self {
    let mut palette = Self {
      colors: [ManaColor::Colorless; 6],
      len: 0,
    };
    for color in set.iter() {
      palette.colors[palette.len] = color;
      palette.len += 1;
    }
    palette
  }
}

/// Returns true if some subset of at most `budget` sources can pay for `spell`.
///
/// # Details
///
/// For every subset size from the spell's total cost up to `min(budget, sources.len())`,
/// every subset of that size is considered, and for every subset every way of choosing one
/// color per source. A choice pays if it covers each colored pip and the sources left over
/// cover the generic cost. The search stops at the first paying choice.
///
/// The worst case is exponential in the number of sources. Hands are small, so this is fine
/// in practice, but `can_cast_matching` answers the same question in polynomial time.
pub fn can_cast(spell: &Card, sources: &[&Card], budget: usize) -> bool {
  let needed = spell.cmc();
  if needed > budget || sources.is_empty() || !colors_offered(spell, sources) {
    return false;
  }
  let max_subset_size = std::cmp::min(budget, sources.len());
  let palettes: Vec<Palette> = sources.iter().map(|s| Palette::from(s.produces)).collect();
  let mut subset = Vec::with_capacity(max_subset_size);
  let mut choice = Vec::with_capacity(max_subset_size);
  for subset_size in needed..=max_subset_size {
    subset.clear();
    subset.extend(0..subset_size);
    loop {
      if subset_pays(spell, &palettes, &subset, &mut choice) {
        return true;
      }
      if !next_combination(&mut subset, sources.len()) {
        break;
      }
    }
  }
  false
}

/// Returns false if some color the spell needs is produced by none of `sources`
#[inline]
fn colors_offered(spell: &Card, sources: &[&Card]) -> bool {
  let offered = sources
    .iter()
    .fold(ManaColors::new(), |set, s| ManaColors(set.0 | s.produces.0));
  let offered = ManaColors(offered.0 & !ManaCost::C_BITS);
  let needed = spell.mana_cost.bits & !ManaCost::C_BITS;
  spell.mana_cost.color_contribution(offered) == needed.count_ones()
}

/// Returns true if any color choice for the sources in `subset` pays for `spell`
fn subset_pays(
  spell: &Card,
  palettes: &[Palette],
  subset: &[usize],
  choice: &mut Vec<usize>,
) -> bool {
  // A source with nothing to tap for can't take part in any assignment
  if subset.iter().any(|&i| palettes[i].len == 0) {
    return false;
  }
  let cost = &spell.mana_cost;
  let colored_pips = cost.pips();
  choice.clear();
  choice.resize(subset.len(), 0);
  loop {
    let mut supply = [0usize; 6];
    for (slot, &i) in subset.iter().enumerate() {
      supply[palettes[i].colors[choice[slot]].index()] += 1;
    }
    let colors_paid = ManaColor::ALL
      .iter()
      .all(|&color| supply[color.index()] >= cost.get(color) as usize);
    let leftover = subset.len().saturating_sub(colored_pips);
    if colors_paid && leftover >= cost.c as usize {
      return true;
    }
    // Advance the choice like an odometer, each digit bounded by its palette
    let mut slot = 0;
    loop {
      if slot == subset.len() {
        return false;
      }
      choice[slot] += 1;
      if choice[slot] < palettes[subset[slot]].len {
        break;
      }
      choice[slot] = 0;
      slot += 1;
    }
  }
}

/// Advances `indices` to the next k-combination of 0..n in lexicographic order.
/// Returns false once the last combination has been passed.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
  let k = indices.len();
  let mut i = k;
  while i > 0 {
    i -= 1;
    if indices[i] < n - k + i {
      indices[i] += 1;
      for j in i + 1..k {
        indices[j] = indices[j - 1] + 1;
      }
      return true;
    }
  }
  false
}

/// Returns the same answer as `can_cast`, using a maximum bipartite matching
/// between colored pips and sources.
///
/// Once every colored pip is matched to a distinct source, the generic cost
/// can be paid by any other source that taps for something, so the spell is
/// castable iff the matching is complete and enough sources can tap at all.
pub fn can_cast_matching(spell: &Card, sources: &[&Card], budget: usize) -> bool {
  let needed = spell.cmc();
  if needed > budget || sources.is_empty() || !colors_offered(spell, sources) {
    return false;
  }
  let tappable = sources.iter().filter(|s| !s.produces.is_empty()).count();
  if tappable < needed {
    return false;
  }
  let pips: Vec<ManaColor> = spell
    .mana_cost
    .colors()
    .flat_map(|(color, count)| std::iter::repeat(color).take(count as usize))
    .collect();
  let edges: Vec<bool> = pips
    .iter()
    .flat_map(|&pip| sources.iter().map(move |s| s.produces.contains(pip)))
    .collect();
  let mut seen = Vec::with_capacity(sources.len());
  let mut matches = Vec::with_capacity(sources.len());
  let matched = maximum_bipartite_matching(
    &edges,
    pips.len(),
    sources.len(),
    &mut seen,
    &mut matches,
  );
  matched == pips.len()
}

#[cfg(test)]
mod tests {
  use crate::card::*;
  use crate::castability::*;
  use rand::prelude::*;
  use rand::rngs::SmallRng;

  fn check(spell: &str, sources: &[&str], budget: usize) -> bool {
    let spell = card!(spell);
    let sources: Vec<Card> = sources.iter().map(|s| card!(*s)).collect();
    let refs: Vec<&Card> = sources.iter().collect();
    let exhaustive = can_cast(&spell, &refs, budget);
    let matching = can_cast_matching(&spell, &refs, budget);
    assert_eq!(exhaustive, matching, "strategies disagree on {:?}", spell.mana_string);
    exhaustive
  }

  #[test]
  fn single_pip_single_land() {
    assert!(check("W", &[">W"], 1));
    assert!(!check("W", &[">U"], 1));
  }

  #[test]
  fn over_budget_is_never_castable() {
    assert!(!check("2*W", &[">W", ">W", ">W", ">W"], 2));
    assert!(!check("WW", &[">W", ">W"], 1));
    assert!(!check("1*", &[">WUBRG", ">WUBRG"], 0));
  }

  #[test]
  fn no_sources_is_never_castable() {
    assert!(!check("W", &[], 5));
    assert!(!check("", &[], 5));
  }

  #[test]
  fn free_spell_needs_any_source() {
    assert!(check("", &[">U"], 0));
  }

  #[test]
  fn generic_paid_by_any_color() {
    assert!(check("2*", &[">U", ">B"], 2));
    assert!(check("1*R", &[">R", ">G"], 2));
    assert!(!check("1*R", &[">G", ">G"], 2));
  }

  #[test]
  fn dual_land_commits_to_one_color() {
    // a single W/U land can't pay both W and U
    assert!(!check("WU", &[">WU", ">B"], 3));
    assert!(check("WU", &[">WU", ">U"], 3));
  }

  #[test]
  fn dual_lands_need_the_right_assignment() {
    // B/W and W/U duals, a plains: W must come from the plains for both to work
    assert!(check("BUW", &[">BW", ">WU", ">W"], 3));
    assert!(!check("BBU", &[">BW", ">WU", ">W"], 3));
  }

  #[test]
  fn sources_without_colors_are_not_tappable() {
    assert!(!check("1*", &[">"], 1));
    assert!(!check("1*", &[">X"], 1));
    assert!(check("1*", &[">", ">G"], 2));
  }

  #[test]
  fn colorless_source_pays_generic_only() {
    assert!(check("1*G", &[">C", ">G"], 2));
    assert!(!check("GG", &[">C", ">G"], 2));
  }

  #[test]
  fn more_budget_never_hurts() {
    let spells = ["W", "1*W", "2*UB", "BB", "3*", "WUBRG", "1*GG"];
    let lands = [">W", ">U", ">B", ">R", ">G", ">WU", ">BG", ">RW", ">WUBRG", ">"];
    let mut rng = SmallRng::seed_from_u64(1234);
    for _ in 0..300 {
      let spell = card!(*spells.choose(&mut rng).unwrap());
      let source_count = rng.gen_range(0, 7);
      let sources: Vec<Card> = (0..source_count)
        .map(|_| card!(*lands.choose(&mut rng).unwrap()))
        .collect();
      let refs: Vec<&Card> = sources.iter().collect();
      let mut castable = false;
      for budget in 0..8 {
        let now = can_cast(&spell, &refs, budget);
        assert_eq!(now, can_cast_matching(&spell, &refs, budget));
        assert!(!castable || now, "castability lost at budget {}", budget);
        if spell.cmc() > budget {
          assert!(!now);
        }
        castable = now;
      }
    }
  }

  #[test]
  fn strategy_dispatch() {
    let spell = card!("1*U");
    let island = card!(">U");
    let forest = card!(">G");
    let sources = vec![&island, &forest];
    assert!(CastStrategy::Exhaustive.can_cast(&spell, &sources, 2));
    assert!(CastStrategy::Matching.can_cast(&spell, &sources, 2));
    assert_eq!(CastStrategy::default(), CastStrategy::Exhaustive);
  }

  #[test]
  fn next_combination_enumerates_all() {
    let mut indices = vec![0, 1];
    let mut seen = vec![indices.clone()];
    while next_combination(&mut indices, 4) {
      seen.push(indices.clone());
    }
    assert_eq!(
      seen,
      vec![
        vec![0, 1],
        vec![0, 2],
        vec![0, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3]
      ]
    );
  }
}
