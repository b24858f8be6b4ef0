use crate::card::{Card, ManaColor, ManaCost};

/// ManaColorCount tallies a count per color, e.g. how many dead spells
/// were short of each color on a given turn
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaColorCount {
  pub w: usize,
  pub u: usize,
  pub b: usize,
  pub r: usize,
  pub g: usize,
}

impl ManaColorCount {
  pub fn new() -> Self {
    Self {
      w: 0,
      u: 0,
      b: 0,
      r: 0,
      g: 0,
    }
  }

  /// Returns the tally for `color`. Colorless is never tallied.
  pub fn get(&self, color: ManaColor) -> usize {
    match color {
      ManaColor::White => self.w,
      ManaColor::Blue => self.u,
      ManaColor::Black => self.b,
      ManaColor::Red => self.r,
      ManaColor::Green => self.g,
      ManaColor::Colorless => 0,
    }
  }

  pub fn add(&mut self, color: ManaColor, n: usize) {
    match color {
      ManaColor::White => self.w += n,
      ManaColor::Blue => self.u += n,
      ManaColor::Black => self.b += n,
      ManaColor::Red => self.r += n,
      ManaColor::Green => self.g += n,
      ManaColor::Colorless => {}
    }
  }

  pub fn merge(&mut self, other: &ManaColorCount) {
    self.w += other.w;
    self.u += other.u;
    self.b += other.b;
    self.r += other.r;
    self.g += other.g;
  }

  pub fn total(&self) -> usize {
    self.w + self.u + self.b + self.r + self.g
  }

  /// Returns how many of `sources` can tap for each color
  pub fn supply<'a, I>(sources: I) -> Self
  where
    I: IntoIterator<Item = &'a Card>,
  {
    let mut supply = Self::new();
    for source in sources {
      for color in source.produces.iter() {
        supply.add(color, 1);
      }
    }
    supply
  }

  /// Counts one shortfall for every color `cost` needs more of than `supply` offers.
  /// Only raw supply is compared; which sources would be tapped is not considered.
  pub fn count_shortfall(&mut self, cost: &ManaCost, supply: &ManaColorCount) {
    for (color, needed) in cost.colors() {
      if supply.get(color) < needed as usize {
        self.add(color, 1);
      }
    }
  }
}
