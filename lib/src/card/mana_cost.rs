use std::fmt;

/// ManaCost represents a card mana cost: colored pips plus a generic amount
#[derive(
  Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ManaCost {
  pub bits: u8,
  pub w: u8,
  pub u: u8,
  pub b: u8,
  pub r: u8,
  pub g: u8,
  /// Generic mana, written as `*` in a cost string
  pub c: u8,
}

/// ManaColor represents one of the five colors, plus colorless mana
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManaColor {
  #[serde(rename = "W")]
  White = 0,
  #[serde(rename = "U")]
  Blue = 1,
  #[serde(rename = "B")]
  Black = 2,
  #[serde(rename = "R")]
  Red = 3,
  #[serde(rename = "G")]
  Green = 4,
  #[serde(other)]
  Colorless = 5,
}

impl ManaColor {
  /// The five colors in canonical WUBRG order
  pub const ALL: [ManaColor; 5] = [
    ManaColor::White,
    ManaColor::Blue,
    ManaColor::Black,
    ManaColor::Red,
    ManaColor::Green,
  ];

  /// Returns the color named by a cost letter, if any
  pub fn from_symbol(symbol: char) -> Option<Self> {
    match symbol {
      'W' => Some(Self::White),
      'U' => Some(Self::Blue),
      'B' => Some(Self::Black),
      'R' => Some(Self::Red),
      'G' => Some(Self::Green),
      'C' => Some(Self::Colorless),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Self::White => 'W',
      Self::Blue => 'U',
      Self::Black => 'B',
      Self::Red => 'R',
      Self::Green => 'G',
      Self::Colorless => 'C',
    }
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  #[inline]
  fn bit(self) -> u8 {
    1 << (self as u8)
  }
}

impl fmt::Display for ManaColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl ManaCost {
  /// Returns a new ManaCost worth 0 CMC
  pub fn new() -> Self {
    Self {
      bits: 0,
      w: 0,
      u: 0,
      b: 0,
      r: 0,
      g: 0,
      c: 0,
    }
  }

  /// Returns a new ManaCost with the given color counts
  pub fn from_wubrgc(w: u8, u: u8, b: u8, r: u8, g: u8, c: u8) -> Self {
    Self {
      bits: Self::calculate_signature_wubrgc(w, u, b, r, g, c),
      w,
      u,
      b,
      r,
      g,
      c,
    }
  }

  /// Returns the total amount of mana required
  #[inline]
  pub fn cmc(self) -> usize {
    self.pips() + self.c as usize
  }

  /// Returns the number of colored pips
  #[inline]
  pub fn pips(self) -> usize {
    self.w as usize + self.u as usize + self.b as usize + self.r as usize + self.g as usize
  }

  /// Returns the pip count for `color`; colorless maps to the generic amount
  #[inline]
  pub fn get(&self, color: ManaColor) -> u8 {
    match color {
      ManaColor::White => self.w,
      ManaColor::Blue => self.u,
      ManaColor::Black => self.b,
      ManaColor::Red => self.r,
      ManaColor::Green => self.g,
      ManaColor::Colorless => self.c,
    }
  }

  /// Adds `count` pips of `color`, saturating at `u8::MAX`
  pub fn add(&mut self, color: ManaColor, count: u8) {
    let slot = match color {
      ManaColor::White => &mut self.w,
      ManaColor::Blue => &mut self.u,
      ManaColor::Black => &mut self.b,
      ManaColor::Red => &mut self.r,
      ManaColor::Green => &mut self.g,
      ManaColor::Colorless => &mut self.c,
    };
    *slot = slot.saturating_add(count);
  }

  /// Returns the colors with at least one pip, in WUBRG order
  pub fn colors(self) -> impl Iterator<Item = (ManaColor, u8)> {
    IntoIterator::into_iter(ManaColor::ALL)
      .map(move |color| (color, self.get(color)))
      .filter(|&(_, count)| count > 0)
  }

  /// Returns the amount of color overlap between self and the colors in `other`
  #[inline]
  pub fn color_contribution(&self, other: ManaColors) -> u32 {
    (self.bits & other.0).count_ones()
  }

  #[inline]
  pub fn update_bits(mut self) -> Self {
    self.bits = Self::calculate_signature_wubrgc(self.w, self.u, self.b, self.r, self.g, self.c);
    self
  }

  #[inline]
  fn calculate_signature_wubrgc(w: u8, u: u8, b: u8, r: u8, g: u8, c: u8) -> u8 {
    use std::cmp::min;
    (min(1, w) << 0 & Self::W_BITS)
      | (min(1, u) << 1 & Self::U_BITS)
      | (min(1, b) << 2 & Self::B_BITS)
      | (min(1, r) << 3 & Self::R_BITS)
      | (min(1, g) << 4 & Self::G_BITS)
      | (min(1, c) << 5 & Self::C_BITS)
  }

  pub const W_BITS: u8 = 0b0000_0001;
  pub const U_BITS: u8 = 0b0000_0010;
  pub const B_BITS: u8 = 0b0000_0100;
  pub const R_BITS: u8 = 0b0000_1000;
  pub const G_BITS: u8 = 0b0001_0000;
  pub const C_BITS: u8 = 0b0010_0000;
}

/// ManaColors is the set of colors a mana source can tap for.
/// Uses the same bit layout as `ManaCost::bits`.
#[derive(
  Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ManaColors(pub u8);

impl ManaColors {
  pub fn new() -> Self {
    Self(0)
  }

  /// Returns the set of colors named in a production string such as "BW".
  /// Only W, U, B, R, G and C are symbols; anything else is ignored, so a
  /// production like "X" names no color and its source can't be tapped.
  pub fn from_production(production: &str) -> Self {
    production
      .chars()
      .filter_map(ManaColor::from_symbol)
      .fold(Self::new(), |set, color| set.with(color))
  }

  #[inline]
  pub fn with(self, color: ManaColor) -> Self {
    Self(self.0 | color.bit())
  }

  #[inline]
  pub fn contains(self, color: ManaColor) -> bool {
    self.0 & color.bit() != 0
  }

  #[inline]
  pub fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  #[inline]
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Iterates the colors in the set, WUBRG first and colorless last
  pub fn iter(self) -> impl Iterator<Item = ManaColor> {
    IntoIterator::into_iter(ManaColor::ALL)
      .chain(std::iter::once(ManaColor::Colorless))
      .filter(move |&color| self.contains(color))
  }

  /// Returns the production string for the set, e.g. "BW" becomes "WB"
  pub fn to_production(self) -> String {
    self.iter().map(ManaColor::symbol).collect()
  }
}
