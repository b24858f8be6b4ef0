//! # Cost string parsing
//!
//! Cost strings are a run of tokens, each either `<digits>*` for generic
//! mana or `<digits><color>` for colored pips, e.g. `"3*U2W"`. A token
//! without digits counts as one.
use crate::card::{ManaColor, ManaCost};
use regex::Regex;

lazy_static! {
    static ref COST_TOKEN_REGEX: Regex =
        Regex::new(r"(\d*)(\*|[WUBRG])").expect("Failed to compile COST_TOKEN_REGEX regex");
}

/// Returns the ManaCost described by `cost_str`.
///
/// Characters that do not form a valid token are skipped, so malformed
/// input yields a partial (possibly empty) cost rather than an error.
/// Counts that do not fit in a `u8` saturate.
pub fn parse_mana_cost(cost_str: &str) -> ManaCost {
    let mut cost = ManaCost::new();
    for caps in COST_TOKEN_REGEX.captures_iter(cost_str) {
        let digits = &caps[1];
        let count = if digits.is_empty() {
            1
        } else {
            digits.parse::<u8>().unwrap_or(u8::MAX)
        };
        let color = match &caps[2] {
            "*" => ManaColor::Colorless,
            symbol => match symbol.chars().next().and_then(ManaColor::from_symbol) {
                Some(color) => color,
                None => continue,
            },
        };
        cost.add(color, count);
    }
    cost.update_bits()
}
