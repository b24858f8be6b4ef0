//! # Maximum bipartite matching implementation

// Various resources for my own benefit
// - https://en.wikipedia.org/wiki/Ford%E2%80%93Fulkerson_algorithm
// - https://en.wikipedia.org/wiki/Hopcroft%E2%80%93Karp_algorithm
// - http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

/// Returns the size of the maximum matching set of the
/// bipartite graph represented by the adjacency matrix
/// `edges` with `m_count` rows (mana pips) and `n_count` columns (sources).
/// `seen` and `matches` are scratch space, resized here as needed.
/// Implementation based on the "Alternate Approach" from
/// http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf
pub fn maximum_bipartite_matching(
  edges: &[bool],
  m_count: usize,
  n_count: usize,
  seen: &mut Vec<bool>,
  matches: &mut Vec<Option<usize>>,
) -> usize {
  debug_assert_eq!(edges.len(), m_count * n_count);
  seen.clear();
  seen.resize(n_count, false);
  matches.clear();
  matches.resize(n_count, None);
  let mut match_count = 0;
  // for each mana pip
  for m in 0..m_count {
    for s in seen.iter_mut() {
      *s = false;
    }
    if recursive_find_match(edges, n_count, m, seen, matches) {
      match_count += 1;
    }
  }
  match_count
}

fn recursive_find_match(
  edges: &[bool],
  n_count: usize,
  m: usize,
  seen: &mut Vec<bool>,
  matches: &mut Vec<Option<usize>>,
) -> bool {
  // for each source
  for n in 0..n_count {
    if !edges[n_count * m + n] || seen[n] {
      continue;
    }
    seen[n] = true;
    // Is this source free, OR can the pip currently holding it move to another source?
    let available = match matches[n] {
      None => true,
      Some(other) => recursive_find_match(edges, n_count, other, seen, matches),
    };
    if available {
      matches[n] = Some(m);
      return true;
    }
  }
  false
}
