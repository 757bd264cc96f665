//! Rematch repair within one group.
//!
//! Players are first paired with their neighbour in the ranking: `(p0, p1), (p2, p3), ...`.
//! Whenever one of those pairs already met, the first player of the offending pair trades places
//! with the second player of the previous pair (or, for the very first pair, the second player
//! trades places with the first player of the next pair). Pairs are then rebuilt and the scan
//! starts over until no pair is a rematch.
//!
//! The repair is local and greedy: it can cycle, or miss a solution that exists. Every swap
//! counts against [`Configuration::max_swap_iterations`], after which the group is reported as
//! unresolvable. If [`Configuration::exhaustive_fallback`] is enabled, a backtracking search over
//! every matching of the group is tried before giving up. That search stops after
//! [`Configuration::max_search_nodes`] nodes.

use tracing::{debug, trace, warn};

use crate::{
    configuration::Configuration,
    error::{Group, PairingError},
    history::MatchHistory,
    player::PlayerId,
};

/// Pairs the players of one group, in rank order, without repeating any match of `history`.
///
/// The result is deterministic for a given input.
///
/// # Errors
/// - [`PairingError::InvalidPlayerCount`] if `ranked` has an odd length.
/// - [`PairingError::UnresolvableRematch`] if no rematch-free pairing was found within the swap
///   cap, nor within the search budget when the fallback is enabled.
pub fn resolve_rematches(
    group: Group,
    ranked: &[PlayerId],
    history: &MatchHistory,
    config: &Configuration,
) -> Result<Vec<(PlayerId, PlayerId)>, PairingError> {
    if ranked.len() % 2 != 0 {
        return Err(PairingError::InvalidPlayerCount(ranked.len()));
    }

    let mut order = ranked.to_vec();
    match swap_repair(&mut order, history, config.max_swap_iterations) {
        Ok(swaps) => {
            debug!("{group} group resolved after {swaps} swap(s)");
            Ok(adjacent_pairs(&order))
        }
        Err(swaps) => {
            if config.exhaustive_fallback {
                warn!(
                    "{group} group: swap repair gave up after {swaps} swap(s), searching every matching"
                );
                match exhaustive_matching(ranked, history, config.max_search_nodes) {
                    Ok(Some(pairs)) => return Ok(pairs),
                    Ok(None) => {}
                    Err(OutOfBudget) => warn!(
                        "{group} group: search stopped after {} node(s)",
                        config.max_search_nodes
                    ),
                }
            }
            warn!("{group} group: no rematch-free pairing found");
            Err(PairingError::UnresolvableRematch {
                group,
                iterations: swaps,
            })
        }
    }
}

/// Builds `(p0, p1), (p2, p3), ...` from a sequence of even length.
pub fn adjacent_pairs(order: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
    order
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Index of the first adjacent pair that already met, if any.
fn first_rematch(order: &[PlayerId], history: &MatchHistory) -> Option<usize> {
    order
        .chunks_exact(2)
        .position(|pair| history.has_played(pair[0], pair[1]))
}

/// Swaps players in `order` until no adjacent pair is a rematch.
///
/// Returns the number of swaps performed, or, as an error, the number performed before giving up.
fn swap_repair(
    order: &mut [PlayerId],
    history: &MatchHistory,
    max_swaps: usize,
) -> Result<usize, usize> {
    let mut swaps = 0;
    while let Some(index) = first_rematch(order, history) {
        let (j, k) = if index == 0 {
            (1, 2)
        } else {
            (2 * index - 1, 2 * index)
        };
        // a lone pair has nobody to trade with
        if k >= order.len() || swaps >= max_swaps {
            return Err(swaps);
        }
        trace!(
            "rematch {{{}, {}}}: swapping #{} and #{}",
            order[2 * index],
            order[2 * index + 1],
            order[j],
            order[k]
        );
        order.swap(j, k);
        swaps += 1;
    }
    Ok(swaps)
}

/// The exhaustive search visited its maximum number of nodes without an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutOfBudget;

/// Depth-first search for a perfect rematch-free matching, trying closest ranks first.
///
/// `Ok(None)` means no such matching exists. Every partial matching the search extends counts as
/// one node against `max_nodes`.
fn exhaustive_matching(
    ranked: &[PlayerId],
    history: &MatchHistory,
    max_nodes: usize,
) -> Result<Option<Vec<(PlayerId, PlayerId)>>, OutOfBudget> {
    struct Search<'a> {
        ranked: &'a [PlayerId],
        history: &'a MatchHistory,
        used: Vec<bool>,
        pairs: Vec<(PlayerId, PlayerId)>,
        nodes: usize,
        max_nodes: usize,
    }

    impl Search<'_> {
        fn run(&mut self) -> Result<bool, OutOfBudget> {
            let Some(first) = self.used.iter().position(|taken| !taken) else {
                return Ok(true);
            };
            if self.nodes >= self.max_nodes {
                return Err(OutOfBudget);
            }
            self.nodes += 1;

            self.used[first] = true;
            for other in (first + 1)..self.ranked.len() {
                if self.used[other]
                    || self.history.has_played(self.ranked[first], self.ranked[other])
                {
                    continue;
                }
                self.used[other] = true;
                self.pairs.push((self.ranked[first], self.ranked[other]));
                if self.run()? {
                    return Ok(true);
                }
                self.pairs.pop();
                self.used[other] = false;
            }
            self.used[first] = false;
            Ok(false)
        }
    }

    let mut search = Search {
        ranked,
        history,
        used: vec![false; ranked.len()],
        pairs: Vec::with_capacity(ranked.len() / 2),
        nodes: 0,
        max_nodes,
    };
    let found = search.run()?;
    trace!("exhaustive search visited {} node(s)", search.nodes);
    Ok(found.then_some(search.pairs))
}
