//! Snapshot of what has already happened in the tournament: real matches and byes.

use std::collections::HashSet;

use crate::player::{PlayedPair, PlayerId};

/// Played pairs and bye records, as handed to the engine for one pairing call.
///
/// Both sets only grow during a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchHistory {
    played: HashSet<PlayedPair>,
    byes: HashSet<PlayerId>,
}

impl MatchHistory {
    /// An empty history, as at the start of a tournament.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `a` and `b` played a real match. Self-pairs are ignored.
    pub fn record_match(&mut self, a: PlayerId, b: PlayerId) {
        if let Some(pair) = PlayedPair::new(a, b) {
            self.played.insert(pair);
        }
    }

    /// Records that `player` received a bye.
    pub fn record_bye(&mut self, player: PlayerId) {
        self.byes.insert(player);
    }

    /// True if `a` and `b` already met, in either order.
    pub fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        PlayedPair::new(a, b).is_some_and(|pair| self.played.contains(&pair))
    }

    /// True if `player` already sat out a round.
    pub fn has_had_bye(&self, player: PlayerId) -> bool {
        self.byes.contains(&player)
    }

    /// True if no bye was ever given.
    pub fn no_bye_yet(&self) -> bool {
        self.byes.is_empty()
    }

    /// All played pairs.
    pub fn played_pairs(&self) -> impl Iterator<Item = &PlayedPair> {
        self.played.iter()
    }

    /// All players who received a bye.
    pub fn byes(&self) -> impl Iterator<Item = &PlayerId> {
        self.byes.iter()
    }

    /// Number of distinct played pairs.
    pub fn num_played(&self) -> usize {
        self.played.len()
    }
}

impl FromIterator<(PlayerId, PlayerId)> for MatchHistory {
    fn from_iter<T: IntoIterator<Item = (PlayerId, PlayerId)>>(iter: T) -> Self {
        let mut history = Self::new();
        for (a, b) in iter {
            history.record_match(a, b);
        }
        history
    }
}
