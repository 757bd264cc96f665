//! Player-side values consumed by the engine: identities, standings rows and played pairs.

use std::fmt;

/// Unique identifier of a registered player.
pub type PlayerId = u32;

/// A registered player. Created by the collaborator, never owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Unique id.
    pub id: PlayerId,
    /// Display name (need not be unique).
    pub name: String,
}

impl Player {
    /// Creates a player from its id and display name.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// One row of the standings table.
///
/// The standings handed to the engine are ordered by descending `wins`, ties keeping
/// their previous relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    /// Id of the player this row describes.
    pub player_id: PlayerId,
    /// Display name of the player.
    pub name: String,
    /// Number of wins, byes included.
    pub wins: u32,
    /// Number of matches played, byes included.
    pub matches: u32,
}

impl StandingEntry {
    /// Creates a standings row.
    pub fn new(player_id: PlayerId, name: impl Into<String>, wins: u32, matches: u32) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins,
            matches,
        }
    }

    /// The player this row describes.
    pub fn player(&self) -> Player {
        Player::new(self.player_id, self.name.clone())
    }
}

/// An unordered pair of players who met in a real (non-bye) match.
///
/// Stored with the lowest id first so that `{a, b}` and `{b, a}` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayedPair {
    low: PlayerId,
    high: PlayerId,
}

impl PlayedPair {
    /// Builds the unordered pair `{a, b}`.
    ///
    /// Returns `None` when `a == b`: a player never plays against themself.
    pub fn new(a: PlayerId, b: PlayerId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both ids, lowest first.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.low, self.high)
    }
}

impl fmt::Display for PlayedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

#[cfg(test)]
mod player_tests {
    use super::*;

    #[test]
    fn played_pair_is_unordered() {
        assert_eq!(PlayedPair::new(3, 7), PlayedPair::new(7, 3));
        assert_eq!(PlayedPair::new(7, 3).map(|p| p.ids()), Some((3, 7)));
    }

    #[test]
    fn played_pair_rejects_self_match() {
        assert!(PlayedPair::new(4, 4).is_none());
    }

    #[test]
    fn standing_entry_exposes_player() {
        let entry = StandingEntry::new(2, "Cathy Burton", 1, 1);
        assert_eq!(entry.player(), Player::new(2, "Cathy Burton"));
        assert_eq!(entry.player().to_string(), "Cathy Burton (#2)");
    }
}
