//! Errors returned by a pairing computation.

use thiserror::Error;

use crate::player::PlayerId;

/// Which half of the standings a rematch failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Higher-ranked half.
    Top,
    /// Lower-ranked half.
    Bottom,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Top => write!(f, "top"),
            Group::Bottom => write!(f, "bottom"),
        }
    }
}

/// Failure of a single pairing call. Nothing is recorded when one of these is returned.
#[derive(Debug, Error)]
pub enum PairingError {
    /// Pairing needs at least two active players, and an even number once the bye is out.
    #[error("cannot pair {0} active player(s)")]
    InvalidPlayerCount(usize),

    /// Odd player count but every player with a win already had a bye.
    #[error("no player is eligible for a bye")]
    NoEligibleByeCandidate,

    /// The swap repair could not remove every rematch from a group.
    #[error("could not avoid a rematch in the {group} group after {iterations} swap(s)")]
    UnresolvableRematch {
        /// Group in which the repair gave up.
        group: Group,
        /// Swaps performed before giving up.
        iterations: usize,
    },

    /// A resolved id has no row in the standings snapshot.
    #[error("player #{0} is missing from the standings")]
    UnknownPlayer(PlayerId),

    /// The standings/history collaborator failed.
    #[error("tournament store error: {0:#}")]
    Store(#[from] anyhow::Error),
}
