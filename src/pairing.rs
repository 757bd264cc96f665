//! The pairing list handed back to the caller for the next round.

use std::{collections::HashMap, fmt};

use crate::{
    error::PairingError,
    player::{Player, PlayerId, StandingEntry},
};

/// One match of the upcoming round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Id of the first player.
    pub id_a: PlayerId,
    /// Name of the first player.
    pub name_a: String,
    /// Id of the second player.
    pub id_b: PlayerId,
    /// Name of the second player.
    pub name_b: String,
}

impl Pairing {
    /// Both ids, in pairing order.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id_a, self.id_b)
    }

    /// True if `id` plays in this match.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.id_a == id || self.id_b == id
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) VS {} (#{})",
            self.name_a, self.id_a, self.name_b, self.id_b
        )
    }
}

/// Every match of a round, top group first, plus the player sitting out, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundPairing {
    /// Matches to play, in order.
    pub pairings: Vec<Pairing>,
    /// Player receiving the bye this round.
    pub bye: Option<Player>,
}

impl RoundPairing {
    /// Number of matches.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// True when there is no match to play.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Iterates over the matches.
    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    /// Every id taking part in a real match, in pairing order.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.pairings
            .iter()
            .flat_map(|pairing| [pairing.id_a, pairing.id_b])
            .collect()
    }
}

impl<'a> IntoIterator for &'a RoundPairing {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

/// Attaches names to the resolved pairs of both groups and joins them, top group first.
///
/// # Errors
/// [`PairingError::UnknownPlayer`] if an id (or the bye) has no row in `standings`.
pub fn assemble(
    top: &[(PlayerId, PlayerId)],
    bottom: &[(PlayerId, PlayerId)],
    standings: &[StandingEntry],
    bye: Option<PlayerId>,
) -> Result<RoundPairing, PairingError> {
    let names: HashMap<PlayerId, &str> = standings
        .iter()
        .map(|entry| (entry.player_id, entry.name.as_str()))
        .collect();
    let name_of = |id: PlayerId| {
        names
            .get(&id)
            .map(|name| name.to_string())
            .ok_or(PairingError::UnknownPlayer(id))
    };

    let pairings = top
        .iter()
        .chain(bottom)
        .map(|&(id_a, id_b)| {
            Ok(Pairing {
                id_a,
                name_a: name_of(id_a)?,
                id_b,
                name_b: name_of(id_b)?,
            })
        })
        .collect::<Result<Vec<_>, PairingError>>()?;

    let bye = bye
        .map(|id| name_of(id).map(|name| Player::new(id, name)))
        .transpose()?;

    Ok(RoundPairing { pairings, bye })
}

#[cfg(test)]
mod pairing_tests {
    use super::*;

    fn standings() -> Vec<StandingEntry> {
        ["Bruno Walton", "Boots O'Neal", "Cathy Burton", "Diane Grant", "Giulio G"]
            .iter()
            .zip(1..)
            .map(|(name, id)| StandingEntry::new(id, *name, 0, 0))
            .collect()
    }

    #[test]
    fn top_group_comes_first() {
        let round = assemble(&[(1, 2)], &[(3, 4)], &standings(), Some(5)).unwrap();
        assert_eq!(round.len(), 2);
        assert_eq!(round.pairings[0].ids(), (1, 2));
        assert_eq!(round.pairings[0].name_b, "Boots O'Neal");
        assert_eq!(round.pairings[1].ids(), (3, 4));
        assert_eq!(round.bye, Some(Player::new(5, "Giulio G")));
        assert_eq!(round.player_ids(), vec![1, 2, 3, 4]);
        assert_eq!(
            round.pairings[1].to_string(),
            "Cathy Burton (#3) VS Diane Grant (#4)"
        );
    }

    #[test]
    fn unknown_ids_are_reported() {
        let result = assemble(&[(1, 9)], &[], &standings(), None);
        assert!(matches!(result, Err(PairingError::UnknownPlayer(9))));
    }
}
