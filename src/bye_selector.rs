//! Choice of the player who sits out a round when attendance is odd.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    error::PairingError,
    history::MatchHistory,
    player::{PlayerId, StandingEntry},
};

/// Picks the bye player for the next round, or `None` when the player count is even.
///
/// Until a first bye has been given, anybody can get it. Afterwards, only players with at least
/// one win and no previous bye are candidates.
///
/// # Errors
/// [`PairingError::NoEligibleByeCandidate`] when the count is odd and the candidate list is empty.
pub fn select_bye<R: Rng + ?Sized>(
    standings: &[StandingEntry],
    history: &MatchHistory,
    rng: &mut R,
) -> Result<Option<PlayerId>, PairingError> {
    if standings.len() % 2 == 0 {
        return Ok(None);
    }

    let candidates = bye_candidates(standings, history);
    debug!(?candidates, "bye candidates");

    let chosen = *candidates
        .choose(rng)
        .ok_or(PairingError::NoEligibleByeCandidate)?;
    info!("player #{chosen} receives a bye");
    Ok(Some(chosen))
}

/// Players allowed to receive the next bye, in standings order.
pub fn bye_candidates(standings: &[StandingEntry], history: &MatchHistory) -> Vec<PlayerId> {
    if history.no_bye_yet() {
        return standings.iter().map(|entry| entry.player_id).collect();
    }
    standings
        .iter()
        .filter(|entry| entry.wins >= 1 && !history.has_had_bye(entry.player_id))
        .map(|entry| entry.player_id)
        .collect()
}
