//! Core pairing logic for the next round of a Swiss tournament.
//!
//! This module defines the [`SwissPairer`] type, which orchestrates a pairing computation:
//!
//! 1. Read the standings and the match history from a [`TournamentStore`]
//! 2. If the player count is odd, pick a bye player (see [`select_bye`])
//! 3. Split the remaining ranked players into two even groups (see [`split_groups`])
//! 4. Pair each group with its neighbours, swapping players away from rematches
//!    (see [`resolve_rematches`])
//! 5. Attach names and join both groups (see [`assemble`])
//! 6. Post the bye to the store as an automatic win
//!
//! The bye is posted last, so an error at any step leaves the store untouched.
//!
//! [`select_bye`]: crate::bye_selector::select_bye
//! [`split_groups`]: crate::group_splitter::split_groups
//! [`resolve_rematches`]: crate::rematch_resolver::resolve_rematches
//! [`assemble`]: crate::pairing::assemble

use rand::Rng;
use tracing::{info, instrument, trace, warn};

use crate::{
    bye_selector::select_bye,
    configuration::Configuration,
    error::{Group, PairingError},
    group_splitter::split_groups,
    history::MatchHistory,
    logger::init_logger,
    pairing::{assemble, RoundPairing},
    player::{PlayerId, StandingEntry},
    rematch_resolver::resolve_rematches,
    store::TournamentStore,
};

/// Computes the pairings of successive rounds.
///
/// The pairer is stateless between calls: everything it needs comes from the store.
#[derive(Debug, Clone, Default)]
pub struct SwissPairer {
    config: Configuration,
}

impl SwissPairer {
    /// Create a [`SwissPairer`] with the given [`Configuration`].
    ///
    /// Installs the file logger when `config` asks for it.
    #[instrument(skip_all)]
    pub fn new(config: Configuration) -> SwissPairer {
        if config.log {
            if let Err(e) = init_logger() {
                warn!("file logging disabled: {e:#}");
            }
        }
        trace!(?config);
        SwissPairer { config }
    }

    /// Computes the pairings of the next round and posts the bye, if any, to `store`.
    ///
    /// `rng` drives the bye choice only; the pairings themselves are deterministic.
    ///
    /// # Errors
    /// - [`PairingError::InvalidPlayerCount`] with fewer than two players.
    /// - [`PairingError::NoEligibleByeCandidate`] when no player can take the bye.
    /// - [`PairingError::UnresolvableRematch`] when a group cannot avoid a rematch.
    /// - [`PairingError::Store`] when the store fails.
    #[instrument(skip_all)]
    pub fn compute_next_round_pairing<S, R>(
        &self,
        store: &mut S,
        rng: &mut R,
    ) -> Result<RoundPairing, PairingError>
    where
        S: TournamentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let standings = store.standings()?;
        let history = store.history()?;

        if standings.len() < 2 {
            return Err(PairingError::InvalidPlayerCount(standings.len()));
        }

        let bye = select_bye(&standings, &history, rng)?;
        let round = self.plan_round(&standings, &history, bye)?;

        if let Some(player) = bye {
            store.record_bye(player)?;
        }

        info!(
            "next round: {} match(es), bye: {}",
            round.len(),
            round
                .bye
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.to_string())
        );
        Ok(round)
    }

    /// Pairs the players of `standings`, minus `bye`, without touching any store.
    ///
    /// Calling it twice on the same snapshot yields the same pairings.
    ///
    /// # Errors
    /// - [`PairingError::InvalidPlayerCount`] if fewer than two players remain, or an odd number.
    /// - [`PairingError::UnresolvableRematch`] when a group cannot avoid a rematch.
    /// - [`PairingError::UnknownPlayer`] if `bye` is not in `standings`.
    pub fn plan_round(
        &self,
        standings: &[StandingEntry],
        history: &MatchHistory,
        bye: Option<PlayerId>,
    ) -> Result<RoundPairing, PairingError> {
        if let Some(id) = bye {
            if !standings.iter().any(|entry| entry.player_id == id) {
                return Err(PairingError::UnknownPlayer(id));
            }
        }

        let ranked: Vec<PlayerId> = standings
            .iter()
            .map(|entry| entry.player_id)
            .filter(|&id| Some(id) != bye)
            .collect();

        let (top, bottom) = split_groups(&ranked)?;
        trace!(?top, ?bottom, "groups");

        let top_pairs = resolve_rematches(Group::Top, top, history, &self.config)?;
        let bottom_pairs = resolve_rematches(Group::Bottom, bottom, history, &self.config)?;

        assemble(&top_pairs, &bottom_pairs, standings, bye)
    }
}

#[cfg(test)]
mod pairer_tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::store::InMemoryTournament;

    fn table(n: PlayerId) -> Vec<StandingEntry> {
        (1..=n)
            .map(|id| StandingEntry::new(id, format!("player {id}"), 0, 0))
            .collect()
    }

    #[test]
    fn plan_pairs_neighbours_without_history() {
        let pairer = SwissPairer::default();
        let round = pairer.plan_round(&table(8), &MatchHistory::new(), None).unwrap();
        let ids: Vec<_> = round.iter().map(|p| p.ids()).collect();
        assert_eq!(ids, vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
        assert_eq!(round.bye, None);
    }

    #[test]
    fn plan_skips_the_bye_player() {
        let pairer = SwissPairer::default();
        let round = pairer.plan_round(&table(7), &MatchHistory::new(), Some(3)).unwrap();
        assert_eq!(round.len(), 3);
        assert!(!round.player_ids().contains(&3));
        assert_eq!(round.bye.map(|p| p.id), Some(3));
    }

    #[test]
    fn plan_is_idempotent() {
        let pairer = SwissPairer::default();
        let standings = table(10);
        let history: MatchHistory = [(1, 2), (3, 4), (7, 8)].into_iter().collect();
        let first = pairer.plan_round(&standings, &history, None).unwrap();
        let second = pairer.plan_round(&standings, &history, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plan_rejects_unknown_bye() {
        let pairer = SwissPairer::default();
        let result = pairer.plan_round(&table(5), &MatchHistory::new(), Some(9));
        assert!(matches!(result, Err(PairingError::UnknownPlayer(9))));
    }

    #[test]
    fn too_few_players_is_an_error() {
        let pairer = SwissPairer::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = InMemoryTournament::new();
        store.register_player("Lonely");
        let result = pairer.compute_next_round_pairing(&mut store, &mut rng);
        assert!(matches!(result, Err(PairingError::InvalidPlayerCount(1))));
        assert!(store.matches().is_empty());
    }

    #[test]
    fn odd_round_posts_exactly_one_bye() {
        let pairer = SwissPairer::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut store = InMemoryTournament::new();
        for name in ["A", "B", "C"] {
            store.register_player(name);
        }
        let round = pairer.compute_next_round_pairing(&mut store, &mut rng).unwrap();
        assert_eq!(round.len(), 1);

        let bye = round.bye.clone().unwrap().id;
        let history = store.history().unwrap();
        assert!(history.has_had_bye(bye));
        assert_eq!(history.num_played(), 0);

        let paired: HashSet<_> = round.player_ids().into_iter().collect();
        assert_eq!(paired.len(), 2);
        assert!(!paired.contains(&bye));
    }

    #[test]
    fn failed_round_does_not_post_the_bye() {
        let pairer = SwissPairer::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = InMemoryTournament::new();
        for name in ["A", "B", "C"] {
            store.register_player(name);
        }
        // every possible pair already met
        store.report_match(1, 2).unwrap();
        store.report_match(1, 3).unwrap();
        store.report_match(2, 3).unwrap();
        let before = store.matches().len();

        let result = pairer.compute_next_round_pairing(&mut store, &mut rng);
        assert!(result.is_err());
        assert_eq!(store.matches().len(), before);
    }
}
