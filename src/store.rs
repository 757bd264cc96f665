//! Collaborator interface the engine reads standings and history from, and posts byes to.
//!
//! The engine never owns tournament state: anything implementing [`TournamentStore`] can back
//! it, from a database to the in-memory [`InMemoryTournament`] provided here.

use std::collections::HashMap;

use anyhow::{bail, Context};
use tracing::{debug, info};

use crate::{
    history::MatchHistory,
    player::{PlayedPair, Player, PlayerId, StandingEntry},
};

/// Source of standings and match history, and sink for results.
pub trait TournamentStore {
    /// Standings ordered by descending wins, ties keeping a stable prior order.
    fn standings(&self) -> anyhow::Result<Vec<StandingEntry>>;

    /// Real matches already played and byes already given.
    fn history(&self) -> anyhow::Result<MatchHistory>;

    /// Credits `player` with a win and a match, without adding any played pair.
    fn record_bye(&mut self, player: PlayerId) -> anyhow::Result<()>;

    /// Records a real match and its result, adding `{winner, loser}` to the history.
    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> anyhow::Result<()>;
}

/// One entry of the match log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Winner of the match. For a bye, the player sitting out.
    pub winner: PlayerId,
    /// Loser of the match. For a bye, the player sitting out.
    pub loser: PlayerId,
    /// Round of the match, counted from the winner's side.
    pub round: u32,
    /// True for a synthetic win given to a player sitting out.
    pub bye: bool,
}

/// A whole tournament kept in memory: registered players and their match log.
#[derive(Debug)]
pub struct InMemoryTournament {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: PlayerId,
}

impl InMemoryTournament {
    /// An empty tournament.
    pub fn new() -> Self {
        Self {
            players: vec![],
            matches: vec![],
            next_id: 1,
        }
    }

    /// Registers a new player and returns their id. Names need not be unique.
    pub fn register_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        let player = Player::new(id, name);
        debug!("registered {player}");
        self.players.push(player);
        id
    }

    /// Number of registered players.
    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Registered players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Removes every match record, keeping the players.
    pub fn delete_matches(&mut self) {
        self.matches.clear();
    }

    /// Removes every player, and every match with them.
    pub fn delete_players(&mut self) {
        self.matches.clear();
        self.players.clear();
    }

    /// The raw match log, byes included.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Current standings: wins descending, registration order among equal wins.
    pub fn player_standings(&self) -> Vec<StandingEntry> {
        let mut table: Vec<StandingEntry> = self
            .players
            .iter()
            .map(|player| StandingEntry::new(player.id, player.name.clone(), 0, 0))
            .collect();
        let index: HashMap<PlayerId, usize> = table
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.player_id, i))
            .collect();

        for record in &self.matches {
            if let Some(&i) = index.get(&record.winner) {
                table[i].wins += 1;
                table[i].matches += 1;
            }
            if !record.bye {
                if let Some(&i) = index.get(&record.loser) {
                    table[i].matches += 1;
                }
            }
        }

        // stable sort: registration order breaks ties
        table.sort_by(|a, b| b.wins.cmp(&a.wins));
        table
    }

    /// Records a real match won by `winner` against `loser`.
    ///
    /// # Errors
    /// If either player is unknown, or if both ids are the same.
    pub fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> anyhow::Result<()> {
        if winner == loser {
            bail!("player #{winner} cannot play against themself");
        }
        self.ensure_registered(winner)?;
        self.ensure_registered(loser)?;
        let round = self.matches_played(winner) + 1;
        info!("round {round}: #{winner} beat #{loser}");
        self.matches.push(MatchRecord {
            winner,
            loser,
            round,
            bye: false,
        });
        Ok(())
    }

    /// Records the automatic win of `player`, who sits out the round.
    ///
    /// # Errors
    /// If the player is unknown.
    pub fn report_bye(&mut self, player: PlayerId) -> anyhow::Result<()> {
        self.ensure_registered(player)?;
        let round = self.matches_played(player) + 1;
        info!("round {round}: #{player} skips the round");
        self.matches.push(MatchRecord {
            winner: player,
            loser: player,
            round,
            bye: true,
        });
        Ok(())
    }

    /// Unordered real pairs that were played more than once. Empty in a healthy tournament.
    pub fn rematches(&self) -> Vec<PlayedPair> {
        let mut counter: HashMap<PlayedPair, usize> = HashMap::new();
        for record in self.matches.iter().filter(|record| !record.bye) {
            if let Some(pair) = PlayedPair::new(record.winner, record.loser) {
                *counter.entry(pair).or_default() += 1;
            }
        }
        let mut repeated: Vec<PlayedPair> = counter
            .into_iter()
            .filter(|(_pair, count)| *count > 1)
            .map(|(pair, _count)| pair)
            .collect();
        repeated.sort_unstable();
        repeated
    }

    fn matches_played(&self, player: PlayerId) -> u32 {
        self.matches
            .iter()
            .filter(|record| record.winner == player || record.loser == player)
            .count() as u32
    }

    fn ensure_registered(&self, player: PlayerId) -> anyhow::Result<()> {
        self.players
            .iter()
            .any(|p| p.id == player)
            .then_some(())
            .with_context(|| format!("player #{player} is not registered"))
    }
}

impl Default for InMemoryTournament {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentStore for InMemoryTournament {
    fn standings(&self) -> anyhow::Result<Vec<StandingEntry>> {
        Ok(self.player_standings())
    }

    fn history(&self) -> anyhow::Result<MatchHistory> {
        let mut history = MatchHistory::new();
        for record in &self.matches {
            if record.bye {
                history.record_bye(record.winner);
            } else {
                history.record_match(record.winner, record.loser);
            }
        }
        Ok(history)
    }

    fn record_bye(&mut self, player: PlayerId) -> anyhow::Result<()> {
        self.report_bye(player)
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> anyhow::Result<()> {
        self.report_match(winner, loser)
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    fn five_players() -> (InMemoryTournament, Vec<PlayerId>) {
        let mut tournament = InMemoryTournament::new();
        let ids: Vec<PlayerId> = [
            "Bruno Walton",
            "Boots O'Neal",
            "Cathy Burton",
            "Diane Grant",
            "Giulio G",
        ]
        .into_iter()
        .map(|name| tournament.register_player(name))
        .collect();
        (tournament, ids)
    }

    #[test]
    fn new_players_have_empty_standings() {
        let (tournament, ids) = five_players();
        assert_eq!(tournament.count_players(), 5);
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let names: Vec<&str> = tournament.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names[0], "Bruno Walton");
        assert_eq!(names[4], "Giulio G");
        for entry in tournament.player_standings() {
            assert_eq!((entry.wins, entry.matches), (0, 0));
        }
    }

    #[test]
    fn byes_count_as_wins_but_not_as_pairs() {
        let (mut tournament, ids) = five_players();
        tournament.report_match(ids[0], ids[1]).unwrap();
        tournament.report_match(ids[2], ids[3]).unwrap();
        tournament.report_bye(ids[4]).unwrap();

        let standings = tournament.player_standings();
        let order: Vec<PlayerId> = standings.iter().map(|e| e.player_id).collect();
        assert_eq!(order, vec![1, 3, 5, 2, 4]);
        for entry in &standings {
            assert_eq!(entry.matches, 1);
        }

        let history = tournament.history().unwrap();
        assert_eq!(history.num_played(), 2);
        assert!(history.has_had_bye(5));
        assert!(history.has_played(2, 1));
    }

    #[test]
    fn rounds_follow_the_winner_match_count() {
        let (mut tournament, ids) = five_players();
        tournament.report_match(ids[0], ids[1]).unwrap();
        tournament.report_bye(ids[0]).unwrap();
        let rounds: Vec<u32> = tournament.matches().iter().map(|m| m.round).collect();
        assert_eq!(rounds, vec![1, 2]);
    }

    #[test]
    fn invalid_reports_are_rejected() {
        let (mut tournament, _ids) = five_players();
        assert!(tournament.report_match(1, 1).is_err());
        assert!(tournament.report_match(1, 42).is_err());
        assert!(tournament.report_bye(42).is_err());
        assert!(tournament.matches().is_empty());
    }

    #[test]
    fn rematches_are_detected() {
        let (mut tournament, _ids) = five_players();
        tournament.report_match(1, 2).unwrap();
        tournament.report_match(2, 1).unwrap();
        tournament.report_match(3, 4).unwrap();
        assert_eq!(tournament.rematches(), vec![PlayedPair::new(1, 2).unwrap()]);
    }

    #[test]
    fn deleting_players_also_deletes_matches() {
        let (mut tournament, _ids) = five_players();
        tournament.report_match(1, 2).unwrap();
        tournament.delete_matches();
        assert!(tournament.matches().is_empty());
        assert_eq!(tournament.count_players(), 5);

        tournament.report_match(1, 2).unwrap();
        tournament.delete_players();
        assert_eq!(tournament.count_players(), 0);
        assert!(tournament.players().is_empty());
        assert!(tournament.matches().is_empty());
    }
}
