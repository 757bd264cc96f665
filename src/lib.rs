//! # Swiss Pairing
//!
//! A Rust crate computing the pairings of successive rounds of a Swiss-system tournament.
//!
//! Across the whole event it maintains two invariants:
//! - players meet opponents with the closest possible win record
//! - no two players ever face each other twice
//!
//! It provides:
//! - The pairing engine ([`SwissPairer`](crate::pairer::SwissPairer))
//! - The [`TournamentStore`](crate::store::TournamentStore) trait, through which the engine reads
//!   standings and history and posts byes
//! - An in-memory store, [`InMemoryTournament`](crate::store::InMemoryTournament)
//!
//! # Documentation Overview
//!
//! - For the pairing steps and their order, see the [`pairer`] module.
//! - For odd attendance, see [`bye_selector`].
//! - For the top/bottom split of the standings, see [`group_splitter`].
//! - For rematch avoidance, see [`rematch_resolver`].
//! - For engine settings (swap limit, fallback search, file logging), see
//!   [`Configuration`](crate::configuration::Configuration).
//!
//! # Usage Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use swiss_pairing::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut tournament = InMemoryTournament::new();
//!     for name in ["Bruno Walton", "Boots O'Neal", "Cathy Burton", "Diane Grant", "Giulio G"] {
//!         tournament.register_player(name);
//!     }
//!
//!     let pairer = SwissPairer::new(Configuration::new());
//!     let mut rng = StdRng::seed_from_u64(2015);
//!
//!     // five players: two matches and one bye, already posted to the store
//!     let round = pairer.compute_next_round_pairing(&mut tournament, &mut rng)?;
//!     assert_eq!(round.len(), 2);
//!
//!     for pairing in &round {
//!         println!("{pairing}");
//!         tournament.report_match(pairing.id_a, pairing.id_b)?;
//!     }
//!
//!     for entry in tournament.player_standings() {
//!         println!("{}: {} win(s) in {} match(es)", entry.name, entry.wins, entry.matches);
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub mod bye_selector;
pub mod configuration;
pub mod error;
pub mod group_splitter;
pub mod history;
mod logger;
pub mod pairer;
pub mod pairing;
pub mod player;
pub mod rematch_resolver;
pub mod store;

pub use anyhow;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use swiss_pairing::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`SwissPairer`](crate::pairer::SwissPairer)
/// - [`TournamentStore`](crate::store::TournamentStore) and
///   [`InMemoryTournament`](crate::store::InMemoryTournament)
/// - the data types exchanged with the engine
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::error::PairingError;
    pub use crate::history::MatchHistory;
    pub use crate::pairer::SwissPairer;
    pub use crate::pairing::{Pairing, RoundPairing};
    pub use crate::player::{PlayedPair, Player, PlayerId, StandingEntry};
    pub use crate::store::{InMemoryTournament, TournamentStore};
}
