//! Config for the pairing engine behaviors
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional. Boolean flags are case-insensitive, set them to `"true"` to enable.
//!
//! - `SWISS_MAX_SWAP_ITERATIONS`: Swaps allowed per group before giving up on a rematch (default: `1000`)
//! - `SWISS_EXHAUSTIVE_FALLBACK`: Search every matching of a group when swapping fails (default: `false`)
//! - `SWISS_MAX_SEARCH_NODES`: Steps allowed to that search before it gives up (default: `100000`)
//! - `SWISS_LOG`: Enable logging to a file (default: `false`)

/// Default bound on rematch-repair swaps per group.
pub const DEFAULT_MAX_SWAP_ITERATIONS: usize = 1000;

/// Default bound on the nodes visited by the exhaustive fallback, per group.
pub const DEFAULT_MAX_SEARCH_NODES: usize = 100_000;

/// Configuration for the pairing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) max_swap_iterations: usize,
    pub(crate) exhaustive_fallback: bool,
    pub(crate) max_search_nodes: usize,
    pub(crate) log: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - A group gets at most [`DEFAULT_MAX_SWAP_ITERATIONS`] swaps to get rid of its rematches.
    /// - No exhaustive search is attempted when swapping fails. Once enabled, it visits at most
    ///   [`DEFAULT_MAX_SEARCH_NODES`] nodes.
    /// - Logging to file is disabled.
    pub fn new() -> Self {
        Self {
            max_swap_iterations: DEFAULT_MAX_SWAP_ITERATIONS,
            exhaustive_fallback: false,
            max_search_nodes: DEFAULT_MAX_SEARCH_NODES,
            log: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `SWISS_MAX_SWAP_ITERATIONS`: maximum number of swaps per group (default: `1000`)
    /// - `SWISS_EXHAUSTIVE_FALLBACK`: if set to `"true"`, enables the exhaustive fallback (default: `false`)
    /// - `SWISS_MAX_SEARCH_NODES`: maximum number of nodes the fallback visits per group (default: `100000`)
    /// - `SWISS_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    ///
    /// Any other value (including unset) will result in using the default value for each field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_usize(var: &str, default: usize) -> usize {
            std::env::var(var)
                .ok()
                .and_then(|val| val.trim().parse().ok())
                .unwrap_or(default)
        }

        Self {
            max_swap_iterations: get_env_usize(
                "SWISS_MAX_SWAP_ITERATIONS",
                DEFAULT_MAX_SWAP_ITERATIONS,
            ),
            exhaustive_fallback: get_env_flag("SWISS_EXHAUSTIVE_FALLBACK", false),
            max_search_nodes: get_env_usize("SWISS_MAX_SEARCH_NODES", DEFAULT_MAX_SEARCH_NODES),
            log: get_env_flag("SWISS_LOG", false),
        }
    }

    /// Set the number of swaps a group may go through before the rematch is declared unresolvable.
    pub fn with_max_swap_iterations(mut self, value: usize) -> Self {
        self.max_swap_iterations = value;
        self
    }

    /// Enable or disable the exhaustive search used when swapping fails.
    ///
    /// The search still prefers the nearest-ranked opponent, but may move players further away
    /// from their rank than the swap repair would.
    pub fn with_exhaustive_fallback(mut self, value: bool) -> Self {
        self.exhaustive_fallback = value;
        self
    }

    /// Set the number of nodes the exhaustive search may visit in one group before giving up.
    pub fn with_max_search_nodes(mut self, value: usize) -> Self {
        self.max_search_nodes = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Swaps allowed per group.
    pub fn max_swap_iterations(&self) -> usize {
        self.max_swap_iterations
    }

    /// Whether the exhaustive fallback is enabled.
    pub fn exhaustive_fallback(&self) -> bool {
        self.exhaustive_fallback
    }

    /// Nodes the exhaustive search may visit per group.
    pub fn max_search_nodes(&self) -> usize {
        self.max_search_nodes
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
