//! Fetch gate
//!
//! Decides whether suggestion endpoints may be contacted from the running
//! context. There is no relay: a context without direct access abstains.

use crate::config::FetchMode;

/// How the source chain is allowed to reach the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRoute {
    /// Requests go straight to the third-party endpoint
    Direct,
    /// No request is issued; every source yields "no data"
    Abstain,
}

/// Network permission for the suggestion subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGate {
    route: FetchRoute,
}

impl FetchGate {
    pub fn new(route: FetchRoute) -> Self {
        Self { route }
    }

    /// Build the gate from configuration
    ///
    /// `offline` is the command-line override and always wins.
    pub fn from_config(mode: FetchMode, offline: bool) -> Self {
        let route = match (mode, offline) {
            (_, true) | (FetchMode::Disabled, _) => FetchRoute::Abstain,
            (FetchMode::Direct, false) => FetchRoute::Direct,
        };
        Self { route }
    }

    pub fn route(&self) -> FetchRoute {
        self.route
    }

    pub fn can_fetch_directly(&self) -> bool {
        self.route == FetchRoute::Direct
    }
}
