//! Cache administration trait definition.

use crate::dto::CacheRegionSummary;
use catalog_core::{CatalogError, CatalogResult, Interface};
use std::fmt;
use std::str::FromStr;

/// Body returned for a command that is not recognized.
pub const UNKNOWN_COMMAND_BODY: &str = "UNKNOWN COMMAND";

/// Commands accepted by [`CacheAdmin::handle_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCommand {
    /// Clear every registered region.
    Reset,
}

impl CacheCommand {
    /// The keyword for this command, also returned as the success body.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "RESET",
        }
    }
}

impl fmt::Display for CacheCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheCommand {
    type Err = CatalogError;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESET" => Ok(Self::Reset),
            other => Err(CatalogError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// Operator control over the cache registry.
pub trait CacheAdmin: Interface + Send + Sync {
    /// Executes a command and returns the success body.
    ///
    /// Fails with `UnrecognizedCommand`, without side effects, for anything
    /// other than a known keyword.
    fn handle_command(&self, command: &str) -> CatalogResult<&'static str>;

    /// Lists registered regions with their entry counts.
    fn regions(&self) -> Vec<CacheRegionSummary>;
}
