//! Engine configuration.

use ndb_types::{EngineInfo, MAX_DIMS};

/// Engine limits for a bridge session.
///
/// A fixed snapshot. Hosts whose engine registers user types while running
/// should implement [`EngineInfo`] on their engine handle instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BridgeConfig {
    /// Maximum number of axes one index may address.
    pub max_dims: usize,
    /// Number of registered user-defined element types.
    pub user_type_count: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            max_dims: MAX_DIMS,
            user_type_count: 0,
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_dims(mut self, max_dims: usize) -> Self {
        self.max_dims = max_dims;
        self
    }

    #[must_use]
    pub fn with_user_type_count(mut self, count: usize) -> Self {
        self.user_type_count = count;
        self
    }
}

impl EngineInfo for BridgeConfig {
    fn max_dims(&self) -> usize {
        self.max_dims
    }

    fn user_type_count(&self) -> usize {
        self.user_type_count
    }
}
