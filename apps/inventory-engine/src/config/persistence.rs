//! Store persistence configuration.

use serde::{Deserialize, Serialize};

/// Persistence configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// JSON seed file loaded into the store at startup.
    #[serde(default)]
    pub seed_path: Option<String>,
}
