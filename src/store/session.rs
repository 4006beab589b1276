use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::SortOrder;

pub const SESSION_FILE: &str = "session.json";

/// UI state carried between invocations: the pending edit target and the
/// sort-direction toggle. Unlike the task blob this is not authoritative
/// data, so a missing or malformed file resets to defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<u64>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Session {
    pub fn load(root: &Path) -> Self {
        fs::read_to_string(root.join(SESSION_FILE))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        fs::create_dir_all(root)?;
        fs::write(root.join(SESSION_FILE), serde_json::to_string(self)?)?;
        Ok(())
    }
}
