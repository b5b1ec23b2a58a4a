//! The persisted roster document.

use serde::{Deserialize, Serialize};
use teamforge_core::{Participant, Requirement};

use crate::StoreError;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full roster state at a point in time.
///
/// Collections are kept in registration / creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Snapshot {
    pub fn new(participants: Vec<Participant>, requirements: Vec<Requirement>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            participants,
            requirements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.requirements.is_empty()
    }

    pub(crate) fn encode(&self, pretty: bool) -> Result<String, StoreError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub(crate) fn decode(json: &str) -> Result<Self, StoreError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
