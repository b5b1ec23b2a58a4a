//! In-memory store.

use parking_lot::Mutex;

use crate::{Snapshot, StateStore, StoreError};

/// Keeps the encoded snapshot in memory.
///
/// Goes through the same JSON encoding as [`JsonFileStore`](crate::JsonFileStore),
/// so a round trip through it exercises serialization.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes currently stored.
    pub fn stored_len(&self) -> usize {
        self.document.lock().as_ref().map_or(0, String::len)
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        match self.document.lock().as_deref() {
            Some(json) => Snapshot::decode(json).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = snapshot.encode(false)?;
        *self.document.lock() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.document.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamforge_test::Roster;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.stored_len(), 0);

        let Roster {
            participants,
            requirements,
        } = Roster::hackathon();
        let snapshot = Snapshot::new(participants, requirements);
        store.save(&snapshot).unwrap();

        assert!(store.stored_len() > 0);
        assert_eq!(store.load().unwrap(), Some(snapshot));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
