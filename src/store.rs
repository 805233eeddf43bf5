//! Persistence collaborator seam.
//!
//! The engine neither performs network calls nor knows endpoint
//! addresses; it exchanges whole [`CharacterDocument`] snapshots with a
//! collaborator behind the `CharacterStore` trait. A non-success result
//! is reported upward as-is: no retry, no local recovery, and transport
//! failures are not rules errors.

use crate::sheet::CharacterDocument;
use thiserror::Error;

/// Errors from the persistence collaborator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The collaborator could not be reached.
    #[error("persistence service unreachable: {0}")]
    Unreachable(String),

    /// The collaborator answered with a non-success response.
    #[error("persistence service rejected the request: {0}")]
    Rejected(String),

    /// The exchanged document could not be encoded or decoded.
    #[error("malformed character document: {0}")]
    Malformed(String),
}

/// A collaborator that can load and save character snapshots.
///
/// Both operations are simple request/response exchanges over whole
/// documents; there are no partial or streaming semantics.
pub trait CharacterStore {
    /// Fetch the stored snapshot, if one exists.
    fn load(&mut self) -> Result<Option<CharacterDocument>, StoreError>;

    /// Persist a snapshot.
    fn save(&mut self, document: &CharacterDocument) -> Result<(), StoreError>;
}

/// An in-memory store holding one serialized snapshot.
///
/// Round-trips documents through their JSON wire form, so it exercises
/// the same shape a remote collaborator would see. Used by tests and
/// demos.
///
/// # Examples
///
/// ```rust
/// use charsheet::store::{CharacterStore, MemoryStore};
/// use charsheet::CharacterSheet;
///
/// let mut store = MemoryStore::new();
/// assert!(store.load().unwrap().is_none());
///
/// let sheet = CharacterSheet::new();
/// store.save(&sheet.snapshot()).unwrap();
/// assert!(store.load().unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&mut self) -> Result<Option<CharacterDocument>, StoreError> {
        match &self.saved {
            None => Ok(None),
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|err| StoreError::Malformed(err.to_string())),
        }
    }

    fn save(&mut self, document: &CharacterDocument) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(document).map_err(|err| StoreError::Malformed(err.to_string()))?;
        self.saved = Some(json);
        Ok(())
    }
}
