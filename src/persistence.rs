// ABOUTME: JSON snapshot persistence collaborator with atomic writes
// ABOUTME: SnapshotStore trait, JsonFileStore implementation, and StoreError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::state::{StateSnapshot, SNAPSHOT_VERSION};

/// Errors from the snapshot store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("Snapshot store I/O error")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// The snapshot on disk could not be (de)serialized
    #[error("Snapshot serialization failed")]
    Serialization {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// The snapshot on disk was written by an unsupported schema version
    #[error("Unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found on disk
        found: u32,
        /// Version this build supports
        supported: u32,
    },
}

/// Persistence collaborator: load and save whole snapshots
///
/// The engine is indifferent to where snapshots come from; this trait is
/// the entire persistence contract. Implementations must hand back a
/// full, consistent snapshot per `load` and persist the whole snapshot
/// per `save` - there is no partial update surface.
pub trait SnapshotStore {
    /// Load the stored snapshot, or `None` when nothing is stored yet
    ///
    /// # Errors
    /// Storage or deserialization failure, or a version mismatch.
    fn load(&self) -> Result<Option<StateSnapshot>, StoreError>;

    /// Persist the snapshot in full
    ///
    /// # Errors
    /// Storage or serialization failure.
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), StoreError>;
}

/// File-backed JSON store with atomic replace-on-save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default data path
    #[must_use]
    pub fn at_default_path() -> Option<Self> {
        default_data_path().map(Self::new)
    }

    /// Path this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<StateSnapshot>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot on disk yet");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot: StateSnapshot = serde_json::from_str(&raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file, then rename over the target, so a
        // crash mid-write never leaves a torn snapshot.
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut tmp = fs::File::create(&tmp_path)?;
            serde_json::to_writer_pretty(&mut tmp, snapshot)?;
            tmp.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        info!(path = %self.path.display(), "Snapshot saved");
        Ok(())
    }
}

/// Default snapshot path under the platform data directory
#[must_use]
pub fn default_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("makeweight").join("state.json"))
}
