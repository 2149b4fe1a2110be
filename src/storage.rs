//! Durable key-value snapshot storage backing the conversation log and the
//! translation cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the conversation log snapshot.
pub const CONVERSATION_HISTORY_KEY: &str = "conversation_history";

/// Storage key for the translation cache snapshot.
pub const TRANSLATION_CACHE_KEY: &str = "translation_cache";

/// Whole-value JSON snapshot store: one file per key under a data directory.
///
/// Every save overwrites the key's previous snapshot wholesale. Loads are
/// forgiving: a missing or unparseable snapshot degrades to the default value
/// so persisted state can never wedge startup.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Opens (and creates if needed) the store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the snapshot for `key`, or the default when the snapshot is
    /// missing or corrupt. Corruption is logged and swallowed.
    pub fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(key, error = %err, "failed to read snapshot; starting empty");
                }
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "corrupt snapshot; starting empty");
                T::default()
            }
        }
    }

    /// Overwrites the snapshot for `key` with `value`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(self.path_for(key), json)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
