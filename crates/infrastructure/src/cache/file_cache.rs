//! File-backed nutrition cache
//!
//! Whole-file JSON persistence: the full entry map is loaded once at
//! startup and rewritten after every insert. Entry counts stay in the
//! hundreds (one per distinct food name), so rewriting the file is cheaper
//! than carrying a database for it.

use std::{collections::HashMap, fs, path::PathBuf};

use application::ports::NutritionCachePort;
use domain::NutrientVector;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::generate_cache_key;

/// Persistent food-nutrition cache backed by a single JSON file.
///
/// Load failures (missing, unreadable or corrupt file) degrade to an empty
/// cache; persistence failures are logged and swallowed. The cache is an
/// accelerator, never a correctness dependency.
#[derive(Debug)]
pub struct FileNutritionCache {
    path: PathBuf,
    entries: RwLock<HashMap<String, NutrientVector>>,
}

impl FileNutritionCache {
    /// Open the cache at `path`, loading any existing entries
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, NutrientVector>>(&raw) {
                Ok(entries) => {
                    info!(
                        path = %path.display(),
                        entry_count = entries.len(),
                        "Nutrition cache loaded"
                    );
                    entries
                },
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Nutrition cache file corrupt, starting empty"
                    );
                    HashMap::new()
                },
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No nutrition cache file, starting empty");
                HashMap::new()
            },
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Nutrition cache file unreadable, starting empty"
                );
                HashMap::new()
            },
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Rewrite the whole cache file from the given snapshot
    fn persist(&self, entries: &HashMap<String, NutrientVector>) {
        let serialized = match serde_json::to_string(entries) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(error = %e, "Failed to serialize nutrition cache, skipping persist");
                return;
            },
        };
        if let Err(e) = fs::write(&self.path, serialized) {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist nutrition cache"
            );
        }
    }
}

impl NutritionCachePort for FileNutritionCache {
    fn key_for(&self, food: &str) -> String {
        generate_cache_key("food", &[food.trim()])
    }

    fn get(&self, key: &str) -> Option<NutrientVector> {
        self.entries.read().get(key).copied()
    }

    fn put(&self, key: &str, vector: NutrientVector) {
        let mut guard = self.entries.write();
        guard.insert(key.to_string(), vector);
        self.persist(&guard);
    }

    fn put_many(&self, entries: &[(String, NutrientVector)]) {
        if entries.is_empty() {
            return;
        }
        let mut guard = self.entries.write();
        for (key, vector) in entries {
            guard.insert(key.clone(), *vector);
        }
        self.persist(&guard);
        debug!(
            added = entries.len(),
            total = guard.len(),
            "Nutrition cache persisted"
        );
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
