//! Measurement table cache keyed by file identity.
//!
//! The table is reloaded only when the measurement file's modification
//! time changes (or after [`MeasurementCache::invalidate`]). Readers share
//! the loaded table through an [`Arc`]; the lock is held only long enough
//! to clone it, and only a reload takes the write side.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use temp_map_readings_models::MeasurementColumns;

use crate::load::{MeasurementTable, load_measurements};
use crate::ReadingsError;

struct CachedTable {
    modified: Option<SystemTime>,
    table: Arc<MeasurementTable>,
}

/// Lazily loaded, change-aware view of one measurement file.
pub struct MeasurementCache {
    path: PathBuf,
    columns: MeasurementColumns,
    current: RwLock<Option<CachedTable>>,
}

impl MeasurementCache {
    /// Creates an empty cache for the file at `path`. Nothing is read
    /// until the first [`Self::get`].
    #[must_use]
    pub const fn new(path: PathBuf, columns: MeasurementColumns) -> Self {
        Self {
            path,
            columns,
            current: RwLock::new(None),
        }
    }

    /// Returns the current table, loading or reloading it if the file has
    /// changed since the last load.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingsError`] if the file cannot be inspected or parsed.
    /// A failed reload leaves the previously cached table in place.
    pub fn get(&self) -> Result<Arc<MeasurementTable>, ReadingsError> {
        let modified = self.modified_time()?;

        {
            let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = current.as_ref()
                && cached.modified == modified
            {
                return Ok(Arc::clone(&cached.table));
            }
        }

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        // Another reader may have reloaded while we waited for the lock.
        if let Some(cached) = current.as_ref()
            && cached.modified == modified
        {
            return Ok(Arc::clone(&cached.table));
        }

        if current.is_some() {
            log::info!(
                "Measurement file {} changed, reloading",
                self.path.display()
            );
        }

        let table = Arc::new(load_measurements(&self.path, &self.columns)?);
        *current = Some(CachedTable {
            modified,
            table: Arc::clone(&table),
        });

        Ok(table)
    }

    /// Drops the cached table so the next [`Self::get`] reloads it.
    pub fn invalidate(&self) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
        log::debug!("Invalidated measurement cache for {}", self.path.display());
    }

    fn modified_time(&self) -> Result<Option<SystemTime>, ReadingsError> {
        let metadata = std::fs::metadata(&self.path).map_err(|source| ReadingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(metadata.modified().ok())
    }
}
