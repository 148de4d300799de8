//! Registration ledger backed by a CSV file
//!
//! The ledger is a single append-only CSV file with a fixed header row.
//! Every mutation takes the store-wide lock and rewrites the file through a
//! sibling temp file, so concurrent completions serialize cleanly and a
//! crash mid-write never leaves a half-written ledger behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::models::RegistrationRecord;
use crate::utils::errors::{StoreError, StoreResult};

/// Ledger column names, in row order
pub const COLUMNS: [&str; 6] = [
    "timestamp",
    "kind",
    "registrant",
    "category",
    "partner1",
    "partner2",
];

/// Append-only store for completed registrations
#[derive(Debug, Clone)]
pub struct RegistrationStore {
    path: PathBuf,
    // One writer at a time; reads inside a mutation see the latest state
    lock: Arc<Mutex<()>>,
}

impl RegistrationStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger with its header row if it does not exist yet
    ///
    /// Safe to call on every startup; an existing file is left untouched
    /// whatever it contains.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let _guard = self.lock.lock().await;

        match fs::metadata(&self.path).await {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        }

        self.write_all(&[]).await?;
        info!(path = %self.path.display(), "Created registration ledger");
        Ok(())
    }

    /// Append one completed registration
    ///
    /// The whole ledger is read, the row added, and the file replaced
    /// atomically. An unreadable or malformed ledger is treated as empty so
    /// a damaged file can never block new registrations; the damage is
    /// logged and the old content is overwritten.
    pub async fn append(&self, record: &RegistrationRecord) -> StoreResult<()> {
        let _guard = self.lock.lock().await;

        let mut records = match self.read_all().await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ledger unreadable, starting a fresh one"
                );
                Vec::new()
            }
        };

        records.push(record.clone());
        self.write_all(&records).await?;
        debug!(path = %self.path.display(), rows = records.len(), "Ledger row appended");
        Ok(())
    }

    /// Read every registration in the ledger
    ///
    /// Unlike [`append`](Self::append), readers fail on a missing or
    /// malformed file instead of papering over it.
    pub async fn load(&self) -> StoreResult<Vec<RegistrationRecord>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    /// Number of registrations currently in the ledger
    pub async fn count(&self) -> StoreResult<usize> {
        Ok(self.load().await?.len())
    }

    async fn read_all(&self) -> StoreResult<Vec<RegistrationRecord>> {
        let bytes = fs::read(&self.path).await.map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());

        let headers = reader.headers().map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        if !headers.iter().eq(COLUMNS) {
            return Err(StoreError::Malformed {
                path: self.path.clone(),
                detail: format!("unexpected header row: {:?}", headers),
            });
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: RegistrationRecord = row.map_err(|e| StoreError::Malformed {
                path: self.path.clone(),
                detail: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    async fn write_all(&self, records: &[RegistrationRecord]) -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(COLUMNS)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| StoreError::Encode(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes).await.map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            });
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
