use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::models::{
    AccountInterestRecord, ContactRecord, ContactStatus, InterestStatus, NewAccountInterest,
    NewContact,
};

/// Submission categories, each persisted as an independent JSON array file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AccountInterest,
    Contact,
}

impl Category {
    /// File name of the category's collection under the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::AccountInterest => "account_interests.json",
            Category::Contact => "contacts.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::AccountInterest => write!(f, "account interest"),
            Category::Contact => write!(f, "contact"),
        }
    }
}

/// Errors surfaced by the submission store.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (permissions, disk, ...).
    Io(std::io::Error),
    /// The persisted collection is not valid JSON for its record type.
    Corrupt {
        category: Category,
        source: serde_json::Error,
    },
    /// A record failed to serialize before being written back.
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {}", e),
            StoreError::Corrupt { category, source } => {
                write!(f, "corrupt {} collection: {}", category, source)
            }
            StoreError::Encode(e) => write!(f, "failed to encode record: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Corrupt { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Identity sequence for one category.
///
/// Ids stay wall-clock shaped (milliseconds since epoch) but are forced
/// strictly above both the last id issued in-process and the largest id
/// already persisted, so two submissions landing in the same millisecond
/// never collide.
#[derive(Debug, Default)]
struct IdSequence {
    last: i64,
}

impl IdSequence {
    fn next(&mut self, persisted_max: i64) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1).max(persisted_max + 1);
        self.last
    }
}

/// Append-only flat-file persistence for validated submissions.
///
/// One JSON array file per category, created lazily on first append. Every
/// operation is a full read-modify-write of the file; there is no in-memory
/// cache. A per-category mutex serializes concurrent appends so a
/// read-modify-write cycle never loses a concurrently written record.
pub struct SubmissionStore {
    data_dir: PathBuf,
    interests: Mutex<IdSequence>,
    contacts: Mutex<IdSequence>,
}

impl SubmissionStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;
        Ok(Self {
            data_dir,
            interests: Mutex::new(IdSequence::default()),
            contacts: Mutex::new(IdSequence::default()),
        })
    }

    fn collection_path(&self, category: Category) -> PathBuf {
        self.data_dir.join(category.file_name())
    }

    /// Returns all account-interest records in file (submission) order.
    pub async fn account_interests(&self) -> Result<Vec<AccountInterestRecord>, StoreError> {
        read_collection(&self.collection_path(Category::AccountInterest), Category::AccountInterest)
            .await
    }

    /// Returns all contact records in file (submission) order.
    pub async fn contacts(&self) -> Result<Vec<ContactRecord>, StoreError> {
        read_collection(&self.collection_path(Category::Contact), Category::Contact).await
    }

    /// Appends a validated account-interest submission and returns the stored
    /// record with its assigned id.
    pub async fn append_account_interest(
        &self,
        submission: NewAccountInterest,
    ) -> Result<AccountInterestRecord, StoreError> {
        self.append(Category::AccountInterest, &self.interests, |id| {
            AccountInterestRecord {
                id,
                full_name: submission.full_name,
                email: submission.email,
                phone: submission.phone,
                primary_doc: submission.primary_doc,
                timestamp: timestamp_or_now(submission.timestamp),
                status: InterestStatus::Pending,
            }
        })
        .await
    }

    /// Appends a validated contact submission and returns the stored record
    /// with its assigned id.
    pub async fn append_contact(&self, submission: NewContact) -> Result<ContactRecord, StoreError> {
        self.append(Category::Contact, &self.contacts, |id| ContactRecord {
            id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            query_type: submission.query_type,
            message: submission.message,
            timestamp: timestamp_or_now(submission.timestamp),
            status: ContactStatus::New,
        })
        .await
    }

    /// Shared append cycle: lock the category, read the whole collection,
    /// assign an id above everything seen so far, push, rewrite the file.
    async fn append<T, F>(
        &self,
        category: Category,
        sequence: &Mutex<IdSequence>,
        build: F,
    ) -> Result<T, StoreError>
    where
        T: Serialize,
        F: FnOnce(i64) -> T,
    {
        let mut sequence = sequence.lock().await;

        let path = self.collection_path(category);
        let mut records: Vec<Value> = read_collection(&path, category).await?;
        let persisted_max = records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0);

        let record = build(sequence.next(persisted_max));
        records.push(serde_json::to_value(&record).map_err(StoreError::Encode)?);

        // Write-then-rename so a lock-free reader never sees a truncated file.
        let encoded = serde_json::to_vec_pretty(&records).map_err(StoreError::Encode)?;
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, encoded).await?;
        tokio::fs::rename(&staging, &path).await?;

        Ok(record)
    }
}

fn timestamp_or_now(timestamp: Option<String>) -> String {
    timestamp.unwrap_or_else(|| Utc::now().to_rfc3339())
}

/// Reads a category's full collection; a missing file is an empty collection.
async fn read_collection<T: DeserializeOwned>(
    path: &Path,
    category: Category,
) -> Result<Vec<T>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt { category, source })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::Io(e)),
    }
}
