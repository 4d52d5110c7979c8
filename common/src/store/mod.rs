//! Access to the remote student collection.
//!
//! `RecordStore` is the seam between the view-models and the transport. The
//! browser build implements it over HTTP; tests implement it in memory.
//!
//! ## Id allocation
//!
//! The collection does not allocate ids, so [`RecordStore::create`] reads
//! the whole collection, takes the highest numeric id and submits the next
//! one. Nothing makes that read-then-write atomic: two clients creating at
//! the same time can pick the same id, and the second POST is then rejected
//! (or, depending on the server, overwrites). Moving allocation to the
//! server is the proper fix; until then this is a known limitation.

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::model::student::{Student, StudentDraft};
use crate::requests::CreateStudentRequest;

/// Failure of a remote store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The record does not exist (404, or an empty body where one was expected).
    #[error("record not found")]
    NotFound,
    /// The server answered with a non-success status other than 404.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never produced a response: network down, timeout, abort.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl StoreError {
    /// The request was aborted because its deadline of `timeout_ms` passed,
    /// whether the headers or the body were still outstanding.
    pub fn timed_out(timeout_ms: u32) -> Self {
        StoreError::Transport(format!("request timed out after {} ms", timeout_ms))
    }

    /// Whether the record was missing, as opposed to unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }

    /// The HTTP status behind the error.
    ///
    /// # Returns
    /// `Some(404)` for `NotFound`, the code for `Status`, and `None` when no
    /// response was received or its body was unreadable.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::NotFound => Some(404),
            StoreError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// The remote student collection.
///
/// Futures are not required to be `Send`: the browser runs them on a single
/// thread.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// All records, in server order.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    /// The record at `id`; [`StoreError::NotFound`] when there is none.
    async fn fetch_one(&self, id: &str) -> Result<Student, StoreError>;

    /// Submits a record whose id has already been chosen.
    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student, StoreError>;

    /// Replaces all editable fields of the record at `id`.
    async fn update(&self, id: &str, draft: &StudentDraft) -> Result<Student, StoreError>;

    /// Removes the record at `id`. `Ok` means the server acknowledged it.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Creates a record, allocating its id from the current collection.
    async fn create(&self, draft: &StudentDraft) -> Result<Student, StoreError> {
        let existing = self.list().await?;
        let id = next_student_id(&existing);
        info!("Allocated student id {} from {} existing records", id, existing.len());
        self.insert(&CreateStudentRequest::new(id, draft.clone())).await
    }
}

/// Body of `GET /students/{id}`.
///
/// Besides a 404, servers signal a missing record with `null`, `{}` or a
/// record without an id; every field is optional so those still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchedStudent {
    pub id: String,
    #[serde(flatten)]
    pub fields: StudentDraft,
}

/// Turns a decoded single-record body into a [`Student`].
///
/// # Arguments
/// * `body` - the decoded body, `None` for a JSON `null`.
///
/// # Returns
/// The record, or [`StoreError::NotFound`] when the body carries no id.
pub fn found_student(body: Option<FetchedStudent>) -> Result<Student, StoreError> {
    match body {
        Some(fetched) if !fetched.id.trim().is_empty() => {
            Ok(fetched.fields.with_id(fetched.id))
        }
        _ => Err(StoreError::NotFound),
    }
}

/// One past the highest numeric id in `existing`, or `"1"` for an empty
/// collection. Ids without a numeric prefix count as zero.
pub fn next_student_id(existing: &[Student]) -> String {
    let max = existing
        .iter()
        .map(|student| leading_integer(&student.id).unwrap_or(0))
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}

/// Parses the integer at the start of `text`: leading whitespace, an
/// optional sign, then as many ASCII digits as follow. Returns `None` when
/// no digit is found. Values beyond `i64` saturate.
pub fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
