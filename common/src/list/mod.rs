//! View-model of the student list.
//!
//! Holds the locally cached copy of the collection and keeps it consistent
//! with the server across refreshes and deletes.
//!
//! Two ways to drive it:
//! - `refresh` / `request_delete`: async drivers that run a whole flow
//!   against a `RecordStore`, used by headless hosts and tests.
//! - The split steps (`begin_refresh`/`finish_refresh`,
//!   `delete_request`/`begin_delete`/`finish_delete`): for event-loop hosts
//!   such as a Yew component, where the network call runs in a spawned task
//!   and its result comes back as a message.
//!
//! The cache is never extended locally. A created record shows up once the
//! list is entered again and re-fetched.

use log::debug;

use crate::host::{announce, Confirmer, Notice, Notifier, Prompt};
use crate::model::student::Student;
use crate::status::OpStatus;
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError(String),
}

/// What caused a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// The list view was entered.
    Navigation,
    /// The user asked for a refresh explicitly; success is announced.
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    Simple,
    /// The user must type the student's name to confirm.
    TypedName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined, dismissed the dialog, or typed the wrong name.
    Cancelled,
    Failed,
    /// Unknown id, or another delete is still outstanding.
    Ignored,
}

/// A pending delete awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: String,
    pub name: String,
    pub mode: DeleteMode,
}

impl DeleteRequest {
    pub fn prompt(&self) -> Prompt {
        match self.mode {
            DeleteMode::Simple => Prompt::DeleteStudent {
                name: self.name.clone(),
            },
            DeleteMode::TypedName => Prompt::ConfirmName {
                name: self.name.clone(),
            },
        }
    }

    /// Asks `confirmer`; in `TypedName` mode the answer must equal the name exactly.
    pub async fn confirm<C, N>(&self, confirmer: &C, notifier: &N) -> bool
    where
        C: Confirmer + ?Sized,
        N: Notifier + ?Sized,
    {
        let prompt = self.prompt();
        match self.mode {
            DeleteMode::Simple => confirmer.confirm(&prompt).await,
            DeleteMode::TypedName => match confirmer.request_text(&prompt).await {
                Some(typed) if typed == self.name => true,
                Some(_) => {
                    announce(notifier, Notice::error("The name does not match!"));
                    false
                }
                None => false,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct StudentListModel {
    state: ListState,
    students: Vec<Student>,
    pending_delete: Option<String>,
    delete_status: OpStatus,
    /// Ids whose delete was acknowledged while a refresh was in flight. The
    /// listing may predate the delete, so these are filtered out of it.
    deleted_during_refresh: Vec<String>,
}

impl StudentListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the last refresh stands.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The cached records, in the order the server listed them.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_loading(&self) -> bool {
        self.state == ListState::Loading
    }

    pub fn delete_status(&self) -> &OpStatus {
        &self.delete_status
    }

    /// Id of the record whose delete is outstanding, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Looks `id` up in the cache only; never asks the store.
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Enters `Loading`. The cache is kept until the listing arrives.
    pub fn begin_refresh(&mut self) {
        debug!("student list: {:?} -> Loading", self.state);
        self.state = ListState::Loading;
        self.deleted_during_refresh.clear();
    }

    /// Applies the result of `list()`. A failure empties the cache.
    pub fn finish_refresh<N: Notifier + ?Sized>(
        &mut self,
        trigger: RefreshTrigger,
        result: Result<Vec<Student>, StoreError>,
        notifier: &N,
    ) {
        match result {
            Ok(mut students) => {
                let deleted = std::mem::take(&mut self.deleted_during_refresh);
                students.retain(|student| !deleted.contains(&student.id));
                debug!("student list: loaded {} records", students.len());
                self.students = students;
                self.state = ListState::Loaded;
                if trigger == RefreshTrigger::User {
                    announce(notifier, Notice::success("Student list has been updated."));
                }
            }
            Err(err) => {
                self.deleted_during_refresh.clear();
                self.students.clear();
                self.state = ListState::LoadError(err.to_string());
                announce(
                    notifier,
                    Notice::error("Failed to load students. Please check if the server is running."),
                );
            }
        }
    }

    /// Re-fetches the whole collection and replaces the cache.
    ///
    /// # Arguments
    /// * `store` - where the collection is listed from.
    /// * `trigger` - `User` refreshes announce their success, navigation
    ///   refreshes stay silent.
    /// * `notifier` - receives the success or failure notice.
    pub async fn refresh<S, N>(&mut self, store: &S, trigger: RefreshTrigger, notifier: &N)
    where
        S: RecordStore + ?Sized,
        N: Notifier + ?Sized,
    {
        self.begin_refresh();
        let result = store.list().await;
        self.finish_refresh(trigger, result, notifier);
    }

    /// Builds the confirmation request for deleting `id`.
    ///
    /// `None` when the id is not cached or a delete is already outstanding.
    pub fn delete_request(&self, id: &str, mode: DeleteMode) -> Option<DeleteRequest> {
        if self.pending_delete.is_some() {
            return None;
        }
        self.find(id).map(|student| DeleteRequest {
            id: student.id.clone(),
            name: student.name.clone(),
            mode,
        })
    }

    /// Marks the delete of `id` as outstanding. Returns `false` if it may not start.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.pending_delete.is_some() || self.find(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        self.delete_status = OpStatus::Pending;
        true
    }

    /// Applies the result of `delete(id)`.
    ///
    /// On acknowledgement the record is removed from the cache without a
    /// re-fetch; the remaining records keep their order. A refresh still in
    /// flight will not bring it back. On failure the cache is left untouched.
    pub fn finish_delete<N: Notifier + ?Sized>(
        &mut self,
        id: &str,
        result: Result<(), StoreError>,
        notifier: &N,
    ) -> DeleteOutcome {
        if self.pending_delete.as_deref() == Some(id) {
            self.pending_delete = None;
        }

        match result {
            Ok(()) => {
                let name = self.find(id).map(|s| s.name.clone()).unwrap_or_default();
                self.students.retain(|student| student.id != id);
                if self.is_loading() {
                    self.deleted_during_refresh.push(id.to_string());
                }
                self.delete_status = OpStatus::Succeeded;
                announce(
                    notifier,
                    Notice::success(format!("{} has been deleted successfully.", name)),
                );
                DeleteOutcome::Deleted
            }
            Err(err) => {
                self.delete_status = OpStatus::Failed(err.to_string());
                announce(
                    notifier,
                    Notice::error("Failed to delete student. Please try again."),
                );
                DeleteOutcome::Failed
            }
        }
    }

    /// Full delete flow: confirm with the user, delete remotely, then drop
    /// the record from the cache.
    ///
    /// # Returns
    /// What happened, see [`DeleteOutcome`]. Nothing reaches the store
    /// unless the user confirmed.
    pub async fn request_delete<S, C, N>(
        &mut self,
        id: &str,
        mode: DeleteMode,
        store: &S,
        confirmer: &C,
        notifier: &N,
    ) -> DeleteOutcome
    where
        S: RecordStore + ?Sized,
        C: Confirmer + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(request) = self.delete_request(id, mode) else {
            return DeleteOutcome::Ignored;
        };
        if !request.confirm(confirmer, notifier).await {
            return DeleteOutcome::Cancelled;
        }
        if !self.begin_delete(&request.id) {
            return DeleteOutcome::Ignored;
        }
        let result = store.delete(&request.id).await;
        self.finish_delete(&request.id, result, notifier)
    }
}
