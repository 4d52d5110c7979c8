//! In-memory doubles for the store and the host capabilities.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::host::{Confirmer, Notice, Notifier, Prompt};
use crate::model::student::{Student, StudentDraft};
use crate::navigation::{Navigator, Route};
use crate::requests::CreateStudentRequest;
use crate::store::{RecordStore, StoreError};

pub fn student(id: &str, name: &str) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("student{}@school.edu", id),
        course: "General Studies".to_string(),
        phone: "555-000-0000".to_string(),
    }
}

/// A collection kept in a `Vec`, with one-shot failure injection per operation.
#[derive(Default)]
pub struct FakeStore {
    records: RefCell<Vec<Student>>,
    failures: RefCell<HashMap<&'static str, StoreError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeStore {
    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Self::default()
        }
    }

    /// Makes the next call of `operation` fail with `error`.
    pub fn fail_next(&self, operation: &'static str, error: StoreError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.borrow().iter().map(|s| s.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<Student> {
        self.records.borrow().iter().find(|s| s.id == id).cloned()
    }

    fn enter(&self, operation: &'static str, call: String) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow_mut().remove(operation) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl RecordStore for FakeStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        self.enter("list", "list".to_string())?;
        Ok(self.records.borrow().clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<Student, StoreError> {
        self.enter("fetch_one", format!("fetch_one {}", id))?;
        self.get(id).ok_or(StoreError::NotFound)
    }

    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student, StoreError> {
        self.enter("insert", format!("insert {}", request.id))?;
        if self.get(&request.id).is_some() {
            return Err(StoreError::Status(500));
        }
        let created = request.fields.clone().with_id(request.id.clone());
        self.records.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &StudentDraft) -> Result<Student, StoreError> {
        self.enter("update", format!("update {}", id))?;
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound)?;
        *slot = draft.clone().with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.enter("delete", format!("delete {}", id))?;
        self.records.borrow_mut().retain(|s| s.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Answers every prompt the same way and remembers what was asked.
pub struct ScriptedConfirmer {
    answer: bool,
    typed: Option<String>,
    prompts: RefCell<Vec<Prompt>>,
}

impl ScriptedConfirmer {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            typed: None,
            prompts: RefCell::default(),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            typed: None,
            prompts: RefCell::default(),
        }
    }

    /// Confirms yes/no prompts and types `text` into text prompts.
    pub fn typing(text: &str) -> Self {
        Self {
            answer: true,
            typed: Some(text.to_string()),
            prompts: RefCell::default(),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        self.prompts.borrow_mut().push(prompt.clone());
        self.answer
    }

    async fn request_text(&self, prompt: &Prompt) -> Option<String> {
        self.prompts.borrow_mut().push(prompt.clone());
        self.typed.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}
