//! View-model of the create/edit student form.
//!
//! Owns a transient draft, its field errors and the submit status. The
//! draft is discarded with the model when the host navigates away, saved or
//! not.
//!
//! Like the list model it exposes both async drivers (`load`, `submit`,
//! `cancel`) and the individual steps they are made of, so an event-loop
//! host can run the network calls in spawned tasks. The owned
//! [`Submission`] and [`LeaveRequest`] values carry everything a spawned
//! task needs without borrowing the model.

use log::debug;

use crate::host::{announce, Confirmer, Notice, Notifier, Prompt};
use crate::model::student::{Field, Student, StudentDraft};
use crate::navigation::{Navigator, Outcome};
use crate::status::OpStatus;
use crate::store::{RecordStore, StoreError};
use crate::validation::{validate, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for the record being edited.
    Loading,
    Ready,
    /// The form has handed control back to the navigator.
    Closed,
}

/// A validated draft on its way to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(StudentDraft),
    Update { id: String, draft: StudentDraft },
}

impl Submission {
    pub fn draft(&self) -> &StudentDraft {
        match self {
            Submission::Create(draft) | Submission::Update { draft, .. } => draft,
        }
    }

    /// Updates ask first; creates go straight through.
    pub fn prompt(&self) -> Option<Prompt> {
        match self {
            Submission::Create(_) => None,
            Submission::Update { draft, .. } => Some(Prompt::UpdateStudent {
                name: draft.name.clone(),
            }),
        }
    }

    pub async fn confirm<C: Confirmer + ?Sized>(&self, confirmer: &C) -> bool {
        match self.prompt() {
            Some(prompt) => confirmer.confirm(&prompt).await,
            None => true,
        }
    }

    /// Sends the submission to `store`.
    ///
    /// # Returns
    /// The record as the server stored it. Creates allocate the id through
    /// [`RecordStore::create`].
    pub async fn execute<S: RecordStore + ?Sized>(&self, store: &S) -> Result<Student, StoreError> {
        match self {
            Submission::Create(draft) => store.create(draft).await,
            Submission::Update { id, draft } => store.update(id, draft).await,
        }
    }
}

/// The "back" action, captured before asking the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveRequest {
    pub dirty: bool,
}

impl LeaveRequest {
    /// Clean drafts leave without asking.
    pub async fn confirm<C: Confirmer + ?Sized>(&self, confirmer: &C) -> bool {
        !self.dirty || confirmer.confirm(&Prompt::DiscardChanges).await
    }
}

#[derive(Debug)]
pub struct StudentFormModel {
    mode: FormMode,
    phase: FormPhase,
    draft: StudentDraft,
    seed: StudentDraft,
    field_errors: FieldErrors,
    submit_status: OpStatus,
}

impl StudentFormModel {
    /// An empty form for a new student.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Ready,
            draft: StudentDraft::default(),
            seed: StudentDraft::default(),
            field_errors: FieldErrors::new(),
            submit_status: OpStatus::Idle,
        }
    }

    /// A form for `id`, waiting for [`Self::seed`].
    pub fn edit(id: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Edit { id: id.into() },
            phase: FormPhase::Loading,
            ..Self::create()
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    /// Errors from the last rejected submit, minus fields edited since.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// The message to show under `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn submit_status(&self) -> &OpStatus {
        &self.submit_status
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_status.is_pending()
    }

    /// Whether the draft differs from what the form was seeded with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.seed
    }

    /// Applies the result of `fetch_one` in edit mode.
    ///
    /// A missing record never populates the draft: the navigator is sent back
    /// to the list instead.
    pub fn seed<N, V>(&mut self, result: Result<Student, StoreError>, notifier: &N, navigator: &V)
    where
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        if self.phase != FormPhase::Loading {
            return;
        }
        match result {
            Ok(student) => {
                debug!("student form: seeded from record {}", student.id);
                self.draft = student.draft();
                self.seed = self.draft.clone();
                self.phase = FormPhase::Ready;
            }
            Err(err) => {
                let message = if err.is_not_found() {
                    "The student you are trying to edit does not exist."
                } else {
                    "Failed to load student data. Please try again."
                };
                announce(notifier, Notice::error(message));
                self.phase = FormPhase::Closed;
                navigator.complete(Outcome::EditTargetMissing);
            }
        }
    }

    /// Fetches the record being edited. Does nothing in create mode.
    pub async fn load<S, N, V>(&mut self, store: &S, notifier: &N, navigator: &V)
    where
        S: RecordStore + ?Sized,
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        let FormMode::Edit { id } = &self.mode else {
            return;
        };
        let result = store.fetch_one(id).await;
        self.seed(result, notifier, navigator);
    }

    /// Updates one field and clears its error. Nothing is re-validated here.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.field_errors.remove(&field);
    }

    /// Validates the draft and, if it is clean, starts a submission.
    ///
    /// Returns `None` without touching the network when the form is not
    /// ready, a submission is already outstanding, or validation fails.
    pub fn prepare_submit<N: Notifier + ?Sized>(&mut self, notifier: &N) -> Option<Submission> {
        if self.phase != FormPhase::Ready || self.is_submitting() {
            return None;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            debug!("student form: {} invalid fields", errors.len());
            self.field_errors = errors;
            announce(notifier, Notice::error("Please fix all form errors!"));
            return None;
        }

        self.field_errors.clear();
        self.submit_status = OpStatus::Pending;
        Some(match &self.mode {
            FormMode::Create => Submission::Create(self.draft.clone()),
            FormMode::Edit { id } => Submission::Update {
                id: id.clone(),
                draft: self.draft.clone(),
            },
        })
    }

    /// Returns to idle after the user declined to submit.
    pub fn abandon_submit(&mut self) {
        if self.is_submitting() {
            self.submit_status = OpStatus::Idle;
        }
    }

    /// Applies the store's answer to a submission.
    ///
    /// Success leaves for the list. Failure keeps mode and draft so the
    /// user can retry without re-typing.
    pub fn finish_submit<N, V>(
        &mut self,
        result: Result<Student, StoreError>,
        notifier: &N,
        navigator: &V,
    ) where
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        let creating = self.mode == FormMode::Create;
        match result {
            Ok(_) => {
                let name = &self.draft.name;
                let (notice, outcome) = if creating {
                    (format!("Student {} added successfully!", name), Outcome::Created)
                } else {
                    (format!("{} has been updated successfully!", name), Outcome::Updated)
                };
                self.submit_status = OpStatus::Succeeded;
                self.phase = FormPhase::Closed;
                announce(notifier, Notice::success(notice));
                navigator.complete(outcome);
            }
            Err(err) => {
                let message = match (creating, err.status()) {
                    (true, _) => "Failed to add student. Please check if the server is running.",
                    (false, Some(404)) => "Student not found. It may have been deleted.",
                    (false, Some(400)) => {
                        "Invalid data. Please check the information and try again."
                    }
                    (false, _) => "Error updating student. Please try again.",
                };
                self.submit_status = OpStatus::Failed(err.to_string());
                announce(notifier, Notice::error(message));
            }
        }
    }

    /// Full submit flow: validate, confirm updates, call the store, settle.
    /// Returns `true` when the record was saved.
    pub async fn submit<S, C, N, V>(
        &mut self,
        store: &S,
        confirmer: &C,
        notifier: &N,
        navigator: &V,
    ) -> bool
    where
        S: RecordStore + ?Sized,
        C: Confirmer + ?Sized,
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        let Some(submission) = self.prepare_submit(notifier) else {
            return false;
        };
        if !submission.confirm(confirmer).await {
            self.abandon_submit();
            return false;
        }
        let result = submission.execute(store).await;
        let saved = result.is_ok();
        self.finish_submit(result, notifier, navigator);
        saved
    }

    /// Captures the "back" action. `None` while a submission is outstanding.
    pub fn leave_request(&self) -> Option<LeaveRequest> {
        if self.is_submitting() || self.phase == FormPhase::Closed {
            return None;
        }
        Some(LeaveRequest {
            dirty: self.is_dirty(),
        })
    }

    /// Leaves for the list once the user agreed to drop the draft.
    pub fn leave<V: Navigator + ?Sized>(&mut self, navigator: &V) {
        self.phase = FormPhase::Closed;
        navigator.complete(Outcome::Cancelled);
    }

    /// The "back" action. Returns `true` if the form was left.
    pub async fn cancel<C, V>(&mut self, confirmer: &C, navigator: &V) -> bool
    where
        C: Confirmer + ?Sized,
        V: Navigator + ?Sized,
    {
        let Some(request) = self.leave_request() else {
            return false;
        };
        if !request.confirm(confirmer).await {
            return false;
        }
        self.leave(navigator);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;
    use crate::testing::{
        student, FakeStore, RecordingNavigator, RecordingNotifier, ScriptedConfirmer,
    };

    fn valid_draft() -> StudentDraft {
        StudentDraft {
            name: "Alice Smith".to_string(),
            email: "a@b.com".to_string(),
            course: "CS".to_string(),
            phone: "(555) 123-4567".to_string(),
        }
    }

    fn fill(model: &mut StudentFormModel, draft: &StudentDraft) {
        for field in Field::ALL {
            model.set_field(field, draft.get(field).to_string());
        }
    }

    #[test]
    fn create_starts_empty_and_ready() {
        let model = StudentFormModel::create();
        assert_eq!(model.mode(), &FormMode::Create);
        assert_eq!(model.phase(), FormPhase::Ready);
        assert_eq!(model.draft(), &StudentDraft::default());
        assert!(!model.is_dirty());
    }

    #[tokio::test]
    async fn edit_is_seeded_from_the_fetched_record() {
        let store = FakeStore::with_records(vec![student("5", "Grace Hopper")]);
        let navigator = RecordingNavigator::default();
        let mut model = StudentFormModel::edit("5");
        assert_eq!(model.phase(), FormPhase::Loading);

        model.load(&store, &RecordingNotifier::default(), &navigator).await;

        assert_eq!(model.phase(), FormPhase::Ready);
        assert_eq!(model.draft().name, "Grace Hopper");
        assert!(!model.is_dirty());
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn missing_record_never_populates_the_draft() {
        let store = FakeStore::default();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut model = StudentFormModel::edit("99");

        model.load(&store, &notifier, &navigator).await;

        assert_eq!(model.draft(), &StudentDraft::default());
        assert_eq!(model.phase(), FormPhase::Closed);
        assert_eq!(navigator.routes(), vec![Route::List]);
        assert_eq!(
            notifier.notices(),
            vec![Notice::error("The student you are trying to edit does not exist.")]
        );
        assert!(model.prepare_submit(&notifier).is_none());
    }

    #[tokio::test]
    async fn failed_fetch_also_leaves() {
        let store = FakeStore::with_records(vec![student("5", "Grace Hopper")]);
        store.fail_next("fetch_one", StoreError::Transport("timeout".into()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut model = StudentFormModel::edit("5");

        model.load(&store, &notifier, &navigator).await;

        assert_eq!(model.draft(), &StudentDraft::default());
        assert_eq!(navigator.routes(), vec![Route::List]);
        assert_eq!(
            notifier.notices(),
            vec![Notice::error("Failed to load student data. Please try again.")]
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let notifier = RecordingNotifier::default();
        let mut model = StudentFormModel::create();
        assert!(model.prepare_submit(&notifier).is_none());
        assert_eq!(model.field_errors().len(), 4);

        model.set_field(Field::Email, "not-an-email".to_string());

        assert_eq!(model.error(Field::Email), None);
        assert_eq!(model.error(Field::Name), Some("Name is required"));
        assert_eq!(model.field_errors().len(), 3);
        assert!(model.is_dirty());
    }

    #[tokio::test]
    async fn invalid_draft_makes_no_network_call() {
        let store = FakeStore::default();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut model = StudentFormModel::create();
        fill(
            &mut model,
            &StudentDraft {
                name: "Al".into(),
                email: "bad-email".into(),
                course: "CS".into(),
                phone: "12345".into(),
            },
        );

        let saved = model
            .submit(&store, &ScriptedConfirmer::accepting(), &notifier, &navigator)
            .await;

        assert!(!saved);
        assert!(store.calls().is_empty());
        assert_eq!(
            model.field_errors().keys().copied().collect::<Vec<_>>(),
            vec![Field::Email, Field::Phone]
        );
        assert_eq!(model.submit_status(), &OpStatus::Idle);
        assert_eq!(notifier.notices(), vec![Notice::error("Please fix all form errors!")]);
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn create_allocates_an_id_and_returns_to_the_list() {
        let store = FakeStore::with_records(vec![student("3", "Ada"), student("7", "Alan")]);
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let confirmer = ScriptedConfirmer::declining();
        let mut model = StudentFormModel::create();
        fill(&mut model, &valid_draft());

        let saved = model.submit(&store, &confirmer, &notifier, &navigator).await;

        assert!(saved);
        assert_eq!(store.calls(), vec!["list", "insert 8"]);
        assert_eq!(store.get("8").unwrap().name, "Alice Smith");
        assert!(confirmer.prompts().is_empty());
        assert_eq!(model.submit_status(), &OpStatus::Succeeded);
        assert_eq!(model.phase(), FormPhase::Closed);
        assert_eq!(navigator.routes(), vec![Route::List]);
        assert_eq!(
            notifier.notices(),
            vec![Notice::success("Student Alice Smith added successfully!")]
        );
    }

    #[tokio::test]
    async fn failed_create_keeps_the_draft_for_retry() {
        let store = FakeStore::default();
        store.fail_next("insert", StoreError::Transport("offline".into()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let confirmer = ScriptedConfirmer::accepting();
        let mut model = StudentFormModel::create();
        fill(&mut model, &valid_draft());

        assert!(!model.submit(&store, &confirmer, &notifier, &navigator).await);

        assert_eq!(model.mode(), &FormMode::Create);
        assert_eq!(model.draft(), &valid_draft());
        assert_eq!(model.phase(), FormPhase::Ready);
        assert!(matches!(model.submit_status(), OpStatus::Failed(_)));
        assert!(navigator.routes().is_empty());
        assert_eq!(
            notifier.notices(),
            vec![Notice::error("Failed to add student. Please check if the server is running.")]
        );

        assert!(model.submit(&store, &confirmer, &notifier, &navigator).await);
        assert_eq!(store.ids(), vec!["1"]);
        assert_eq!(navigator.routes(), vec![Route::List]);
    }

    #[tokio::test]
    async fn update_is_confirmed_then_saved() {
        let store = FakeStore::with_records(vec![student("5", "Grace Hopper")]);
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let confirmer = ScriptedConfirmer::accepting();
        let mut model = StudentFormModel::edit("5");
        model.load(&store, &notifier, &navigator).await;
        model.set_field(Field::Course, "Compilers".to_string());
        model.set_field(Field::Email, "grace@navy.mil".to_string());
        model.set_field(Field::Phone, "555 867 5309".to_string());

        assert!(model.submit(&store, &confirmer, &notifier, &navigator).await);

        assert_eq!(
            confirmer.prompts(),
            vec![Prompt::UpdateStudent {
                name: "Grace Hopper".into()
            }]
        );
        assert_eq!(store.get("5").unwrap().course, "Compilers");
        assert_eq!(store.calls(), vec!["fetch_one 5", "update 5"]);
        assert_eq!(navigator.routes(), vec![Route::List]);
        assert_eq!(
            notifier.notices(),
            vec![Notice::success("Grace Hopper has been updated successfully!")]
        );
    }

    #[tokio::test]
    async fn declined_update_stays_idle() {
        let store = FakeStore::with_records(vec![student("5", "Grace Hopper")]);
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let mut model = StudentFormModel::edit("5");
        model.load(&store, &notifier, &navigator).await;
        model.set_field(Field::Email, "grace@navy.mil".to_string());
        model.set_field(Field::Phone, "5558675309".to_string());

        let saved = model
            .submit(&store, &ScriptedConfirmer::declining(), &notifier, &navigator)
            .await;

        assert!(!saved);
        assert_eq!(model.submit_status(), &OpStatus::Idle);
        assert_eq!(store.calls(), vec!["fetch_one 5"]);
    }

    #[tokio::test]
    async fn update_errors_are_explained_by_status() {
        for (error, message) in [
            (StoreError::NotFound, "Student not found. It may have been deleted."),
            (
                StoreError::Status(400),
                "Invalid data. Please check the information and try again.",
            ),
            (StoreError::Status(503), "Error updating student. Please try again."),
        ] {
            let notifier = RecordingNotifier::default();
            let navigator = RecordingNavigator::default();
            let mut model = StudentFormModel::edit("5");
            model.seed(Ok(valid_draft().with_id("5")), &notifier, &navigator);
            assert!(model.prepare_submit(&notifier).is_some());

            model.finish_submit(Err(error), &notifier, &navigator);

            assert_eq!(notifier.notices(), vec![Notice::error(message)]);
            assert_eq!(model.mode(), &FormMode::Edit { id: "5".into() });
            assert_eq!(model.draft(), &valid_draft());
            assert!(navigator.routes().is_empty());
        }
    }

    #[test]
    fn repeat_submission_is_refused_while_pending() {
        let notifier = RecordingNotifier::default();
        let mut model = StudentFormModel::create();
        fill(&mut model, &valid_draft());

        let first = model.prepare_submit(&notifier);
        assert_eq!(first, Some(Submission::Create(valid_draft())));
        assert!(model.is_submitting());
        assert!(model.prepare_submit(&notifier).is_none());
        assert!(model.leave_request().is_none());

        model.abandon_submit();
        assert!(model.prepare_submit(&notifier).is_some());
    }

    #[tokio::test]
    async fn back_from_a_clean_form_needs_no_confirmation() {
        let navigator = RecordingNavigator::default();
        let confirmer = ScriptedConfirmer::declining();
        let mut model = StudentFormModel::create();

        assert!(model.cancel(&confirmer, &navigator).await);

        assert!(confirmer.prompts().is_empty());
        assert_eq!(navigator.routes(), vec![Route::List]);
        assert_eq!(model.phase(), FormPhase::Closed);
    }

    #[tokio::test]
    async fn back_from_a_dirty_form_asks_first() {
        let navigator = RecordingNavigator::default();
        let mut model = StudentFormModel::create();
        model.set_field(Field::Name, "Half typed".to_string());

        let stay = ScriptedConfirmer::declining();
        assert!(!model.cancel(&stay, &navigator).await);
        assert_eq!(stay.prompts(), vec![Prompt::DiscardChanges]);
        assert!(navigator.routes().is_empty());
        assert_eq!(model.draft().name, "Half typed");

        assert!(model.cancel(&ScriptedConfirmer::accepting(), &navigator).await);
        assert_eq!(navigator.routes(), vec![Route::List]);
    }
}
