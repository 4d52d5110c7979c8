use common::form::StudentFormModel;

/// State of the form page.
pub struct StudentFormPage {
    /// Draft, field errors and submit status of the record being edited.
    pub model: StudentFormModel,

    /// Guard to avoid fetching the edited record more than once.
    pub loaded: bool,
}

impl StudentFormPage {
    pub fn new(student_id: Option<String>) -> Self {
        let model = match student_id {
            Some(id) => StudentFormModel::edit(id),
            None => StudentFormModel::create(),
        };
        Self {
            model,
            loaded: false,
        }
    }
}
