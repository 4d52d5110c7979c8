use common::list::StudentListModel;

/// State of the list page: the list view-model plus a one-time load guard.
///
/// The page is mounted afresh every time the list route is entered, so the
/// guard makes each visit fetch the collection exactly once.
pub struct StudentsPage {
    pub model: StudentListModel,
    pub loaded: bool,
}

impl StudentsPage {
    pub fn new() -> Self {
        Self {
            model: StudentListModel::new(),
            loaded: false,
        }
    }
}
