//! Defines the properties for the `StudentFormPage`.
//!
//! The same page serves both the "add" and the "edit" route; which one is
//! decided by `student_id` when the page is mounted.

use common::navigation::Route;
use yew::prelude::*;

use crate::api::HttpStudentStore;

/// Properties for the `StudentFormPage`.
#[derive(Properties, PartialEq, Clone)]
pub struct StudentFormProps {
    pub store: HttpStudentStore,

    /// Receives the route to show once the form is left.
    pub on_navigate: Callback<Route>,

    /// The id of the student to edit.
    ///
    /// - `Some(id)`: the record is fetched on first render and seeds the
    ///   form. If it does not exist the page immediately navigates back to
    ///   the list.
    /// - `None` (the default): an empty form for a new student.
    #[prop_or_default]
    pub student_id: Option<String>,
}
