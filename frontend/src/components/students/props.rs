//! Properties of the `StudentsPage`.

use common::navigation::Route;
use yew::prelude::*;

use crate::api::HttpStudentStore;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentsProps {
    /// Store the list is fetched from and deletes are sent to.
    pub store: HttpStudentStore,

    /// Receives the route to show next (create or edit).
    pub on_navigate: Callback<Route>,
}
