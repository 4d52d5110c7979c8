use log::debug;
use std::fmt;

/// A top-level view of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Edit(String),
}

impl Route {
    /// Resolves a browser path. `/`, unknown paths and an edit path without
    /// an id all land on the list.
    pub fn from_path(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["add-student"] => Route::Create,
            ["edit-student", id] => Route::Edit((*id).to_string()),
            _ => Route::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/students".to_string(),
            Route::Create => "/add-student".to_string(),
            Route::Edit(id) => format!("/edit-student/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// How a view was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    Deleted,
    /// The user backed out of a form.
    Cancelled,
    /// The record requested for editing does not exist (or could not be loaded).
    EditTargetMissing,
}

/// Where the application goes after `outcome`.
///
/// Every outcome leads back to the list. Entering the list re-fetches the
/// collection, which is how a freshly created record becomes visible.
pub fn destination(outcome: Outcome) -> Route {
    match outcome {
        Outcome::Created
        | Outcome::Updated
        | Outcome::Deleted
        | Outcome::Cancelled
        | Outcome::EditTargetMissing => Route::List,
    }
}

pub trait Navigator {
    fn navigate(&self, route: Route);

    fn complete(&self, outcome: Outcome) {
        let route = destination(outcome);
        debug!("{:?} -> {}", outcome, route);
        self.navigate(route);
    }
}
