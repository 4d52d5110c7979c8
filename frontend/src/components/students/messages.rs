use common::list::{DeleteMode, RefreshTrigger};
use common::model::student::Student;
use common::store::StoreError;

pub enum Msg {
    Refresh(RefreshTrigger),
    Loaded(RefreshTrigger, Result<Vec<Student>, StoreError>),
    Add,
    Edit(String),
    Delete(String, DeleteMode),
    DeleteConfirmed(String),
    Deleted(String, Result<(), StoreError>),
}
