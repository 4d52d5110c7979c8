use common::model::student::{Field, Student};
use common::store::StoreError;

pub enum Msg {
    Fetched(Result<Student, StoreError>),
    FieldChanged(Field, String),
    Submit,
    SubmitDeclined,
    Submitted(Result<Student, StoreError>),
    Back,
    LeaveConfirmed,
}
