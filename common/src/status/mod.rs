use serde::Serialize;

/// Status of a single asynchronous operation owned by a view-model.
///
/// Each view-model keeps one of these per operation kind (submit, delete)
/// instead of sharing loading flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OpStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl OpStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, OpStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OpStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
