//! Capabilities supplied by whatever hosts the view-models.
//!
//! The view-models decide *what* to tell the user and *what* to ask; the host
//! decides how that looks. The browser build renders notices as toasts and
//! prompts as native dialogs, tests record them.

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Sends `notice` to `notifier` and mirrors it to the log.
pub(crate) fn announce<N: Notifier + ?Sized>(notifier: &N, notice: Notice) {
    match notice.level {
        NoticeLevel::Error => warn!("{}", notice.message),
        _ => info!("{}", notice.message),
    }
    notifier.notify(notice);
}

/// A question put to the user before a destructive or irreversible step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Yes/no confirmation before deleting a student.
    DeleteStudent { name: String },
    /// Secure delete: the user has to type the student's name.
    ConfirmName { name: String },
    UpdateStudent { name: String },
    /// Leaving a form whose draft has unsaved edits.
    DiscardChanges,
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::DeleteStudent { .. } => "Are you sure?",
            Prompt::ConfirmName { .. } => "Confirm Deletion",
            Prompt::UpdateStudent { .. } => "Update Student?",
            Prompt::DiscardChanges => "Discard Changes?",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Prompt::DeleteStudent { name } => format!(
                "You are about to delete {}. This action cannot be undone!",
                name
            ),
            Prompt::ConfirmName { name } => {
                format!("Please type {} to confirm deletion:", name)
            }
            Prompt::UpdateStudent { name } => {
                format!("Are you sure you want to update {}?", name)
            }
            Prompt::DiscardChanges => {
                "You have unsaved changes. Are you sure you want to leave?".to_string()
            }
        }
    }
}

/// Asks the user to confirm a step.
#[allow(async_fn_in_trait)]
pub trait Confirmer {
    /// Yes/no question; `true` means go ahead.
    async fn confirm(&self, prompt: &Prompt) -> bool;

    /// Free-text answer; `None` when the user dismissed the dialog.
    async fn request_text(&self, prompt: &Prompt) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_messages_name_the_student() {
        let prompt = Prompt::DeleteStudent {
            name: "Ada".to_string(),
        };
        assert_eq!(prompt.title(), "Are you sure?");
        assert_eq!(
            prompt.message(),
            "You are about to delete Ada. This action cannot be undone!"
        );
        assert_eq!(
            Prompt::UpdateStudent { name: "Ada".into() }.message(),
            "Are you sure you want to update Ada?"
        );
    }
}
