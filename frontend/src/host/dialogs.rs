use common::host::{Confirmer, Prompt};

/// Confirmation through the browser's native `confirm`/`prompt` dialogs.
///
/// Both dialogs block the page until answered, so the futures resolve
/// immediately. A missing `window` (not a browser) counts as "no".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserDialogs;

fn dialog_text(prompt: &Prompt) -> String {
    format!("{}\n\n{}", prompt.title(), prompt.message())
}

impl Confirmer for BrowserDialogs {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(&dialog_text(prompt)).ok())
            .unwrap_or(false)
    }

    async fn request_text(&self, prompt: &Prompt) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message(&dialog_text(prompt)).ok())
            .flatten()
    }
}
