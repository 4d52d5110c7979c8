use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentFormPage;
use crate::host::{BrowserDialogs, RouteNavigator, ToastNotifier};

/// Central update function for the form page.
///
/// Contract
/// - Advances `page.model` by one step per message.
/// - Confirmation dialogs and store calls run in spawned tasks that answer
///   with `SubmitDeclined`, `Submitted` or `LeaveConfirmed`.
/// - Returns `true` to re-render the view.
pub fn update(page: &mut StudentFormPage, ctx: &Context<StudentFormPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetched(result) => {
            page.model.seed(result, &ToastNotifier, &navigator(ctx));
            true
        }
        Msg::FieldChanged(field, value) => {
            page.model.set_field(field, value);
            true
        }
        Msg::Submit => {
            // Invalid drafts only update the field errors.
            let Some(submission) = page.model.prepare_submit(&ToastNotifier) else {
                return true;
            };

            let store = ctx.props().store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                if !submission.confirm(&BrowserDialogs).await {
                    link.send_message(Msg::SubmitDeclined);
                    return;
                }
                let result = submission.execute(&store).await;
                link.send_message(Msg::Submitted(result));
            });
            true
        }
        Msg::SubmitDeclined => {
            page.model.abandon_submit();
            true
        }
        Msg::Submitted(result) => {
            page.model.finish_submit(result, &ToastNotifier, &navigator(ctx));
            true
        }
        Msg::Back => {
            let Some(request) = page.model.leave_request() else {
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                if request.confirm(&BrowserDialogs).await {
                    link.send_message(Msg::LeaveConfirmed);
                }
            });
            false
        }
        Msg::LeaveConfirmed => {
            page.model.leave(&navigator(ctx));
            true
        }
    }
}

fn navigator(ctx: &Context<StudentFormPage>) -> RouteNavigator {
    RouteNavigator(ctx.props().on_navigate.clone())
}
