//! Update function for the student list page.
//!
//! Elm-style: each message advances the `StudentListModel` by one step.
//! Store calls and confirmation dialogs run in spawned tasks and report back
//! with a follow-up message, so the model is never borrowed across an await.

use common::navigation::{Navigator, Route};
use common::store::RecordStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentsPage;
use crate::host::{BrowserDialogs, RouteNavigator, ToastNotifier};

/// Central update function for the page.
///
/// Returns `true` when the view must re-render.
pub fn update(page: &mut StudentsPage, ctx: &Context<StudentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh(trigger) => {
            if page.model.is_loading() {
                return false;
            }
            page.model.begin_refresh();

            let store = ctx.props().store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.list().await;
                link.send_message(Msg::Loaded(trigger, result));
            });
            true
        }
        Msg::Loaded(trigger, result) => {
            page.model.finish_refresh(trigger, result, &ToastNotifier);
            true
        }
        Msg::Add => {
            navigator(ctx).navigate(Route::Create);
            false
        }
        Msg::Edit(id) => {
            navigator(ctx).navigate(Route::Edit(id));
            false
        }
        Msg::Delete(id, mode) => {
            let Some(request) = page.model.delete_request(&id, mode) else {
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                if request.confirm(&BrowserDialogs, &ToastNotifier).await {
                    link.send_message(Msg::DeleteConfirmed(request.id));
                }
            });
            false
        }
        Msg::DeleteConfirmed(id) => {
            if !page.model.begin_delete(&id) {
                return false;
            }

            let store = ctx.props().store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.delete(&id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            true
        }
        Msg::Deleted(id, result) => {
            page.model.finish_delete(&id, result, &ToastNotifier);
            true
        }
    }
}

fn navigator(ctx: &Context<StudentsPage>) -> RouteNavigator {
    RouteNavigator(ctx.props().on_navigate.clone())
}
