use common::navigation::Route;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Callback, Component, Context, Html};

use crate::api::HttpStudentStore;
use crate::components::navbar::Navbar;
use crate::components::student_form::StudentFormPage;
use crate::components::students::StudentsPage;
use crate::config;

pub enum Msg {
    /// In-app navigation: pushes a history entry.
    Navigate(Route),
    /// Browser back/forward: the history entry already exists.
    Restore(Route),
}

/// Application shell: owns the current route and the store handed to pages.
pub struct App {
    route: Route,
    /// Bumped on every navigation so the page below is remounted, even when
    /// the route is unchanged, and always starts from fresh data.
    visit: u64,
    store: HttpStudentStore,
    popstate: Option<Closure<dyn Fn(web_sys::Event)>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        info!("Using student records at {}", config.collection_url());

        let route = current_path().map(|path| Route::from_path(&path)).unwrap_or(Route::List);
        // Normalise unknown paths to the route actually shown.
        replace_path(&route);

        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
            let route = current_path().map(|path| Route::from_path(&path)).unwrap_or(Route::List);
            link.send_message(Msg::Restore(route));
        });
        let popstate = match web_sys::window() {
            Some(window) => window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .map(|_| popstate)
                .map_err(|e| warn!("Unable to listen for history changes: {:?}", e))
                .ok(),
            None => None,
        };

        Self {
            route,
            visit: 0,
            store: HttpStudentStore::new(config),
            popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                push_path(&route);
                self.route = route;
            }
            Msg::Restore(route) => {
                self.route = route;
            }
        }
        self.visit += 1;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<Route> = ctx.link().callback(Msg::Navigate);
        let key = format!("{}#{}", self.route.path(), self.visit);

        let page = match &self.route {
            Route::List => html! {
                <StudentsPage
                    key={key}
                    store={self.store.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::Create => html! {
                <StudentFormPage
                    key={key}
                    store={self.store.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::Edit(id) => html! {
                <StudentFormPage
                    key={key}
                    store={self.store.clone()}
                    on_navigate={on_navigate.clone()}
                    student_id={Some(id.clone())}
                />
            },
        };

        html! {
            <div>
                <Navbar active={self.route.clone()} on_navigate={on_navigate} />
                { page }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(popstate)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

fn push_path(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            warn!("Unable to push {}: {:?}", route, e);
        }
    }
}

fn replace_path(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&route.path()))
            .ok();
    }
}
