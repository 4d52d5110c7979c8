//! Top navigation bar shared by every page.

use common::navigation::Route;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

const LINK_STYLE: &str = "color:#fff;text-decoration:none;padding:8px 16px;border-radius:6px;";
const ACTIVE_LINK_STYLE: &str = "color:#fff;text-decoration:none;font-weight:bold;padding:8px 16px;border-radius:6px;background:rgba(255,255,255,0.2);";

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    /// Route currently on screen; its link is highlighted.
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <nav style="display:flex;align-items:center;gap:12px;padding:14px 24px;background:#667eea;box-shadow:0 2px 6px rgba(0,0,0,0.15);">
                <span style="color:#fff;font-size:1.25rem;font-weight:bold;margin-right:auto;">{ "Student Records" }</span>
                { nav_link(props, "Students", Route::List) }
                { nav_link(props, "Add Student", Route::Create) }
            </nav>
        }
    }
}

fn nav_link(props: &NavbarProps, label: &'static str, target: Route) -> Html {
    // The edit page counts as part of the list section.
    let active = matches!(target, Route::Create) == matches!(props.active, Route::Create);
    let href = target.path();
    let on_navigate = props.on_navigate.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target.clone());
    });

    html! {
        <a
            href={href}
            style={if active { ACTIVE_LINK_STYLE } else { LINK_STYLE }}
            onclick={onclick}
        >
            { label }
        </a>
    }
}
