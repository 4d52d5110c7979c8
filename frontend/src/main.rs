use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod host;
mod logging;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
