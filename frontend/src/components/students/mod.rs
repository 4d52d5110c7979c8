//! Student list page.
//!
//! Wires the Yew `Component` implementation to the `StudentListModel`:
//! - `update` turns messages into view-model steps and spawns the store calls.
//! - `view` renders the cached records with edit and delete actions.
//! - On first render the collection is fetched; since the page is remounted
//!   on every visit, returning from a form always shows fresh data.

use common::list::RefreshTrigger;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentsProps;
pub use state::StudentsPage;

impl Component for StudentsPage {
    type Message = Msg;
    type Properties = StudentsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh(RefreshTrigger::Navigation));
        }
    }
}
