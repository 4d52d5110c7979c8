//! Create/edit form page: root module wiring the Yew `Component`
//! implementation to the `StudentFormModel`.
//!
//! In edit mode the record is fetched on first render; everything else
//! happens in `update` in response to user input.

use common::form::FormMode;
use common::store::RecordStore;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentFormProps;
pub use state::StudentFormPage;

impl Component for StudentFormPage {
    type Message = Msg;
    type Properties = StudentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        StudentFormPage::new(ctx.props().student_id.clone())
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

            if let FormMode::Edit { id } = self.model.mode() {
                let id = id.clone();
                let store = ctx.props().store.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = store.fetch_one(&id).await;
                    link.send_message(Msg::Fetched(result));
                });
            }
        }
    }
}
