//! Student directory: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and messages.
//! The collection is fetched once on first render and filtered locally.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentListProps;
pub use state::StudentListComponent;

impl Component for StudentListComponent {
    type Message = Msg;
    type Properties = StudentListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentListComponent::new()
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
            ctx.link().send_message(Msg::Load);
        }
    }
}
