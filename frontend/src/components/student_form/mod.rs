//! Student form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and messages.
//!
//! In edit mode the target record is prefetched on first render and all four
//! fields are pre-populated; responses that arrive after the form moved on
//! (different id, teardown) are dropped. The pending post-success redirect
//! is cancelled whenever the component state is replaced or destroyed.

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::student_service;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentFormProps;
pub use state::{Mode, StudentFormComponent};

impl Component for StudentFormComponent {
    type Message = Msg;
    type Properties = StudentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        StudentFormComponent::new(ctx.props().student_id.clone())
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
            if let Mode::Edit(id) = &self.mode {
                dispatch_load(ctx.link(), id.clone());
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let incoming = ctx.props().student_id.clone();
        let current = match &self.mode {
            Mode::Edit(id) => Some(id.clone()),
            Mode::Create => None,
        };
        if incoming != current {
            // Fresh state for the new target; replacing self drops any
            // pending redirect timer.
            *self = StudentFormComponent::new(incoming.clone());
            self.loaded = true;
            if let Some(id) = incoming {
                dispatch_load(ctx.link(), id);
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Cancels the pending redirect so it cannot fire on unmounted state.
        self.redirect_timer.take();
    }
}

fn dispatch_load(link: &Scope<StudentFormComponent>, id: String) {
    let link = link.clone();
    spawn_local(async move {
        let result = student_service::get_by_id(&id).await;
        link.send_message(Msg::StudentLoaded { id, result });
    });
}
