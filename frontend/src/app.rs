//! Root component: owns the active route and renders the header plus the
//! view for the current destination. Navigation is plain component state
//! driven by `Msg::Navigate`; children receive an `on_navigate` callback.

use yew::{html, Component, Context, Html};

use crate::components::header::Header;
use crate::components::home::Home;
use crate::components::student_form::StudentFormComponent;
use crate::components::student_list::StudentListComponent;

/// The navigable destinations of the app. The edit route carries the id of
/// the record being edited, the equivalent of a path parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Students,
    AddStudent,
    EditStudent(String),
}

pub enum Msg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { route: Route::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if self.route == route {
                    false
                } else {
                    self.route = route;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);

        html! {
            <div class="app">
                <Header current={self.route.clone()} on_navigate={on_navigate.clone()} />
                <main class="main-content">
                {
                    match &self.route {
                        Route::Home => html! { <Home on_navigate={on_navigate} /> },
                        Route::Students => html! { <StudentListComponent on_navigate={on_navigate} /> },
                        Route::AddStudent => html! { <StudentFormComponent on_navigate={on_navigate} /> },
                        Route::EditStudent(id) => html! {
                            <StudentFormComponent student_id={Some(id.clone())} on_navigate={on_navigate} />
                        },
                    }
                }
                </main>
            </div>
        }
    }
}
