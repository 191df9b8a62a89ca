//! Top navigation bar with active-link highlighting.

use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = &ctx.props().current;

        html! {
            <header class="header">
                <div class="header-container">
                    <div class="logo">
                        <h1>{"🎓 Student Management System"}</h1>
                    </div>
                    <nav class="navigation">
                        { nav_link(ctx, "Home", Route::Home, *current == Route::Home) }
                        { nav_link(ctx, "View Students", Route::Students, *current == Route::Students) }
                        { nav_link(ctx, "Add Student", Route::AddStudent, *current == Route::AddStudent) }
                    </nav>
                </div>
            </header>
        }
    }
}

fn nav_link(ctx: &Context<Header>, label: &str, target: Route, active: bool) -> Html {
    let on_navigate = ctx.props().on_navigate.clone();
    let onclick = Callback::from(move |_| on_navigate.emit(target.clone()));

    html! {
        <a class={classes!("nav-link", active.then_some("active"))} {onclick}>
            { label }
        </a>
    }
}
