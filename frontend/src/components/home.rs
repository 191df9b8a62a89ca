//! Landing page with quick links into the directory and the create form.

use yew::{html, Callback, Component, Context, Html, Properties};

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Home
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let go_add = nav_callback(ctx, Route::AddStudent);
        let go_list = nav_callback(ctx, Route::Students);

        html! {
            <div class="home">
                <div class="hero-section">
                    <div class="hero-content">
                        <h1>{"Welcome to Student Management System"}</h1>
                        <p class="hero-description">
                            {"A modern web application to manage student information with ease. \
                              Register new students, view all registered students, and manage \
                              their information efficiently."}
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary" onclick={go_add}>
                                {"Add New Student"}
                            </button>
                            <button class="btn btn-secondary" onclick={go_list}>
                                {"View All Students"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="features-section">
                    <div class="container">
                        <h2>{"Features"}</h2>
                        <div class="features-grid">
                            { feature_card("👤", "Student Registration",
                                "Register new students with their personal information including \
                                 name, email, birth date, and academic program.") }
                            { feature_card("📋", "Student Directory",
                                "View all registered students in a clean, organized table format \
                                 with search and filter capabilities.") }
                            { feature_card("🔧", "Data Management",
                                "Edit and update student information or remove students from the \
                                 system as needed.") }
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}

fn nav_callback(ctx: &Context<Home>, target: Route) -> Callback<web_sys::MouseEvent> {
    let on_navigate = ctx.props().on_navigate.clone();
    Callback::from(move |_| on_navigate.emit(target.clone()))
}

fn feature_card(icon: &str, title: &str, text: &str) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{ icon }</div>
            <h3>{ title }</h3>
            <p>{ text }</p>
        </div>
    }
}
