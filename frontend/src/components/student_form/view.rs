//! View rendering for the student form: the four labelled inputs with their
//! inline validation messages, the submit/cancel actions, and the alert
//! regions for submission status.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::student::Program;
use common::validate::Field;

use super::messages::Msg;
use super::state::StudentFormComponent;

pub fn view(component: &StudentFormComponent, ctx: &Context<StudentFormComponent>) -> Html {
    let link = ctx.link();

    if component.loading {
        return html! {
            <div class="form-container">
                <div class="loading">{"Loading student data..."}</div>
            </div>
        };
    }

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let title = if component.is_edit() {
        "Edit Student"
    } else {
        "Add New Student"
    };

    html! {
        <div class="form-container">
            <div class="form-wrapper">
                <h2>{ title }</h2>

                {
                    if let Some(error) = &component.submit_error {
                        html! { <div class="alert alert-error">{ error.clone() }</div> }
                    } else {
                        Html::default()
                    }
                }
                {
                    if let Some(success) = &component.submit_success {
                        html! { <div class="alert alert-success">{ success.clone() }</div> }
                    } else {
                        Html::default()
                    }
                }

                <form class="student-form" {onsubmit}>
                    { text_field(component, link, Field::Name, "Full Name *", "text",
                        &component.fields.name, "Enter student's full name", Msg::NameChanged) }
                    { text_field(component, link, Field::Email, "Email Address *", "email",
                        &component.fields.email, "Enter email address", Msg::EmailChanged) }
                    { text_field(component, link, Field::BirthDate, "Date of Birth *", "date",
                        &component.fields.birth_date, "", Msg::BirthDateChanged) }
                    { program_field(component, link) }

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled={component.submitting}
                            onclick={link.callback(|_| Msg::Cancel)}
                        >
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={component.submitting}>
                            { submit_label(component) }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn submit_label(component: &StudentFormComponent) -> &'static str {
    if component.submitting {
        "Saving..."
    } else if component.is_edit() {
        "Update Student"
    } else {
        "Create Student"
    }
}

fn text_field(
    component: &StudentFormComponent,
    link: &Scope<StudentFormComponent>,
    field: Field,
    label: &str,
    input_type: &'static str,
    value: &str,
    placeholder: &'static str,
    to_msg: fn(String) -> Msg,
) -> Html {
    let error = component.errors.get(&field).map(|e| e.message());
    let oninput = link.callback(move |e: InputEvent| {
        to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <div class="form-group">
            <label>{ label }</label>
            <input
                type={input_type}
                class={classes!(error.map(|_| "error"))}
                value={value.to_string()}
                {placeholder}
                {oninput}
            />
            { error_span(error) }
        </div>
    }
}

fn program_field(component: &StudentFormComponent, link: &Scope<StudentFormComponent>) -> Html {
    let error = component.errors.get(&Field::Program).map(|e| e.message());
    let onchange = link.callback(|e: Event| {
        Msg::ProgramChanged(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="form-group">
            <label>{"Academic Program *"}</label>
            <select class={classes!(error.map(|_| "error"))} {onchange}>
                <option value="" selected={component.fields.program.is_empty()}>
                    {"Select a program"}
                </option>
                {
                    Program::ALL.iter().map(|program| html! {
                        <option
                            value={program.as_str()}
                            selected={component.fields.program == program.as_str()}
                        >
                            { program.as_str() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            { error_span(error) }
        </div>
    }
}

fn error_span(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <span class="error-message">{ message }</span> },
        None => Html::default(),
    }
}
