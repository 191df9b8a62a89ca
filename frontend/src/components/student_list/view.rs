//! View rendering for the student directory: filters, results summary,
//! the records table with derived ages, and the delete-confirmation modal.

use chrono::Local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::student::{age_on, Student};

use crate::app::Route;

use super::messages::Msg;
use super::state::{EmptyState, StudentListComponent};

pub fn view(component: &StudentListComponent, ctx: &Context<StudentListComponent>) -> Html {
    let link = ctx.link();

    if component.loading && component.students.is_empty() {
        return html! {
            <div class="list-container">
                <div class="loading">{"Loading students..."}</div>
            </div>
        };
    }

    let filtered = component.filtered();
    let go_add = {
        let on_navigate = ctx.props().on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::AddStudent))
    };

    html! {
        <div class="list-container">
            <div class="list-header">
                <h2>{"Student Directory"}</h2>
                <button class="btn btn-primary" onclick={go_add.clone()}>
                    {"Add New Student"}
                </button>
            </div>

            {
                if let Some(error) = &component.error {
                    html! { <div class="alert alert-error">{ error.clone() }</div> }
                } else {
                    Html::default()
                }
            }

            { build_filters(component, link) }
            { build_results_info(component, filtered.len()) }

            {
                match component.empty_state() {
                    Some(EmptyState::NoneRegistered) => html! {
                        <div class="no-students">
                            <p>{"No students registered yet."}</p>
                            <button class="btn btn-primary" onclick={go_add}>
                                {"Add First Student"}
                            </button>
                        </div>
                    },
                    Some(EmptyState::NoMatches) => html! {
                        <div class="no-students">
                            <p>{"No students match your search criteria."}</p>
                        </div>
                    },
                    None => build_table(&filtered, ctx),
                }
            }

            { build_delete_modal(component, link) }
        </div>
    }
}

fn build_filters(component: &StudentListComponent, link: &Scope<StudentListComponent>) -> Html {
    let on_search = link.callback(|e: InputEvent| {
        Msg::SearchChanged(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_program = link.callback(|e: Event| {
        Msg::ProgramChanged(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="filters">
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name or email..."
                    value={component.search_term.clone()}
                    oninput={on_search}
                />
            </div>
            <div class="program-filter">
                <select class="filter-select" onchange={on_program}>
                    <option value="" selected={component.selected_program.is_none()}>
                        {"All Programs"}
                    </option>
                    {
                        component.filter_programs().into_iter().map(|program| html! {
                            <option
                                value={program.as_str()}
                                selected={component.selected_program == Some(program)}
                            >
                                { program.as_str() }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
        </div>
    }
}

fn build_results_info(component: &StudentListComponent, shown: usize) -> Html {
    html! {
        <div class="results-info">
            <p>
                { format!("Showing {} of {} students", shown, component.students.len()) }
                {
                    if component.search_term.is_empty() {
                        Html::default()
                    } else {
                        html! { <span>{ format!(" matching \"{}\"", component.search_term) }</span> }
                    }
                }
                {
                    if let Some(program) = component.selected_program {
                        html! { <span>{ format!(" in {program}") }</span> }
                    } else {
                        Html::default()
                    }
                }
            </p>
        </div>
    }
}

fn build_table(students: &[&Student], ctx: &Context<StudentListComponent>) -> Html {
    let today = Local::now().date_naive();
    let link = ctx.link();

    html! {
        <div class="table-container">
            <table class="students-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Age"}</th>
                        <th>{"Birth Date"}</th>
                        <th>{"Program"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                {
                    students.iter().map(|student| {
                        let edit = {
                            let on_navigate = ctx.props().on_navigate.clone();
                            let id = student.id.clone();
                            Callback::from(move |_| {
                                on_navigate.emit(Route::EditStudent(id.clone()))
                            })
                        };
                        let request_delete = {
                            let student = (*student).clone();
                            link.callback(move |_| Msg::RequestDelete(student.clone()))
                        };

                        html! {
                            <tr key={student.id.clone()}>
                                <td class="name-cell">
                                    <div class="student-name">{ student.name.clone() }</div>
                                </td>
                                <td class="email-cell">
                                    <a class="email-link" href={format!("mailto:{}", student.email)}>
                                        { student.email.clone() }
                                    </a>
                                </td>
                                <td>{ format!("{} years", age_on(student.birth_date, today)) }</td>
                                <td>{ student.birth_date.format("%B %-d, %Y").to_string() }</td>
                                <td><span class="program-badge">{ student.program.as_str() }</span></td>
                                <td class="actions-cell">
                                    <button class="btn btn-small btn-secondary" title="Edit student" onclick={edit}>
                                        {"Edit"}
                                    </button>
                                    <button class="btn btn-small btn-danger" title="Delete student" onclick={request_delete}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
                </tbody>
            </table>
        </div>
    }
}

fn build_delete_modal(component: &StudentListComponent, link: &Scope<StudentListComponent>) -> Html {
    let Some(student) = &component.delete_confirm else {
        return Html::default();
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{"Confirm Delete"}</h3>
                <p>
                    {"Are you sure you want to delete "}
                    <strong>{ student.name.clone() }</strong>
                    {"? This action cannot be undone."}
                </p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={link.callback(|_| Msg::CancelDelete)}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                        {"Delete Student"}
                    </button>
                </div>
            </div>
        </div>
    }
}
