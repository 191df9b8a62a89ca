//! Update function for the student form: binds field edits, runs wholesale
//! validation on submit, dispatches the create/update call, and schedules
//! the cancelable redirect after a success.

use chrono::Local;
use gloo_console::error;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Route;
use crate::services::student_service;

use super::messages::Msg;
use super::state::{Mode, StudentFormComponent, REDIRECT_DELAY_MS};

pub fn update(
    component: &mut StudentFormComponent,
    ctx: &Context<StudentFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::NameChanged(value) => {
            component.fields.name = value;
            true
        }
        Msg::EmailChanged(value) => {
            component.fields.email = value;
            true
        }
        Msg::BirthDateChanged(value) => {
            component.fields.birth_date = value;
            true
        }
        Msg::ProgramChanged(value) => {
            component.fields.program = value;
            true
        }
        Msg::Submit => {
            let today = Local::now().date_naive();
            let Some(draft) = component.try_submit(today) else {
                // Validation failed; the field errors render inline and the
                // backend is never called.
                return true;
            };
            let link = ctx.link().clone();
            match &component.mode {
                Mode::Create => spawn_local(async move {
                    link.send_message(Msg::SubmitFinished(student_service::create(&draft).await));
                }),
                Mode::Edit(id) => {
                    let id = id.clone();
                    spawn_local(async move {
                        link.send_message(Msg::SubmitFinished(
                            student_service::update(&id, &draft).await,
                        ));
                    });
                }
            }
            true
        }
        Msg::SubmitFinished(Ok(_)) => {
            component.submit_succeeded();
            let link = ctx.link().clone();
            component.redirect_timer = Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                link.send_message(Msg::RedirectNow);
            }));
            true
        }
        Msg::SubmitFinished(Err(err)) => {
            error!(format!("submission failed: {err}"));
            component.submit_failed(err.to_string());
            true
        }
        Msg::StudentLoaded { id, result } => {
            if !component.load_applies(&id) {
                // Late response for a form that moved on; ignore it.
                return false;
            }
            match result {
                Ok(student) => component.load_succeeded(&student),
                Err(err) => {
                    error!(format!("loading student {id} failed: {err}"));
                    component.load_failed(err.to_string());
                }
            }
            true
        }
        Msg::RedirectNow => {
            component.redirect_timer = None;
            ctx.props().on_navigate.emit(Route::Students);
            false
        }
        Msg::Cancel => {
            ctx.props().on_navigate.emit(Route::Students);
            false
        }
    }
}
