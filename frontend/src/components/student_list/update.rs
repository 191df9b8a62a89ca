//! Update function for the student directory: applies the pure state
//! transitions and dispatches facade calls, feeding results back as
//! messages. Returns whether the view should re-render.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::student_service;

use super::messages::Msg;
use super::state::StudentListComponent;

pub fn update(
    component: &mut StudentListComponent,
    ctx: &Context<StudentListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            component.begin_load();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(student_service::list_all().await));
            });
            true
        }
        Msg::Loaded(Ok(records)) => {
            component.load_succeeded(records);
            true
        }
        Msg::Loaded(Err(err)) => {
            error!(format!("loading students failed: {err}"));
            component.load_failed(err.to_string());
            true
        }
        Msg::SearchChanged(term) => {
            component.set_search_term(term);
            true
        }
        Msg::ProgramChanged(value) => {
            // The dropdown's empty value means "All Programs"; anything else
            // is one of the display names it was populated with.
            component.set_selected_program(value.parse().ok());
            true
        }
        Msg::RequestDelete(student) => {
            component.request_delete(student);
            true
        }
        Msg::CancelDelete => {
            component.cancel_delete();
            true
        }
        Msg::ConfirmDelete => {
            let Some(student) = component.delete_confirm.clone() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = student_service::delete(&student.id).await;
                link.send_message(Msg::DeleteFinished {
                    id: student.id,
                    result,
                });
            });
            false
        }
        Msg::DeleteFinished { id, result } => {
            match result {
                Ok(()) => component.delete_succeeded(&id),
                Err(err) => {
                    error!(format!("deleting student {id} failed: {err}"));
                    component.delete_failed(err.to_string());
                }
            }
            true
        }
    }
}
