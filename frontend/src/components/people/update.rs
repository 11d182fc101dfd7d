//! Update function for the people registration component.
//!
//! Receives the current `PeopleComponent` state, the `Context` and a `Msg`,
//! mutates the state accordingly and returns whether the view should
//! re-render. All HTTP work runs in `spawn_local` futures that report back
//! through further messages.
//!
//! Failure handling is deliberately quiet: transport errors are logged to
//! the console and the state is left as it was, while every successful
//! create/delete shows a snackbar. Overlapping requests are not serialized;
//! the last list response to arrive wins.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::person::Person;

use crate::api::people::PeopleApi;

use super::helpers::{is_excel_mime, show_snackbar};
use super::messages::Msg;
use super::state::PeopleComponent;

pub fn update(component: &mut PeopleComponent, ctx: &Context<PeopleComponent>, msg: Msg) -> bool {
    match msg {
        Msg::NameInput(value) => {
            component.name = value;
            true
        }
        Msg::SurnameInput(value) => {
            component.surname = value;
            true
        }
        Msg::DragOver => {
            component.is_dragging = true;
            true
        }
        Msg::DragLeave => {
            component.is_dragging = false;
            true
        }
        Msg::FileOffered(file) => {
            component.is_dragging = false;
            // Unsupported types leave the previous selection untouched.
            if is_excel_mime(&file.type_()) {
                component.selected_file = Some(file);
            }
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::Submit => {
            if !component.can_submit() {
                return false;
            }
            let person = Person {
                id: None,
                name: component.name.clone(),
                surname: component.surname.clone(),
            };
            let Some(file) = component.selected_file.clone() else {
                return false;
            };
            component.submitting = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match PeopleApi::new().create_with_file(&person, &file).await {
                    Ok(_) => link.send_message(Msg::Created),
                    Err(err) => link.send_message(Msg::CreateFailed(err)),
                }
            });
            true
        }
        Msg::Created => {
            component.submitting = false;
            component.reset_form();
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            show_snackbar("The person has been saved");
            ctx.link().send_message(Msg::LoadPeople);
            true
        }
        Msg::CreateFailed(err) => {
            component.submitting = false;
            error!(format!("saving person failed: {err}"));
            true
        }
        Msg::LoadPeople => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match PeopleApi::new().list().await {
                    Ok(rows) => link.send_message(Msg::RowsLoaded(rows)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
            false
        }
        Msg::RowsLoaded(rows) => {
            component.set_rows(rows);
            true
        }
        Msg::LoadFailed(err) => {
            // Previously fetched rows stay visible.
            error!(format!("listing people failed: {err}"));
            false
        }
        Msg::TableAction(action) => {
            if action.action == "delete" {
                if let Some(id) = action.row.id {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match PeopleApi::new().delete(id).await {
                            Ok(_) => link.send_message(Msg::Deleted),
                            Err(err) => link.send_message(Msg::DeleteFailed(err)),
                        }
                    });
                }
            }
            false
        }
        Msg::Deleted => {
            show_snackbar("The person has been deleted");
            ctx.link().send_message(Msg::LoadPeople);
            false
        }
        Msg::DeleteFailed(err) => {
            error!(format!("deleting person failed: {err}"));
            false
        }
    }
}
