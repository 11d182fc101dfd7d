//! View rendering for the people registration component: the form with its
//! drop zone, the hidden native file input and the people table.

use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PeopleComponent;
use crate::components::data_table::{ActionColumn, Column, DataTable, TableConfig};

pub fn view(component: &PeopleComponent, ctx: &Context<PeopleComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="people-root">
            <h1>{"People"}</h1>
            { build_form(component, link) }
            <DataTable
                columns={table_columns()}
                data={component.rows.clone()}
                config={table_config()}
                on_action={link.callback(Msg::TableAction)}
            />
        </div>
    }
}

/// Builds the creation form: two required text fields, the drop zone and
/// the submit button.
fn build_form(component: &PeopleComponent, link: &Scope<PeopleComponent>) -> Html {
    html! {
        <form
            class="person-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { text_field("Name", "Enter your name", &component.name, link.callback(|e: InputEvent| {
                Msg::NameInput(e.target_unchecked_into::<HtmlInputElement>().value())
            })) }
            { text_field("Surname", "Enter your surname", &component.surname, link.callback(|e: InputEvent| {
                Msg::SurnameInput(e.target_unchecked_into::<HtmlInputElement>().value())
            })) }
            { build_drop_zone(component, link) }
            <button type="submit" class="submit-btn">
                { if component.submitting { "Saving..." } else { "Save" } }
            </button>
        </form>
    }
}

fn text_field(
    label: &str,
    placeholder: &str,
    value: &str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="text"
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}

/// The drop target. Drag-over must suppress the browser's default
/// navigation for the drop event to fire; clicking opens the file picker
/// as a fallback.
fn build_drop_zone(component: &PeopleComponent, link: &Scope<PeopleComponent>) -> Html {
    let class = classes!(
        "drop-zone",
        component.is_dragging.then_some("dragging"),
        component.selected_file.is_some().then_some("has-file"),
    );

    html! {
        <div
            {class}
            ondragover={link.callback(|e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                Msg::DragOver
            })}
            ondragleave={link.callback(|e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                Msg::DragLeave
            })}
            ondrop={link.batch_callback(|e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                // Only the first file of the list is considered.
                let file = e
                    .data_transfer()
                    .and_then(|transfer| transfer.files())
                    .and_then(|files| files.get(0));
                match file {
                    Some(file) => vec![Msg::FileOffered(file)],
                    None => vec![Msg::DragLeave],
                }
            })}
            onclick={link.callback(|_| Msg::OpenFileDialog)}
        >
            {
                match &component.selected_file {
                    Some(file) => html! { <span class="file-name">{ file.name() }</span> },
                    None => html! { <span>{"Drop an Excel file here or click to browse"}</span> },
                }
            }
            <input
                type="file"
                ref={component.file_input_ref.clone()}
                accept=".xlsx,.xls"
                style="display: none;"
                // The programmatic click bubbles back up to the drop zone;
                // without this it would reopen the dialog.
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    match input.files().and_then(|files| files.get(0)) {
                        Some(file) => vec![Msg::FileOffered(file)],
                        None => vec![],
                    }
                })}
            />
        </div>
    }
}

fn table_columns() -> Vec<Column> {
    [
        ("name", "Name"),
        ("surname", "Surname"),
        ("seniority", "Seniority"),
        ("yearsOfExperience", "Years of experience"),
        ("availability", "Availability"),
    ]
    .into_iter()
    .map(|(name, label)| Column {
        name: name.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn table_config() -> TableConfig {
    TableConfig {
        paginator: true,
        page_size_options: vec![5, 10, 25],
        action_column: vec![ActionColumn {
            icon: "delete".to_string(),
            tooltip: "Delete".to_string(),
            name: "delete".to_string(),
        }],
    }
}
